//! Headless app shell
//!
//! Owns the session, the history and the route table, and renders the
//! current location into a [`Frame`]. Session changes mark the shell dirty
//! through a subscription; the pending re-render runs before the event that
//! caused it returns, which is what lets a mounted guarded page redirect
//! right after logout.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::config::Config;
use crate::error::ShellError;
use crate::guard::{Access, check, guard};
use crate::history::History;
use crate::navbar::{Navbar, NavbarView};
use crate::pages::{Home, NotFound, Profile, Setting};
use crate::render::{Page, RenderCtx, Renderable, View};
use crate::route::{Location, Route};
use crate::session::{Session, SessionFlag, SubscriptionId};

/// Redirects followed within one render pass before giving up
const MAX_REDIRECTS: usize = 4;

/// Which login button was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleSite {
    Navbar,
    Home,
}

impl fmt::Display for ToggleSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleSite::Navbar => f.write_str("navbar"),
            ToggleSite::Home => f.write_str("home page"),
        }
    }
}

/// Result of the latest render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Normalized path of the current history entry
    pub path: String,
    /// `None` when the path matched no route
    pub route: Option<Route>,
    pub navbar: NavbarView,
    pub page: Page,
}

pub struct AppShell {
    config: Config,
    session: Session,
    history: History,
    navbar: Navbar,
    routes: Vec<(Route, Box<dyn Renderable>)>,
    dirty: Rc<Cell<bool>>,
    subscription: SubscriptionId,
    frame: Frame,
}

/// Route table for a configuration; guarded routes get wrapped
fn build_routes(config: &Config) -> Vec<(Route, Box<dyn Renderable>)> {
    Route::ALL
        .into_iter()
        .map(|route| {
            let page: Box<dyn Renderable> = match route {
                Route::Home => Box::new(Home::new(config.toggle.on_home())),
                Route::Profile => Box::new(Profile),
                Route::Setting => Box::new(Setting),
            };
            let page: Box<dyn Renderable> = if config.is_guarded(route) { Box::new(guard(page)) } else { page };
            (route, page)
        })
        .collect()
}

impl AppShell {
    /// Mount the shell: logged out, at "/"
    pub fn new(config: Config) -> Result<Self, ShellError> {
        let session = Session::new();
        let dirty = Rc::new(Cell::new(false));
        let flag = Rc::clone(&dirty);
        let subscription = session.subscribe(move |_| flag.set(true));

        let navbar = Navbar::new(config.toggle.in_navbar());
        let mut shell = Self {
            routes: build_routes(&config),
            frame: Frame {
                path: "/".to_string(),
                route: Some(Route::Home),
                navbar: navbar.render(&session),
                page: Page {
                    content: "",
                    toggle: None,
                    props: Default::default(),
                },
            },
            config,
            session,
            history: History::new(),
            navbar,
            dirty,
            subscription,
        };
        shell.render()?;
        Ok(shell)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn is_login(&self) -> bool {
        self.session.is_login()
    }

    /// Push a new history entry and render it.
    /// A guarded target that would redirect replaces the current entry instead.
    pub fn navigate(&mut self, path: &str) -> Result<&Frame, ShellError> {
        debug!(path, "navigate");
        let denied = Location::parse(path)
            .route()
            .filter(|route| self.config.is_guarded(*route))
            .map(|_| check(self.session.is_login()));

        match denied {
            Some(Access::Redirect(to)) => {
                debug!(from = path, to = to.path(), "guard redirect");
                self.history.replace(to.path());
            }
            _ => self.history.push(path),
        }
        self.render()
    }

    pub fn back(&mut self) -> Result<&Frame, ShellError> {
        if !self.history.back() {
            return Ok(&self.frame);
        }
        self.render()
    }

    pub fn forward(&mut self) -> Result<&Frame, ShellError> {
        if !self.history.forward() {
            return Ok(&self.frame);
        }
        self.render()
    }

    /// Click a login/logout button; it must be rendered in the current frame
    pub fn click_toggle(&mut self, site: ToggleSite) -> Result<&Frame, ShellError> {
        let rendered = match site {
            ToggleSite::Navbar => self.frame.navbar.toggle.is_some(),
            ToggleSite::Home => self.frame.route == Some(Route::Home) && self.frame.page.toggle.is_some(),
        };
        if !rendered {
            return Err(ShellError::ToggleUnavailable(site));
        }
        self.session.toggle();
        self.flush()
    }

    /// Re-render if the session changed since the last pass
    pub fn flush(&mut self) -> Result<&Frame, ShellError> {
        if !self.dirty.get() {
            return Ok(&self.frame);
        }
        self.render()
    }

    fn render(&mut self) -> Result<&Frame, ShellError> {
        self.dirty.set(false);

        for _ in 0..=MAX_REDIRECTS {
            let location = Location::parse(self.history.current());
            let route = location.route();
            let mut cx = RenderCtx {
                session: &self.session,
                history: &mut self.history,
                props: &location.props,
            };

            let view = match route.and_then(|route| self.routes.iter().find(|(r, _)| *r == route)) {
                Some((_, page)) => page.render(&mut cx),
                None => NotFound.render(&mut cx),
            };

            match view {
                View::Page(page) => {
                    self.frame = Frame {
                        path: location.path,
                        route,
                        navbar: self.navbar.render(&self.session),
                        page,
                    };
                    return Ok(&self.frame);
                }
                View::Redirect(to) => debug!(from = %location.path, to = to.path(), "following redirect"),
            }
        }

        Err(ShellError::RedirectLoop {
            path: self.history.current().to_string(),
            limit: MAX_REDIRECTS,
        })
    }
}

impl Drop for AppShell {
    fn drop(&mut self) {
        self.session.unsubscribe(self.subscription);
    }
}

impl fmt::Debug for AppShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppShell")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("history", &self.history)
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}
