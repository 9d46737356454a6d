//! Route guard
//!
//! [`guard`] decorates any [`Renderable`] so it only renders for a logged-in
//! session. Logged-out renders rewrite the current history entry to `/`
//! (replace, not push) so Back never lands on the protected page again.
//! The check runs on every render, so a mounted page redirects as soon as
//! the session logs out and the shell re-renders.

use tracing::debug;

use crate::render::{RenderCtx, Renderable, View};
use crate::route::Route;
use crate::session::SessionFlag;

/// Outcome of the guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(Route),
}

/// Pure guard decision, shared with the browser wrapper
pub fn check(is_login: bool) -> Access {
    if is_login { Access::Granted } else { Access::Redirect(Route::ROOT) }
}

/// A component that is only rendered for logged-in sessions
#[derive(Debug, Clone)]
pub struct Guarded<R> {
    inner: R,
}

pub fn guard<R: Renderable>(inner: R) -> Guarded<R> {
    Guarded { inner }
}

impl<R> Guarded<R> {
    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: Renderable> Renderable for Guarded<R> {
    fn render(&self, cx: &mut RenderCtx<'_>) -> View {
        match check(cx.session.is_login()) {
            Access::Granted => self.inner.render(cx),
            Access::Redirect(to) => {
                debug!(from = cx.history.current(), to = to.path(), "guard redirect");
                cx.history.replace(to.path());
                View::Redirect(to)
            }
        }
    }
}
