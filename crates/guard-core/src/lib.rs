//! Guarded routing, without a browser
//!
//! A single in-memory login flag ([`Session`]), three routes, and a guard
//! that sends logged-out visitors back to `/` with a history replace.
//! [`AppShell`] ties them into the session-and-routing state machine so the
//! behavior can be driven and tested headlessly; the Leptos front end reuses
//! the route table, labels, guard decision and [`Config`] from here.

mod config;
mod error;
mod guard;
mod history;
mod navbar;
mod pages;
mod render;
mod route;
mod session;
mod shell;

pub use config::{Config, FileConfig, TogglePlacement};
pub use error::{ConfigError, ShellError};
pub use guard::{Access, Guarded, check, guard};
pub use history::History;
pub use navbar::{LOGIN_LABEL, LOGOUT_LABEL, Navbar, NavbarView, ToggleButton, toggle_label};
pub use pages::{HOME_TEXT, Home, NOT_FOUND_TEXT, NotFound, PROFILE_TEXT, Profile, SETTING_TEXT, Setting};
pub use render::{Page, RenderCtx, Renderable, View};
pub use route::{Location, Props, Route};
pub use session::{Session, SessionFlag, SubscriptionId};
pub use shell::{AppShell, Frame, ToggleSite};
