//! Navigation bar model: fixed links plus the login/logout toggle

use crate::route::Route;
use crate::session::SessionFlag;

pub const LOGIN_LABEL: &str = "Login";
pub const LOGOUT_LABEL: &str = "Logout";

/// Button text offers the opposite of the current state
pub fn toggle_label(is_login: bool) -> &'static str {
    if is_login { LOGOUT_LABEL } else { LOGIN_LABEL }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleButton {
    pub label: &'static str,
}

impl ToggleButton {
    pub fn for_session(session: &impl SessionFlag) -> Self {
        Self {
            label: toggle_label(session.is_login()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavbarView {
    pub links: &'static [Route],
    pub toggle: Option<ToggleButton>,
}

/// Rendered on every route by the shell
#[derive(Debug, Clone, Copy)]
pub struct Navbar {
    show_toggle: bool,
}

impl Navbar {
    pub fn new(show_toggle: bool) -> Self {
        Self { show_toggle }
    }

    pub fn render(&self, session: &impl SessionFlag) -> NavbarView {
        NavbarView {
            links: &Route::ALL,
            toggle: self.show_toggle.then(|| ToggleButton::for_session(session)),
        }
    }
}
