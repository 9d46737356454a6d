mod login_toggle;
mod navbar;
mod with_auth;

pub use login_toggle::LoginToggle;
pub use navbar::Navbar;
pub use with_auth::{guard_if, with_auth};
