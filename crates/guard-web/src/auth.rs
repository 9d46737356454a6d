//! Session flag for the browser, shared through Leptos context

use guard_core::SessionFlag;
use leptos::prelude::*;
use tracing::debug;

/// Login flag visible to every component under [`AuthProvider`]
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub is_login: RwSignal<bool>,
}

impl AuthContext {
    fn new() -> Self {
        Self {
            is_login: RwSignal::new(false),
        }
    }
}

impl SessionFlag for AuthContext {
    fn is_login(&self) -> bool {
        self.is_login.get()
    }

    fn set_login(&self, value: bool) {
        if self.is_login.get_untracked() == value {
            return;
        }
        debug!(is_login = value, "session flag changed");
        self.is_login.set(value);
    }
}

/// Outermost wrapper: starts logged out, lost on reload
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthContext::new());

    children()
}

/// Panics outside [`AuthProvider`]; a private fallback flag would split the session
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_auth_shares_provided_flag() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(AuthContext::new());

            let writer = use_auth();
            let reader = use_auth();
            assert!(!reader.is_login.get_untracked());

            writer.toggle();
            assert!(reader.is_login.get_untracked());
        });
    }

    #[test]
    #[should_panic]
    fn test_use_auth_requires_provider() {
        let owner = Owner::new();
        owner.with(|| {
            let _ = use_auth();
        });
    }
}
