//! Route guard for Leptos pages
//!
//! The wrapped view is a reactive closure over the session flag, so logging
//! out while a guarded page is mounted swaps it for a redirect immediately.

use guard_core::{Access, check};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use tracing::debug;

use crate::auth::use_auth;

/// Wrap a page so it only renders for a logged-in session.
/// Logged-out visitors are sent to "/" with a history replace.
pub fn with_auth<F, V>(page: F) -> impl Fn() -> AnyView + Clone + Send + Sync + 'static
where
    F: Fn() -> V + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || {
        let auth = use_auth();
        let page = page.clone();

        view! {
            {move || match check(auth.is_login.get()) {
                Access::Granted => page().into_any(),
                Access::Redirect(to) => {
                    debug!(to = to.path(), "guard redirect");
                    let options = NavigateOptions {
                        replace: true,
                        ..Default::default()
                    };
                    view! { <Redirect path=to.path() options=options /> }.into_any()
                }
            }}
        }
        .into_any()
    }
}

/// Apply [`with_auth`] only when `guarded` is set
pub fn guard_if<F, V>(guarded: bool, page: F) -> impl Fn() -> AnyView + Clone + Send + Sync + 'static
where
    F: Fn() -> V + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let protected = with_auth(page.clone());

    move || if guarded { protected() } else { page().into_any() }
}
