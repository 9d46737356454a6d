use guard_core::PROFILE_TEXT;
use leptos::prelude::*;

/// Only reachable through the guard
#[component]
pub fn ProfilePage() -> impl IntoView {
    view! { <main class="p-5 text-center text-xl">{PROFILE_TEXT}</main> }
}
