use guard_core::{SessionFlag, toggle_label};
use leptos::prelude::*;

use crate::auth::use_auth;

/// Login/Logout button; flips the shared session flag
#[component]
pub fn LoginToggle() -> impl IntoView {
    let auth = use_auth();

    view! {
        <button class="bg-blue-500 px-4 py-2 rounded" on:click=move |_| auth.toggle()>
            {move || toggle_label(auth.is_login.get())}
        </button>
    }
}
