use guard_core::HOME_TEXT;
use leptos::prelude::*;

use crate::components::LoginToggle;
use crate::config::use_config;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_config();

    view! {
        <main class="p-5 text-center text-xl">
            <div>{HOME_TEXT}</div>
            // Second toggle when configured for the home page
            {config.toggle.on_home().then(|| view! {
                <div class="mt-4">
                    <LoginToggle />
                </div>
            })}
        </main>
    }
}
