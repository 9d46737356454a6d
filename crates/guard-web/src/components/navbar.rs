use guard_core::Route;
use leptos::prelude::*;
use leptos_router::components::A;

use super::LoginToggle;
use crate::config::use_config;

/// Links to every route, plus the login toggle when configured there
#[component]
pub fn Navbar() -> impl IntoView {
    let config = use_config();

    view! {
        <nav class="bg-gray-800 p-4 text-white flex justify-between">
            <div class="space-x-4 [&_a:hover]:underline">
                {Route::ALL
                    .into_iter()
                    .map(|route| view! {
                        <A href=route.path()>{route.label()}</A>
                    })
                    .collect_view()}
            </div>
            {config.toggle.in_navbar().then(|| view! { <LoginToggle /> })}
        </nav>
    }
}
