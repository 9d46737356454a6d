use guard_core::Route as AppRoute;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::auth::AuthProvider;
use crate::components::{Navbar, guard_if};
use crate::config::{self, provide_config};
use crate::pages::{HomePage, NotFoundPage, ProfilePage, SettingPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = config::load();
    let profile = guard_if(config.is_guarded(AppRoute::Profile), ProfilePage);
    let setting = guard_if(config.is_guarded(AppRoute::Setting), SettingPage);
    provide_config(config);

    view! {
        <Title text="Guarded routing" />
        <AuthProvider>
            <Router>
                <Navbar />
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/profile") view=profile />
                    <Route path=path!("/setting") view=setting />
                </Routes>
            </Router>
        </AuthProvider>
    }
}
