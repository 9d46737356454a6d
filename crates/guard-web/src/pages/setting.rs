use guard_core::SETTING_TEXT;
use leptos::prelude::*;

#[component]
pub fn SettingPage() -> impl IntoView {
    view! { <main class="p-5 text-center text-xl">{SETTING_TEXT}</main> }
}
