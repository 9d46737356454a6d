use guard_core::NOT_FOUND_TEXT;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <p class="p-5 text-center">{NOT_FOUND_TEXT}</p> }
}
