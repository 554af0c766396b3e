use crate::state::theme::ThemeState;
use leptos::*;

#[component]
pub fn ThemeToggle(theme: ThemeState) -> impl IntoView {
    let is_dark = theme.is_dark();

    view! {
        <button
            type="button"
            class="p-2 rounded-lg bg-gray-100 dark:bg-gray-700 text-gray-800 dark:text-white hover:bg-primary-light dark:hover:bg-primary-dark"
            on:click=move |_| theme.toggle()
            aria-label=move || if is_dark.get() { "Tema claro" } else { "Tema escuro" }
        >
            <i class=move || if is_dark.get() { "fas fa-sun" } else { "fas fa-moon" }></i>
        </button>
    }
}
