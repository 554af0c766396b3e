use crate::{
    components::theme::ThemeToggle,
    state::{
        navigation::{NavigationState, Page},
        theme::ThemeState,
    },
};
use leptos::ev::MouseEvent;
use leptos::*;

/// Unread notifications shown on the header bell.
pub const NOTIFICATION_COUNT: u32 = 3;

#[component]
pub fn Sidebar(
    navigation: NavigationState,
    theme: ThemeState,
    #[prop(into)] company_name: String,
) -> impl IntoView {
    let current = navigation.current();

    view! {
        <aside class="w-64 bg-white dark:bg-gray-800 h-screen shadow-lg flex-shrink-0">
            <div class="p-6 flex justify-between items-center">
                <span class="text-xl font-bold text-primary">{company_name}</span>
                <ThemeToggle theme=theme />
            </div>
            <nav class="mt-6">
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <a
                                href=page.path()
                                class=move || {
                                    if current.get() == page {
                                        "flex items-center px-6 py-3 bg-primary-lighter text-primary-dark dark:bg-primary-darker dark:text-primary-light"
                                    } else {
                                        "flex items-center px-6 py-3 text-gray-700 dark:text-gray-200 hover:bg-primary-lighter hover:text-primary-dark transition-colors"
                                    }
                                }
                                aria-current=move || (current.get() == page).then_some("page")
                                on:click=move |ev: MouseEvent| {
                                    ev.prevent_default();
                                    navigation.navigate(page);
                                }
                            >
                                <i class=format!("{} w-5 mr-3", page.icon())></i>
                                <span class="font-medium">{page.label()}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Top bar. The search box and the bell are decorative.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-white dark:bg-gray-800 h-16 px-6 flex items-center justify-between shadow-sm">
            <div class="flex items-center flex-1">
                <div class="relative w-96">
                    <input
                        type="text"
                        placeholder="Buscar..."
                        class="w-full pl-10 pr-4 py-2 rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-primary"
                    />
                    <i class="fas fa-search absolute left-3 top-3 text-gray-400"></i>
                </div>
            </div>
            <div class="flex items-center space-x-4">
                <button type="button" class="relative p-2 text-gray-400 hover:text-primary" aria-label="Notificações">
                    <i class="fas fa-bell text-xl"></i>
                    <span class="absolute top-0 right-0 h-4 w-4 bg-primary rounded-full text-xs text-white flex items-center justify-center">
                        {NOTIFICATION_COUNT}
                    </span>
                </button>
                <div class="flex items-center space-x-2">
                    <div class="w-8 h-8 bg-primary-lighter dark:bg-primary-darker rounded-full flex items-center justify-center">
                        <i class="fas fa-user text-primary-dark"></i>
                    </div>
                    <span class="text-sm font-medium text-gray-900 dark:text-white">"Admin"</span>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(
    navigation: NavigationState,
    theme: ThemeState,
    #[prop(into)] company_name: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex h-screen bg-gray-100 dark:bg-gray-900">
            <Sidebar navigation=navigation theme=theme company_name=company_name />
            <div class="flex-1 flex flex-col overflow-hidden">
                <Header />
                <main class="flex-1 overflow-x-hidden overflow-y-auto p-6">{children()}</main>
            </div>
        </div>
    }
}
