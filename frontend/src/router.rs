use leptos::*;
use leptos_meta::{provide_meta_context, Title};

use crate::{
    components::layout::Layout,
    config,
    pages::{
        AiAssistantPage, CustomersPage, DashboardPage, FinancePage, IntegrationsPage,
        InventoryPage, LogisticsPage, MarketingPage, OrdersPage, ReportsPage, SettingsPage,
    },
    state::{
        navigation::{provide_navigation, use_navigation, NavigationState, Page},
        theme::{provide_theme, use_theme},
    },
};

pub fn mount_app() {
    mount_to_body(app_root);
}

/// Configured start page wins; otherwise the browser location decides.
fn initial_page() -> Page {
    let cfg = config::current();
    if cfg.initial_page.is_some() {
        return cfg.initial_page();
    }
    page_at(location_path())
}

/// Panel for a browser location; no location means the dashboard.
fn page_at(path: Option<String>) -> Page {
    path.map(|path| Page::from_path(&path)).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn location_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn location_path() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn sync_location(page: Page) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if location_path().as_deref() != Some(page.path()) {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(page.path()));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn sync_location(_page: Page) {}

/// Back and forward move the shell to whatever page the location now names.
#[cfg(target_arch = "wasm32")]
fn follow_history(navigation: NavigationState) {
    let handle = window_event_listener(ev::popstate, move |_| {
        navigation.navigate_to_path(&location_path().unwrap_or_default());
    });
    on_cleanup(move || handle.remove());
}

#[cfg(not(target_arch = "wasm32"))]
fn follow_history(_navigation: NavigationState) {}

pub fn render_page(page: Page) -> View {
    match page {
        Page::Dashboard => view! { <DashboardPage/> }.into_view(),
        Page::Inventory => view! { <InventoryPage/> }.into_view(),
        Page::Orders => view! { <OrdersPage/> }.into_view(),
        Page::Customers => view! { <CustomersPage/> }.into_view(),
        Page::Logistics => view! { <LogisticsPage/> }.into_view(),
        Page::AiAssistant => view! { <AiAssistantPage/> }.into_view(),
        Page::Integrations => view! { <IntegrationsPage/> }.into_view(),
        Page::Marketing => view! { <MarketingPage/> }.into_view(),
        Page::Financial => view! { <FinancePage/> }.into_view(),
        Page::Reports => view! { <ReportsPage/> }.into_view(),
        Page::Settings => view! { <SettingsPage/> }.into_view(),
    }
}

/// Shell around the current panel. Uses the navigation and theme contexts,
/// providing them when the caller has not.
#[component]
pub fn AppShell() -> impl IntoView {
    let navigation = use_navigation().unwrap_or_else(|| provide_navigation(Page::default()));
    let theme = use_theme().unwrap_or_else(provide_theme);
    let company_name = config::current().company_name().to_string();
    let current = navigation.current();
    let title = {
        let company_name = company_name.clone();
        move || format!("{} | {}", current.get().label(), company_name)
    };

    create_effect(move |_| sync_location(current.get()));
    follow_history(navigation);

    view! {
        <Title text=title/>
        <Layout navigation=navigation theme=theme company_name=company_name>
            {move || render_page(current.get())}
        </Layout>
    }
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_navigation(initial_page());
    provide_theme();
    view! { <AppShell/> }
}
