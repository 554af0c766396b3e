use super::{
    components::integration_card::IntegrationCard,
    repository::IntegrationsRepository,
    utils::{connected_summary, IntegrationsTab},
};
use crate::components::common::{PageHeader, TabBar};
use leptos::*;

#[component]
pub fn IntegrationsPage() -> impl IntoView {
    let active_tab = create_rw_signal(IntegrationsTab::default());
    view! { <IntegrationsPanel active_tab=active_tab /> }
}

#[component]
pub fn IntegrationsPanel(active_tab: RwSignal<IntegrationsTab>) -> impl IntoView {
    let repository = IntegrationsRepository::new();
    let active_key = Signal::derive(move || active_tab.get().key());
    let on_tab = Callback::new(move |key: &'static str| active_tab.set(IntegrationsTab::from_key(key)));

    view! {
        <div class="space-y-6">
            <PageHeader title="Integrações" />
            <TabBar tabs=IntegrationsTab::TABS.to_vec() active=active_key on_select=on_tab />
            {move || {
                let tab = active_tab.get();
                let integrations = tab.integrations(&repository);
                let summary = connected_summary(tab, &integrations);
                view! {
                    <div class="space-y-4">
                        <div class="flex items-center justify-between">
                            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{tab.heading()}</h2>
                            <span class="text-sm text-gray-500">{summary}</span>
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            {integrations
                                .into_iter()
                                .map(|integration| view! { <IntegrationCard integration=integration /> })
                                .collect_view()}
                        </div>
                    </div>
                }
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn ecommerce_tab_is_shown_first() {
        let html = render_to_string(move || view! { <IntegrationsPage /> });
        assert!(html.contains("Plataformas de E-commerce"));
        assert!(html.contains("5 de 8 conectadas"));
        assert!(html.contains("WooCommerce"));
        assert!(!html.contains("MercadoPago"));
    }

    #[test]
    fn payments_tab_lists_gateways() {
        let html = render_to_string(move || {
            let tab = create_rw_signal(IntegrationsTab::Payments);
            view! { <IntegrationsPanel active_tab=tab /> }
        });
        assert!(html.contains("Gateways de Pagamento"));
        assert!(html.contains("Pagar.me"));
        assert!(html.contains("3 de 3 conectados"));
    }
}
