use crate::{
    components::{common::Badge, empty_state::EmptyState},
    pages::logistics::{repository::Delivery, utils::delivery_badge_class},
    utils::format::{format_date, pluralize_items},
};
use leptos::*;

#[component]
pub fn DeliveryList(deliveries: Vec<Delivery>) -> impl IntoView {
    if deliveries.is_empty() {
        return view! { <EmptyState title="Nenhuma entrega agendada" icon="fas fa-map-marker-alt" /> }
            .into_view();
    }

    view! {
        <div class="bg-white dark:bg-gray-800 shadow rounded-lg divide-y divide-gray-200 dark:divide-gray-700">
            {deliveries
                .into_iter()
                .map(|delivery| {
                    let badge = delivery_badge_class(&delivery.status);
                    view! {
                        <div class="p-6 hover:bg-gray-50 dark:hover:bg-gray-700 flex items-center justify-between">
                            <div>
                                <div class="flex items-center gap-3">
                                    <span class="text-lg font-medium text-gray-900 dark:text-white">{delivery.order}</span>
                                    <span class="text-gray-600 dark:text-gray-300">{delivery.customer}</span>
                                </div>
                                <p class="text-sm text-gray-500 mt-1">{delivery.address}</p>
                                <div class="flex gap-4 mt-2 text-sm text-gray-500">
                                    <span>
                                        <i class="fas fa-calendar mr-1"></i>
                                        {format_date(&delivery.date)}
                                    </span>
                                    <span>
                                        <i class="fas fa-box mr-1"></i>
                                        {pluralize_items(delivery.items)}
                                    </span>
                                </div>
                            </div>
                            <Badge label=delivery.status class=badge />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::logistics::repository::LogisticsRepository;
    use crate::test_support::ssr::{html_text, render_to_string};

    #[test]
    fn item_counts_are_pluralised() {
        let html = render_to_string(move || {
            view! { <DeliveryList deliveries=LogisticsRepository::new().deliveries() /> }
        });
        assert!(html.contains("#12345"));
        assert!(html.contains("Av. Paulista, 1000 - São Paulo, SP"));
        assert!(html.contains("3 itens"));
        assert!(html.contains("1 item"));
        assert!(html.contains(&html_text("16/03/2024")));
        assert!(html.contains("Agendado"));
    }

    #[test]
    fn no_deliveries_shows_empty_state() {
        let html = render_to_string(move || view! { <DeliveryList deliveries=Vec::new() /> });
        assert!(html.contains("Nenhuma entrega agendada"));
    }
}
