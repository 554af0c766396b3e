use crate::{
    components::empty_state::EmptyState,
    models::Order,
    utils::format::{format_brl, format_date_time, pluralize_items},
};
use leptos::*;

#[component]
pub fn OrderTable(#[prop(into)] orders: Signal<Vec<Order>>) -> impl IntoView {
    view! {
        <Show
            when=move || !orders.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="Nenhum pedido encontrado" icon="fas fa-shopping-cart" /> }
        >
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-700">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Pedido"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Cliente"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Status"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Data"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Total"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <For
                            each=move || orders.get()
                            key=|order| order.id.clone()
                            children=move |order: Order| {
                                let status = order.status;
                                view! {
                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700">
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <div class="text-sm font-medium text-gray-900 dark:text-white">{format!("#{}", order.id)}</div>
                                            <div class="text-xs text-gray-500">{pluralize_items(order.item_count())}</div>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-white">{order.customer.clone()}</td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <span class=format!("px-3 py-1 inline-flex items-center gap-1 rounded-full text-sm font-medium {}", status.badge_class())>
                                                <i class=status.icon()></i>
                                                {status.label()}
                                            </span>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{format_date_time(&order.created_at)}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">{format_brl(order.total)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::orders::repository::OrdersRepository;
    use crate::test_support::ssr::{html_text, render_to_string};

    #[test]
    fn rows_are_formatted_for_pt_br() {
        let html = render_to_string(move || {
            let orders = OrdersRepository::new().orders();
            view! { <OrderTable orders=Signal::derive(move || orders.clone()) /> }
        });
        assert!(html.contains("#1"));
        assert!(html.contains("Maria Santos"));
        assert!(html.contains("Em Processamento"));
        assert!(html.contains(&html_text("15/03/2024 10:30")));
        assert!(html.contains("R$ 8.999,99"));
        assert!(html.contains("2 itens"));
    }

    #[test]
    fn no_match_shows_empty_state() {
        let html = render_to_string(move || {
            view! { <OrderTable orders=Signal::derive(Vec::<Order>::new) /> }
        });
        assert!(html.contains("Nenhum pedido encontrado"));
    }
}
