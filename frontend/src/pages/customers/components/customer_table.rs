use crate::{
    components::{common::Badge, empty_state::EmptyState},
    models::{Customer, CustomerGroup},
    pages::customers::utils::{group_badges, last_purchase_label},
    utils::format::format_date,
};
use leptos::*;

#[component]
pub fn CustomerTable(
    #[prop(into)] customers: Signal<Vec<Customer>>,
    #[prop(into)] groups: Signal<Vec<CustomerGroup>>,
    on_edit: Callback<Customer>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !customers.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="Nenhum cliente encontrado" icon="fas fa-users" /> }
        >
            <div class="bg-white dark:bg-gray-800 shadow rounded-lg overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-700">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Nome"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Contato"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Grupos"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Última Compra"</th>
                            <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">"Ações"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <For
                            each=move || customers.get()
                            key=|customer| customer.id.clone()
                            children=move |customer: Customer| {
                                let badges = {
                                    let ids = customer.group_ids.clone();
                                    move || groups.with(|groups| group_badges(&ids, groups))
                                };
                                let editable = customer.clone();
                                let id = customer.id.clone();
                                view! {
                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700">
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <div class="text-sm font-medium text-gray-900 dark:text-white">{customer.full_name()}</div>
                                            <div class="text-sm text-gray-500">{format_date(&customer.birth_date)}</div>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <div class="text-sm text-gray-900 dark:text-white">{customer.email.clone()}</div>
                                            <div class="text-sm text-gray-500">{customer.phone.clone()}</div>
                                        </td>
                                        <td class="px-6 py-4">
                                            <div class="flex flex-wrap gap-1">
                                                {move || {
                                                    badges()
                                                        .into_iter()
                                                        .map(|group| view! { <Badge label=group.name class="bg-blue-100 text-blue-800" /> })
                                                        .collect_view()
                                                }}
                                            </div>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                            {last_purchase_label(&customer)}
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-right text-sm">
                                            <button
                                                type="button"
                                                class="text-primary hover:text-primary-dark mr-3"
                                                aria-label="Editar"
                                                on:click=move |_| on_edit.call(editable.clone())
                                            >
                                                <i class="fas fa-edit"></i>
                                            </button>
                                            <button
                                                type="button"
                                                class="text-red-600 hover:text-red-800"
                                                aria-label="Excluir"
                                                on:click=move |_| on_delete.call(id.clone())
                                            >
                                                <i class="fas fa-trash"></i>
                                            </button>
                                        </td>
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
    use crate::pages::customers::repository::CustomersRepository;
    use crate::test_support::ssr::{html_text, render_to_string};

    #[test]
    fn rows_show_contact_and_group_badges() {
        let html = render_to_string(move || {
            let repo = CustomersRepository::new();
            let customers = repo.customers();
            let groups = repo.groups();
            view! {
                <CustomerTable
                    customers=Signal::derive(move || customers.clone())
                    groups=Signal::derive(move || groups.clone())
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("João Silva"));
        assert!(html.contains("joao.silva@email.com"));
        assert!(html.contains(&html_text("15/05/1990")));
        assert!(html.contains("VIP"));
        assert!(html.contains(&html_text("10/03/2024")));
    }

    #[test]
    fn dangling_group_ids_render_no_badge() {
        let html = render_to_string(move || {
            let customers = CustomersRepository::new().customers();
            view! {
                <CustomerTable
                    customers=Signal::derive(move || customers.clone())
                    groups=Signal::derive(Vec::<CustomerGroup>::new)
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("João Silva"));
        assert!(!html.contains("VIP"));
        assert!(!html.contains("bg-blue-100"));
    }

    #[test]
    fn empty_list_shows_empty_state() {
        let html = render_to_string(move || {
            view! {
                <CustomerTable
                    customers=Signal::derive(Vec::<Customer>::new)
                    groups=Signal::derive(Vec::<CustomerGroup>::new)
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Nenhum cliente encontrado"));
    }
}
