use crate::{
    components::{common::Badge, empty_state::EmptyState},
    models::Product,
    pages::inventory::utils::stock_badge,
    utils::format::format_date,
};
use leptos::*;

#[component]
pub fn ProductTable(
    #[prop(into)] products: Signal<Vec<Product>>,
    on_edit: Callback<Product>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !products.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="Nenhum produto encontrado" icon="fas fa-box" /> }
        >
            <div class="bg-white dark:bg-gray-800 shadow rounded-lg overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-700">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Produto"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Categoria"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Quantidade"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Status"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Atualizado em"</th>
                            <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">"Ações"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <For
                            each=move || products.get()
                            key=|product| product.id.clone()
                            children=move |product: Product| {
                                let (label, class) = stock_badge(product.is_low_stock());
                                let editable = product.clone();
                                let id = product.id.clone();
                                view! {
                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700">
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <div class="text-sm font-medium text-gray-900 dark:text-white">{product.name.clone()}</div>
                                            <div class="text-sm text-gray-500">{product.sku.clone()}</div>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{product.category.clone()}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-white">
                                            {product.quantity}
                                            <span class="text-gray-400">{format!(" / mín. {}", product.min_stock)}</span>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <Badge label=label class=class />
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{format_date(&product.last_updated)}</td>
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
    use crate::pages::inventory::repository::InventoryRepository;
    use crate::test_support::ssr::{html_text, render_to_string};

    #[test]
    fn low_stock_rows_are_flagged() {
        let html = render_to_string(move || {
            let products = InventoryRepository::new().products();
            view! {
                <ProductTable
                    products=Signal::derive(move || products.clone())
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Smartphone Galaxy S23"));
        assert!(html.contains("SMG-S23-256-BLK"));
        assert!(html.contains("Estoque Baixo"));
        assert!(html.contains("Em Estoque"));
        assert!(html.contains(&html_text("15/03/2024")));
    }

    #[test]
    fn empty_list_shows_empty_state() {
        let html = render_to_string(move || {
            view! {
                <ProductTable
                    products=Signal::derive(Vec::<Product>::new)
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Nenhum produto encontrado"));
    }
}
