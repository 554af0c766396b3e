use crate::{components::empty_state::EmptyState, models::Product};
use leptos::*;

#[component]
pub fn MarketingProductList(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] selected_id: Signal<Option<String>>,
    on_select: Callback<Product>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !products.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="Nenhum produto com marketing habilitado" icon="fas fa-bullhorn" /> }
        >
            <ul class="space-y-2">
                <For
                    each=move || products.get()
                    key=|product| product.id.clone()
                    children=move |product: Product| {
                        let id = product.id.clone();
                        let is_selected = move || selected_id.with(|s| s.as_deref() == Some(id.as_str()));
                        let chosen = product.clone();
                        view! {
                            <li>
                                <button
                                    type="button"
                                    class=move || {
                                        if is_selected() {
                                            "w-full text-left p-4 rounded-lg border border-primary bg-primary-lighter"
                                        } else {
                                            "w-full text-left p-4 rounded-lg border border-gray-200 dark:border-gray-700 hover:bg-gray-50 dark:hover:bg-gray-700"
                                        }
                                    }
                                    on:click=move |_| on_select.call(chosen.clone())
                                >
                                    <h3 class="font-medium text-gray-900 dark:text-white">{product.name.clone()}</h3>
                                    <p class="text-sm text-gray-500 mt-1">{product.category.clone()}</p>
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::inventory::repository::InventoryRepository;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn selected_product_is_highlighted() {
        let html = render_to_string(move || {
            let products = InventoryRepository::new().products();
            view! {
                <MarketingProductList
                    products=Signal::derive(move || products.clone())
                    selected_id=Signal::derive(|| Some("2".to_string()))
                    on_select=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Notebook Dell XPS"));
        assert_eq!(html.matches("border-primary bg-primary-lighter").count(), 1);
    }
}
