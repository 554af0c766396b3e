use super::{
    components::{
        product_list::MarketingProductList,
        suggestions::{ProductOverview, SuggestionCards},
    },
    view_model::{use_marketing_view_model, MarketingViewModel},
};
use crate::{
    components::{
        common::{PageHeader, SearchInput},
        empty_state::EmptyState,
    },
    models::Product,
};
use leptos::*;

#[component]
pub fn MarketingPage() -> impl IntoView {
    let vm = use_marketing_view_model();
    view! { <MarketingPanel vm=vm /> }
}

#[component]
pub fn MarketingPanel(vm: MarketingViewModel) -> impl IntoView {
    let selected = vm.selected;
    let selected_id = Signal::derive(move || selected.with(|p| p.as_ref().map(|p| p.id.clone())));
    let suggestions = vm.suggestions();

    view! {
        <div class="space-y-6">
            <PageHeader title="Marketing" />
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6 space-y-4">
                    <SearchInput value=vm.search placeholder="Buscar produtos..." />
                    <MarketingProductList
                        products=vm.filtered()
                        selected_id=selected_id
                        on_select=Callback::new(move |product: Product| vm.select(product))
                    />
                </div>
                <div class="lg:col-span-2 space-y-6">
                    {move || match selected.get() {
                        Some(product) => view! {
                            <ProductOverview product=product />
                            {suggestions.get().map(|s| view! { <SuggestionCards suggestions=s /> })}
                        }
                        .into_view(),
                        None => view! {
                            <EmptyState
                                title="Selecione um produto para ver sugestões de marketing"
                                icon="fas fa-bullhorn"
                            />
                        }
                        .into_view(),
                    }}
                </div>
            </div>
        </div>
    }
}
