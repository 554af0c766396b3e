use super::{
    components::{product_form::ProductForm, product_table::ProductTable},
    view_model::{use_inventory_view_model, InventoryViewModel},
};
use crate::{
    components::{
        common::{Button, PageHeader, SearchInput},
        confirm_dialog::ConfirmDialog,
    },
    models::Product,
};
use leptos::*;

#[component]
pub fn InventoryPage() -> impl IntoView {
    let vm = use_inventory_view_model();
    view! { <InventoryPanel vm=vm /> }
}

#[component]
pub fn InventoryPanel(vm: InventoryViewModel) -> impl IntoView {
    let products = vm.products;
    let low_stock = vm.low_stock_count();

    view! {
        <div class="space-y-6">
            <PageHeader title="Estoque">
                <Button on:click=move |_| products.open_create()>
                    <i class="fas fa-plus"></i>
                    "Novo Produto"
                </Button>
            </PageHeader>
            <Show when=move || { low_stock.get() > 0 }>
                <div class="rounded-lg bg-red-50 dark:bg-red-900 p-4 text-sm text-red-800 dark:text-red-100" role="status">
                    <i class="fas fa-exclamation-triangle mr-2"></i>
                    {move || format!("{} produto(s) com estoque baixo", low_stock.get())}
                </div>
            </Show>
            <SearchInput value=products.search() placeholder="Buscar produtos..." />
            <ProductTable
                products=products.filtered()
                on_edit=Callback::new(move |product: Product| products.open_edit(&product))
                on_delete=Callback::new(move |id: String| products.request_delete(&id))
            />
            <ProductForm store=products />
            <ConfirmDialog
                is_open=products.confirming_delete()
                title="Excluir produto"
                message="Tem certeza que deseja excluir este produto?"
                on_confirm=Callback::new(move |_| {
                    products.confirm_delete();
                })
                on_cancel=Callback::new(move |_| products.cancel_delete())
                confirm_label="Excluir"
                destructive=true
            />
        </div>
    }
}
