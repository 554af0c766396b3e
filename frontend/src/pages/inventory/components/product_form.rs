use crate::{
    components::{
        forms::{Checkbox, CheckboxGroup, NumberInput, TextInput},
        modal::FormModal,
    },
    crud::CrudStore,
    models::{Product, ProductField},
    pages::inventory::utils::audience_options,
};
use leptos::*;

#[component]
pub fn ProductForm(store: CrudStore<Product>) -> impl IntoView {
    let editing = store.editing();
    let title = Signal::derive(move || {
        let text = if editing.get() { "Editar Produto" } else { "Novo Produto" };
        text.to_string()
    });
    let submit_label = Signal::derive(move || {
        let text = if editing.get() { "Salvar Alterações" } else { "Criar Produto" };
        text.to_string()
    });
    let marketing = store.select(|p| p.marketing_enabled);

    view! {
        <FormModal
            is_open=store.modal_open()
            title=title
            on_submit=Callback::new(move |_| {
                store.submit();
            })
            on_cancel=Callback::new(move |_| store.cancel())
            submit_label=submit_label
        >
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextInput label="Nome" value=store.select(|p| p.name.clone()) on_input=store.setter(ProductField::Name) required=true />
                <TextInput label="SKU" value=store.select(|p| p.sku.clone()) on_input=store.setter(ProductField::Sku) required=true />
                <TextInput label="Categoria" value=store.select(|p| p.category.clone()) on_input=store.setter(ProductField::Category) required=true />
                <TextInput label="Tipo de Produto" value=store.select(|p| p.product_type.clone()) on_input=store.setter(ProductField::ProductType) />
                <NumberInput label="Quantidade" value=store.select(|p| p.quantity.to_string()) on_input=store.setter(ProductField::Quantity) required=true />
                <NumberInput label="Estoque Mínimo" value=store.select(|p| p.min_stock.to_string()) on_input=store.setter(ProductField::MinStock) required=true />
            </div>
            <Checkbox
                label="Habilitar para marketing"
                checked=marketing
                on_toggle=store.setter(ProductField::MarketingEnabled)
            />
            <Show when=move || marketing.get()>
                <CheckboxGroup
                    label="Público-alvo"
                    options=Signal::derive(audience_options)
                    selected=store.select(|p| p.target_audience.clone())
                    on_change=store.setter(ProductField::TargetAudience)
                />
            </Show>
        </FormModal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::inventory::repository::InventoryRepository;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn marketing_product_shows_audience_picker() {
        let html = render_to_string(move || {
            let store = CrudStore::new(InventoryRepository::new().products());
            if let Some(product) = store.get("1") {
                store.open_edit(&product);
            }
            view! { <ProductForm store=store /> }
        });
        assert!(html.contains("Editar Produto"));
        assert!(html.contains("Público-alvo"));
        assert!(html.contains("Estudantes"));
    }

    #[test]
    fn new_product_hides_audience_picker() {
        let html = render_to_string(move || {
            let store = CrudStore::new(Vec::<Product>::new());
            store.open_create();
            view! { <ProductForm store=store /> }
        });
        assert!(html.contains("Criar Produto"));
        assert!(html.contains("Habilitar para marketing"));
        assert!(!html.contains("Público-alvo"));
    }
}
