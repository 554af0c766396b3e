use crate::{
    components::{
        forms::{TextArea, TextInput},
        modal::FormModal,
    },
    crud::CrudStore,
    models::{CustomerGroup, CustomerGroupField},
};
use leptos::*;

#[component]
pub fn GroupForm(store: CrudStore<CustomerGroup>) -> impl IntoView {
    let editing = store.editing();
    let title = Signal::derive(move || {
        let text = if editing.get() { "Editar Grupo" } else { "Novo Grupo" };
        text.to_string()
    });

    view! {
        <FormModal
            is_open=store.modal_open()
            title=title
            on_submit=Callback::new(move |_| {
                store.submit();
            })
            on_cancel=Callback::new(move |_| store.cancel())
        >
            <TextInput
                label="Nome do Grupo"
                value=store.select(|g| g.name.clone())
                on_input=store.setter(CustomerGroupField::Name)
                required=true
            />
            <TextArea
                label="Descrição"
                value=store.select(|g| g.description.clone())
                on_input=store.setter(CustomerGroupField::Description)
                required=true
            />
        </FormModal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::customers::repository::CustomersRepository;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_group_fields_when_open() {
        let html = render_to_string(move || {
            let store = CrudStore::new(CustomersRepository::new().groups());
            store.open_create();
            view! { <GroupForm store=store /> }
        });
        assert!(html.contains("Novo Grupo"));
        assert!(html.contains("Nome do Grupo"));
        assert!(html.contains("Descrição"));
    }
}
