use crate::{
    components::{
        forms::{NumberInput, SelectInput, TextInput},
        modal::FormModal,
    },
    crud::CrudStore,
    models::{Transaction, TransactionField, TransactionKind},
};
use leptos::*;

#[component]
pub fn TransactionForm(store: CrudStore<Transaction>) -> impl IntoView {
    let editing = store.editing();
    let title = Signal::derive(move || {
        let text = if editing.get() { "Editar Transação" } else { "Nova Transação" };
        text.to_string()
    });
    let submit_label = Signal::derive(move || {
        let text = if editing.get() { "Salvar Alterações" } else { "Cadastrar Transação" };
        text.to_string()
    });
    let kinds: Vec<_> = TransactionKind::ALL
        .into_iter()
        .map(|kind| (kind.as_str(), kind.label()))
        .collect();

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
            <TextInput label="Data" input_type="date" value=store.select(|t| t.date.clone()) on_input=store.setter(TransactionField::Date) required=true />
            <TextInput label="Descrição" value=store.select(|t| t.description.clone()) on_input=store.setter(TransactionField::Description) required=true />
            <div class="grid grid-cols-2 gap-4">
                <SelectInput
                    label="Tipo"
                    options=kinds.clone()
                    value=store.select(|t| t.kind.as_str().to_string())
                    on_change=store.setter(TransactionField::Kind)
                />
                <NumberInput label="Valor" step="0.01" value=store.select(|t| t.amount.to_string()) on_input=store.setter(TransactionField::Amount) required=true />
            </div>
        </FormModal>
    }
}
