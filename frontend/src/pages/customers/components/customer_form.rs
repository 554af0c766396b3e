use crate::{
    components::{
        forms::{CheckboxGroup, TextInput},
        modal::FormModal,
    },
    crud::CrudStore,
    models::{AddressField, Customer, CustomerField, CustomerGroup},
    pages::customers::utils::group_options,
};
use leptos::*;

#[component]
pub fn CustomerForm(
    store: CrudStore<Customer>,
    #[prop(into)] groups: Signal<Vec<CustomerGroup>>,
) -> impl IntoView {
    let editing = store.editing();
    let title = Signal::derive(move || {
        let text = if editing.get() { "Editar Cliente" } else { "Novo Cliente" };
        text.to_string()
    });
    let submit_label = Signal::derive(move || {
        let text = if editing.get() { "Salvar Alterações" } else { "Criar Cliente" };
        text.to_string()
    });
    let options = Signal::derive(move || groups.with(|g| group_options(g)));
    let address = move |field: AddressField| {
        (
            store.select(move |c| match field {
                AddressField::Street => c.address.street.clone(),
                AddressField::Number => c.address.number.clone(),
                AddressField::Complement => c.address.complement.clone(),
                AddressField::Neighborhood => c.address.neighborhood.clone(),
                AddressField::City => c.address.city.clone(),
                AddressField::State => c.address.state.clone(),
                AddressField::ZipCode => c.address.zip_code.clone(),
                AddressField::Country => c.address.country.clone(),
            }),
            store.setter(CustomerField::Address(field)),
        )
    };
    let (street, set_street) = address(AddressField::Street);
    let (number, set_number) = address(AddressField::Number);
    let (complement, set_complement) = address(AddressField::Complement);
    let (neighborhood, set_neighborhood) = address(AddressField::Neighborhood);
    let (city, set_city) = address(AddressField::City);
    let (state, set_state) = address(AddressField::State);
    let (zip_code, set_zip_code) = address(AddressField::ZipCode);

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
                <TextInput label="Nome" value=store.select(|c| c.first_name.clone()) on_input=store.setter(CustomerField::FirstName) required=true />
                <TextInput label="Sobrenome" value=store.select(|c| c.last_name.clone()) on_input=store.setter(CustomerField::LastName) required=true />
                <TextInput label="Email" input_type="email" value=store.select(|c| c.email.clone()) on_input=store.setter(CustomerField::Email) required=true />
                <TextInput label="Telefone" input_type="tel" value=store.select(|c| c.phone.clone()) on_input=store.setter(CustomerField::Phone) required=true />
                <TextInput label="Data de Nascimento" input_type="date" value=store.select(|c| c.birth_date.clone()) on_input=store.setter(CustomerField::BirthDate) required=true />
            </div>
            <CheckboxGroup
                label="Grupos"
                options=options
                selected=store.select(|c| c.group_ids.clone())
                on_change=store.setter(CustomerField::GroupIds)
            />
            <h3 class="text-lg font-medium text-gray-900 dark:text-white">"Endereço"</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextInput label="Rua" value=street on_input=set_street required=true />
                <TextInput label="Número" value=number on_input=set_number required=true />
                <TextInput label="Complemento" value=complement on_input=set_complement />
                <TextInput label="Bairro" value=neighborhood on_input=set_neighborhood required=true />
                <TextInput label="Cidade" value=city on_input=set_city required=true />
                <TextInput label="Estado" value=state on_input=set_state required=true />
                <TextInput label="CEP" value=zip_code on_input=set_zip_code required=true />
            </div>
        </FormModal>
    }
}
