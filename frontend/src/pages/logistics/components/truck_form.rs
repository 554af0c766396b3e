use crate::{
    components::{
        forms::{NumberInput, SelectInput, TextInput},
        modal::FormModal,
    },
    crud::CrudStore,
    models::{DocumentField, DriverField, FuelType, Truck, TruckField, TruckStatus},
};
use leptos::*;

const SECTION_CLASS: &str = "text-lg font-medium text-gray-900 dark:text-white";

#[component]
pub fn TruckForm(store: CrudStore<Truck>) -> impl IntoView {
    let editing = store.editing();
    let title = Signal::derive(move || {
        let text = if editing.get() { "Editar Veículo" } else { "Novo Veículo" };
        text.to_string()
    });
    let submit_label = Signal::derive(move || {
        let text = if editing.get() { "Salvar Alterações" } else { "Cadastrar Veículo" };
        text.to_string()
    });
    let status_options: Vec<_> = TruckStatus::ALL
        .into_iter()
        .map(|status| (status.as_str(), status.label()))
        .collect();
    let fuel_options: Vec<_> = FuelType::ALL
        .into_iter()
        .map(|fuel| (fuel.as_str(), fuel.label()))
        .collect();
    let driver = move |field: DriverField| {
        store.setter(TruckField::Driver(field))
    };
    let document = move |field: DocumentField| {
        store.setter(TruckField::Documents(field))
    };

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
                <TextInput label="Placa" value=store.select(|t| t.license_plate.clone()) on_input=store.setter(TruckField::LicensePlate) required=true />
                <TextInput label="Modelo" value=store.select(|t| t.model.clone()) on_input=store.setter(TruckField::Model) required=true />
                <NumberInput label="Ano" value=store.select(|t| t.year.to_string()) on_input=store.setter(TruckField::Year) required=true />
                <TextInput label="Capacidade" value=store.select(|t| t.capacity.clone()) on_input=store.setter(TruckField::Capacity) required=true />
                <SelectInput
                    label="Status"
                    options=status_options.clone()
                    value=store.select(|t| t.status.as_str().to_string())
                    on_change=store.setter(TruckField::Status)
                />
            </div>

            <h3 class=SECTION_CLASS>"Informações do Motorista"</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextInput label="Nome" value=store.select(|t| t.driver.name.clone()) on_input=driver(DriverField::Name) required=true />
                <TextInput label="CNH" value=store.select(|t| t.driver.license.clone()) on_input=driver(DriverField::License) required=true />
                <TextInput label="Telefone" input_type="tel" value=store.select(|t| t.driver.phone.clone()) on_input=driver(DriverField::Phone) required=true />
                <TextInput label="Email" input_type="email" value=store.select(|t| t.driver.email.clone()) on_input=driver(DriverField::Email) required=true />
            </div>

            <h3 class=SECTION_CLASS>"Manutenção e Documentação"</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextInput label="Última Manutenção" input_type="date" value=store.select(|t| t.last_maintenance.clone()) on_input=store.setter(TruckField::LastMaintenance) />
                <TextInput label="Próxima Manutenção" input_type="date" value=store.select(|t| t.next_maintenance.clone()) on_input=store.setter(TruckField::NextMaintenance) required=true />
                <TextInput label="Vencimento do Seguro" input_type="date" value=store.select(|t| t.documents.insurance.clone()) on_input=document(DocumentField::Insurance) required=true />
                <TextInput label="Vencimento da Vistoria" input_type="date" value=store.select(|t| t.documents.inspection.clone()) on_input=document(DocumentField::Inspection) required=true />
                <TextInput label="Vencimento do Licenciamento" input_type="date" value=store.select(|t| t.documents.registration.clone()) on_input=document(DocumentField::Registration) required=true />
            </div>

            <h3 class=SECTION_CLASS>"Informações de Consumo"</h3>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <SelectInput
                    label="Combustível"
                    options=fuel_options.clone()
                    value=store.select(|t| t.fuel_type.as_str().to_string())
                    on_change=store.setter(TruckField::FuelType)
                />
                <NumberInput label="Consumo (km/L)" step="0.1" value=store.select(|t| t.fuel_efficiency.to_string()) on_input=store.setter(TruckField::FuelEfficiency) required=true />
                <NumberInput label="Quilometragem" value=store.select(|t| t.mileage.to_string()) on_input=store.setter(TruckField::Mileage) required=true />
            </div>
        </FormModal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::logistics::repository::LogisticsRepository;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn edit_form_shows_nested_sections() {
        let html = render_to_string(move || {
            let store = CrudStore::new(LogisticsRepository::new().trucks());
            if let Some(truck) = store.get("1") {
                store.open_edit(&truck);
            }
            view! { <TruckForm store=store /> }
        });
        assert!(html.contains("Editar Veículo"));
        assert!(html.contains("Informações do Motorista"));
        assert!(html.contains("Manutenção e Documentação"));
        assert!(html.contains("Gasolina"));
        assert!(html.contains("Em Manutenção"));
    }

    #[test]
    fn closed_form_renders_nothing() {
        let html = render_to_string(move || {
            let store = CrudStore::new(Vec::<Truck>::new());
            view! { <TruckForm store=store /> }
        });
        assert!(!html.contains("Novo Veículo"));
    }
}
