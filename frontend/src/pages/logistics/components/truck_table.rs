use crate::{
    components::{common::Badge, empty_state::EmptyState},
    models::Truck,
    utils::format::format_date,
};
use leptos::*;

#[component]
pub fn TruckTable(
    #[prop(into)] trucks: Signal<Vec<Truck>>,
    on_edit: Callback<Truck>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !trucks.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="Nenhum veículo cadastrado" icon="fas fa-truck" /> }
        >
            <div class="bg-white dark:bg-gray-800 shadow rounded-lg overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-700">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Veículo"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Motorista"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Status"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Próxima Manutenção"</th>
                            <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">"Ações"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <For
                            each=move || trucks.get()
                            key=|truck| truck.id.clone()
                            children=move |truck: Truck| {
                                let editable = truck.clone();
                                let id = truck.id.clone();
                                view! {
                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700">
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <div class="text-sm font-medium text-gray-900 dark:text-white">{truck.model.clone()}</div>
                                            <div class="text-sm text-gray-500">{truck.license_plate.clone()}</div>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <div class="text-sm text-gray-900 dark:text-white">{truck.driver.name.clone()}</div>
                                            <div class="text-sm text-gray-500">{truck.driver.phone.clone()}</div>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <Badge label=truck.status.label() class=truck.status.badge_class() />
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">
                                            {format_date(&truck.next_maintenance)}
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
    use crate::pages::logistics::repository::LogisticsRepository;
    use crate::test_support::ssr::{html_text, render_to_string};

    #[test]
    fn rows_show_vehicle_driver_and_status() {
        let html = render_to_string(move || {
            let trucks = LogisticsRepository::new().trucks();
            view! {
                <TruckTable
                    trucks=Signal::derive(move || trucks.clone())
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Volvo FH 460"));
        assert!(html.contains("ABC-1234"));
        assert!(html.contains("João Silva"));
        assert!(html.contains("Disponível"));
        assert!(html.contains(&html_text("15/04/2024")));
    }

    #[test]
    fn empty_fleet_shows_empty_state() {
        let html = render_to_string(move || {
            view! {
                <TruckTable
                    trucks=Signal::derive(Vec::<Truck>::new)
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Nenhum veículo cadastrado"));
    }
}
