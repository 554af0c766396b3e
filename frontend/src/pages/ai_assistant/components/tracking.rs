use crate::{
    components::cards::PlaceholderCard,
    pages::ai_assistant::{types::TrackedVehicle, utils::format_coordinate},
};
use leptos::*;

#[component]
pub fn VehicleTracking(vehicles: Vec<TrackedVehicle>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <PlaceholderCard title="Localização dos Veículos" description="Mapa com localização em tempo real" />
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6 space-y-4">
                {vehicles
                    .into_iter()
                    .map(|vehicle| {
                        view! {
                            <div class="flex items-center justify-between p-4 border border-gray-200 dark:border-gray-700 rounded-lg">
                                <div class="flex items-center gap-4">
                                    <div class="bg-blue-100 p-2 rounded-lg">
                                        <i class="fas fa-truck text-blue-600"></i>
                                    </div>
                                    <div>
                                        <h3 class="font-medium text-gray-900 dark:text-white">{vehicle.id}</h3>
                                        <p class="text-sm text-gray-500">{format!("Motorista: {}", vehicle.driver)}</p>
                                        <p class="text-xs text-gray-400">
                                            {format!("{}, {}", format_coordinate(vehicle.lat), format_coordinate(vehicle.lng))}
                                        </p>
                                    </div>
                                </div>
                                <span class="px-3 py-1 rounded-full text-sm font-medium bg-green-100 text-green-800">
                                    {vehicle.status}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
