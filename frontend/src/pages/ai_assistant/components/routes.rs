use crate::pages::ai_assistant::types::RouteSuggestion;
use leptos::*;

#[component]
pub fn RouteSuggestions(routes: Vec<RouteSuggestion>) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6 space-y-4">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Sugestões de Rotas Otimizadas"</h2>
            {routes
                .into_iter()
                .map(|route| {
                    let metrics = [
                        ("Distância", route.distance),
                        ("Tempo Est.", route.time),
                        ("Combustível", route.fuel),
                        ("Custo Est.", route.cost),
                    ];
                    view! {
                        <div class="border border-gray-200 dark:border-gray-700 rounded-lg p-4">
                            <div class="flex justify-between items-start">
                                <div>
                                    <h3 class="font-medium text-gray-900 dark:text-white">{format!("Rota {}", route.id)}</h3>
                                    <p class="text-sm text-gray-500 mt-1">{format!("De: {}", route.origin)}</p>
                                    <p class="text-sm font-medium text-gray-700 dark:text-gray-300 mt-2">"Destinos:"</p>
                                    <ul class="list-disc list-inside text-sm text-gray-600 dark:text-gray-400">
                                        {route.destinations.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
                                    </ul>
                                </div>
                                <span class="text-green-600 text-sm font-medium bg-green-50 px-2.5 py-0.5 rounded-full">
                                    {route.optimization}
                                </span>
                            </div>
                            <div class="grid grid-cols-4 gap-4 mt-4 pt-4 border-t border-gray-200 dark:border-gray-700">
                                {metrics
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <div>
                                                <p class="text-sm text-gray-500">{label}</p>
                                                <p class="font-medium">{value}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
