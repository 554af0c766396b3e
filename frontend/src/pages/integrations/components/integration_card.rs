use crate::pages::integrations::types::Integration;
use leptos::*;

#[component]
pub fn IntegrationCard(integration: Integration) -> impl IntoView {
    let connected = integration.is_connected();
    let last_sync = integration
        .last_sync
        .filter(|_| connected)
        .map(|at| view! { <p class="text-sm text-gray-500">{format!("Última sincronização: {}", at)}</p> });

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-4">
                    <div class="w-12 h-12 bg-gray-100 dark:bg-gray-700 rounded-lg flex items-center justify-center">
                        <i class="fas fa-store text-gray-600"></i>
                    </div>
                    <div>
                        <h3 class="text-lg font-medium text-gray-900 dark:text-white">{integration.name}</h3>
                        {last_sync}
                    </div>
                </div>
                {if connected {
                    view! {
                        <div class="flex items-center space-x-2">
                            <span class="flex items-center text-green-600">
                                <i class="fas fa-check-circle mr-1"></i>
                                "Conectado"
                            </span>
                            <button type="button" class="ml-4 text-gray-400 hover:text-gray-600" aria-label="Configurar">
                                <i class="fas fa-cog"></i>
                            </button>
                        </div>
                    }
                } else {
                    view! {
                        <div class="flex items-center space-x-2">
                            <span class="flex items-center text-gray-400">
                                <i class="fas fa-times-circle mr-1"></i>
                                "Desconectado"
                            </span>
                            <button type="button" class="ml-4 px-4 py-2 bg-primary text-white rounded-lg hover:bg-primary-dark transition-colors">
                                "Conectar"
                            </button>
                        </div>
                    }
                }}
            </div>
        </div>
    }
}
