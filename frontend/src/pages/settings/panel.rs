use super::repository::SECTIONS;
use crate::components::common::PageHeader;
use leptos::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <PageHeader title="Configurações" />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {SECTIONS
                    .into_iter()
                    .map(|section| {
                        view! {
                            <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6 hover:shadow-md transition-shadow">
                                <div class="flex items-start gap-4">
                                    <div class="p-3 rounded-lg bg-primary-lighter">
                                        <i class=format!("{} text-primary-dark text-xl", section.icon)></i>
                                    </div>
                                    <div>
                                        <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{section.title}</h2>
                                        <p class="text-gray-500 mt-1">{section.description}</p>
                                        <button type="button" class="mt-4 text-primary font-medium hover:text-primary-dark">
                                            "Configurar"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
