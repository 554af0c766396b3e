use crate::pages::ai_assistant::types::AutomatedMessage;
use leptos::*;

#[component]
pub fn AutomatedMessages(messages: Vec<AutomatedMessage>) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Mensagens Automáticas"</h2>
                <button type="button" class="bg-primary text-white px-4 py-2 rounded-lg hover:bg-primary-dark transition-colors flex items-center gap-2">
                    <i class="fas fa-comment"></i>
                    "Nova Mensagem"
                </button>
            </div>
            <div class="space-y-4">
                {messages
                    .into_iter()
                    .map(|message| {
                        let metrics = [
                            ("Enviados", message.sent.to_string()),
                            ("Abertos", format!("{} ({}%)", message.opened, message.open_rate())),
                            ("Conversões", message.converted.to_string()),
                        ];
                        view! {
                            <div class="border border-gray-200 dark:border-gray-700 rounded-lg p-4">
                                <div class="flex justify-between items-start">
                                    <div>
                                        <span class="px-2.5 py-0.5 rounded-full text-xs font-medium bg-blue-100 text-blue-800">
                                            {message.kind}
                                        </span>
                                        <h3 class="mt-2 font-medium text-gray-900 dark:text-white">{message.content}</h3>
                                    </div>
                                    <span class="text-sm text-gray-500">{message.status}</span>
                                </div>
                                <div class="grid grid-cols-3 gap-4 mt-4 pt-4 border-t border-gray-200 dark:border-gray-700">
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
        </div>
    }
}
