use crate::{
    components::{common::Badge, empty_state::EmptyState},
    models::{Transaction, TransactionKind},
    pages::finance::utils::kind_badge_class,
    utils::format::{format_brl, format_date},
};
use leptos::*;

#[component]
pub fn TransactionTable(
    #[prop(into)] transactions: Signal<Vec<Transaction>>,
    on_edit: Callback<Transaction>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !transactions.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="Nenhuma transação registrada" icon="fas fa-dollar-sign" /> }
        >
            <div class="bg-white dark:bg-gray-800 shadow rounded-lg overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-700">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Data"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Descrição"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Tipo"</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Valor"</th>
                            <th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider">"Ações"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <For
                            each=move || transactions.get()
                            key=|record| record.id.clone()
                            children=move |record: Transaction| {
                                let editable = record.clone();
                                let id = record.id.clone();
                                let amount_class = match record.kind {
                                    TransactionKind::Income => "text-green-600",
                                    TransactionKind::Expense => "text-red-600",
                                };
                                view! {
                                    <tr class="hover:bg-gray-50 dark:hover:bg-gray-700">
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{format_date(&record.date)}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-white">{record.description.clone()}</td>
                                        <td class="px-6 py-4 whitespace-nowrap">
                                            <Badge label=record.kind.label() class=kind_badge_class(record.kind) />
                                        </td>
                                        <td class=format!("px-6 py-4 whitespace-nowrap text-sm font-medium {}", amount_class)>
                                            {format_brl(record.amount)}
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
