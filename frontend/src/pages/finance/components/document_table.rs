use crate::{
    components::{common::Badge, empty_state::EmptyState},
    models::FiscalDocument,
    utils::format::format_date,
};
use leptos::*;

#[component]
pub fn DocumentTable(documents: Vec<FiscalDocument>) -> impl IntoView {
    if documents.is_empty() {
        return view! { <EmptyState title="Nenhum documento fiscal" icon="fas fa-file-invoice" /> }
            .into_view();
    }

    view! {
        <div class="bg-white dark:bg-gray-800 shadow rounded-lg overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                <thead class="bg-gray-50 dark:bg-gray-700">
                    <tr>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Número"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Tipo"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Data"</th>
                        <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">"Status"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                    {documents
                        .into_iter()
                        .map(|doc| {
                            view! {
                                <tr class="hover:bg-gray-50 dark:hover:bg-gray-700">
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-white">{doc.number}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-white">{doc.kind}</td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{format_date(&doc.date)}</td>
                                    <td class="px-6 py-4 whitespace-nowrap">
                                        <Badge label=doc.status.label() class=doc.status.badge_class() />
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}
