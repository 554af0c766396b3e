use crate::{components::empty_state::EmptyState, models::CustomerGroup, utils::format::format_date};
use leptos::*;

#[component]
pub fn GroupGrid(
    #[prop(into)] groups: Signal<Vec<CustomerGroup>>,
    on_edit: Callback<CustomerGroup>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !groups.with(Vec::is_empty)
            fallback=|| view! { <EmptyState title="Nenhum grupo encontrado" icon="fas fa-tags" /> }
        >
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                <For
                    each=move || groups.get()
                    key=|group| group.id.clone()
                    children=move |group: CustomerGroup| {
                        let editable = group.clone();
                        let id = group.id.clone();
                        view! {
                            <div class="bg-white dark:bg-gray-800 border rounded-lg p-6 hover:shadow-lg transition-shadow">
                                <div class="flex justify-between items-start">
                                    <div>
                                        <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{group.name.clone()}</h3>
                                        <p class="text-sm text-gray-500 mt-1">{group.description.clone()}</p>
                                    </div>
                                    <div class="flex gap-2">
                                        <button
                                            type="button"
                                            class="text-primary hover:text-primary-dark"
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
                                    </div>
                                </div>
                                <p class="mt-4 text-xs text-gray-500">
                                    {format!("Criado em: {}", format_date(&group.created_at))}
                                </p>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::customers::repository::CustomersRepository;
    use crate::test_support::ssr::{html_text, render_to_string};

    #[test]
    fn cards_show_name_description_and_date() {
        let html = render_to_string(move || {
            let groups = CustomersRepository::new().groups();
            view! {
                <GroupGrid
                    groups=Signal::derive(move || groups.clone())
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Empresarial"));
        assert!(html.contains("Clientes corporativos"));
        assert!(html.contains(&html_text("Criado em: 15/03/2024")));
    }
}
