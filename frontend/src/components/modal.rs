use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::*;

/// Modal wrapping a create/edit form. Submitting the form calls
/// `on_submit`; the backdrop, the close button and Escape call `on_cancel`.
#[component]
pub fn FormModal(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] submit_label: MaybeSignal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let submit_text = Signal::derive(move || {
        let text = submit_label.get();
        if text.trim().is_empty() {
            "Salvar".to_string()
        } else {
            text
        }
    });
    let children = store_value(children);
    let title_text = Signal::derive(move || title.get());

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Fechar"
                    class="absolute inset-0 bg-black/50"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[51] w-full max-w-2xl max-h-[90vh] overflow-y-auto rounded-lg bg-white dark:bg-gray-800 shadow-xl p-6"
                    role="dialog"
                    aria-modal="true"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <div class="flex items-center justify-between mb-4">
                        <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                            {move || title_text.get()}
                        </h2>
                        <button
                            type="button"
                            aria-label="Fechar"
                            class="text-gray-400 hover:text-gray-600"
                            on:click=move |_| on_cancel.call(())
                        >
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                    <form
                        class="space-y-4"
                        on:submit=move |ev: SubmitEvent| {
                            ev.prevent_default();
                            on_submit.call(());
                        }
                    >
                        {children.with_value(|children| children())}
                        <div class="flex justify-end gap-2 pt-2">
                            <button
                                type="button"
                                class="px-4 py-2 rounded-lg text-sm font-medium bg-gray-100 text-gray-700 hover:bg-gray-200 dark:bg-gray-700 dark:text-gray-200"
                                on:click=move |_| on_cancel.call(())
                            >
                                "Cancelar"
                            </button>
                            <button
                                type="submit"
                                class="px-4 py-2 rounded-lg text-sm font-medium bg-primary text-white hover:bg-primary-dark"
                            >
                                {move || submit_text.get()}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
