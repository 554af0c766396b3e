use leptos::ev::KeyboardEvent;
use leptos::*;

fn label_or(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

/// Yes/no confirmation shown before a destructive action.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_class = if destructive {
        "px-4 py-2 rounded-lg text-sm font-semibold bg-red-600 text-white hover:bg-red-700"
    } else {
        "px-4 py-2 rounded-lg text-sm font-semibold bg-primary text-white hover:bg-primary-dark"
    };
    let title_text = Signal::derive(move || title.get());
    let message_text = Signal::derive(move || message.get());
    let confirm_text = Signal::derive(move || label_or(confirm_label.get(), "Confirmar"));
    let cancel_text = Signal::derive(move || label_or(cancel_label.get(), "Cancelar"));

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Fechar"
                    class="absolute inset-0 bg-black/50"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-white dark:bg-gray-800 shadow-xl p-6 space-y-4"
                    role="alertdialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                        {move || title_text.get()}
                    </h2>
                    <p class="text-sm text-gray-600 dark:text-gray-300">{move || message_text.get()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="px-4 py-2 rounded-lg text-sm font-medium bg-gray-100 text-gray-700 hover:bg-gray-200 dark:bg-gray-700 dark:text-gray-200"
                            on:click=move |_| on_cancel.call(())
                        >
                            {move || cancel_text.get()}
                        </button>
                        <button
                            type="button"
                            class=confirm_class
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || confirm_text.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
