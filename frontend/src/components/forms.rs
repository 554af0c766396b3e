//! Labelled form controls. Every control reports edits as a
//! [`FieldValue`] so it can be wired straight to a store setter.

use crate::crud::FieldValue;
use leptos::*;

const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 dark:text-gray-300";
const CONTROL_CLASS: &str = "mt-1 block w-full rounded-md border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-700 text-gray-900 dark:text-white shadow-sm focus:border-primary focus:ring-primary";

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<FieldValue>,
    #[prop(optional, into)] input_type: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class=LABEL_CLASS>{label}</span>
            <input
                type=input_type.unwrap_or("text")
                class=CONTROL_CLASS
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(FieldValue::Text(event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
pub fn NumberInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<FieldValue>,
    #[prop(optional, into)] step: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class=LABEL_CLASS>{label}</span>
            <input
                type="number"
                min="0"
                step=step.unwrap_or("1")
                class=CONTROL_CLASS
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(FieldValue::Text(event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<FieldValue>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class=LABEL_CLASS>{label}</span>
            <textarea
                rows="3"
                class=CONTROL_CLASS
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(FieldValue::Text(event_target_value(&ev)))
            ></textarea>
        </label>
    }
}

/// Options are `(value, label)` pairs.
#[component]
pub fn SelectInput(
    #[prop(into)] label: String,
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<FieldValue>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class=LABEL_CLASS>{label}</span>
            <select
                class=CONTROL_CLASS
                on:change=move |ev| on_change.call(FieldValue::Text(event_target_value(&ev)))
            >
                {options
                    .into_iter()
                    .map(|(option, text)| {
                        view! {
                            <option value=option selected=move || value.get() == option>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn Checkbox(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<FieldValue>,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2">
            <input
                type="checkbox"
                class="h-4 w-4 rounded border-gray-300 text-primary focus:ring-primary"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.call(FieldValue::Flag(event_target_checked(&ev)))
            />
            <span class="text-sm text-gray-700 dark:text-gray-300">{label}</span>
        </label>
    }
}

/// Returns `selected` with `id` removed, or moved to the end when `on`.
/// The result is in selection order.
pub fn toggle_selection(selected: &[String], id: &str, on: bool) -> Vec<String> {
    let mut next: Vec<String> = selected.iter().filter(|s| *s != id).cloned().collect();
    if on {
        next.push(id.to_string());
    }
    next
}

/// Multi-select rendered as checkboxes. Each change hands over the whole
/// selected set.
#[component]
pub fn CheckboxGroup(
    #[prop(into)] label: String,
    /// `(id, label)` pairs.
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into)] selected: Signal<Vec<String>>,
    on_change: Callback<FieldValue>,
) -> impl IntoView {
    view! {
        <fieldset class="block">
            <legend class=LABEL_CLASS>{label}</legend>
            <div class="mt-2 space-y-1">
                <For
                    each=move || options.get()
                    key=|(id, _)| id.clone()
                    children=move |(id, text)| {
                        let id_for_check = id.clone();
                        let is_checked = move || selected.with(|s| s.iter().any(|x| *x == id_for_check));
                        view! {
                            <label class="flex items-center gap-2">
                                <input
                                    type="checkbox"
                                    class="h-4 w-4 rounded border-gray-300 text-primary focus:ring-primary"
                                    prop:checked=is_checked
                                    on:change=move |ev| {
                                        let on = event_target_checked(&ev);
                                        let next = selected.with_untracked(|s| toggle_selection(s, &id, on));
                                        on_change.call(FieldValue::Selection(next));
                                    }
                                />
                                <span class="text-sm text-gray-700 dark:text-gray-300">{text}</span>
                            </label>
                        }
                    }
                />
            </div>
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_selection_adds_and_removes() {
        let selected = vec!["1".to_string(), "2".to_string()];
        assert_eq!(toggle_selection(&selected, "3", true), vec!["1", "2", "3"]);
        assert_eq!(toggle_selection(&selected, "1", false), vec!["2"]);
        assert_eq!(toggle_selection(&selected, "2", true), vec!["1", "2"]);
        assert!(toggle_selection(&[], "9", false).is_empty());
        let later_pick_goes_last = toggle_selection(&["2".to_string()], "1", true);
        assert_eq!(later_pick_goes_last, vec!["2", "1"]);
    }
}
