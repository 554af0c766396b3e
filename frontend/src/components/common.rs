use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-primary hover:bg-primary-dark text-white shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-primary",
            ButtonVariant::Secondary => "bg-gray-100 hover:bg-gray-200 text-gray-700 dark:bg-gray-700 dark:text-gray-200 dark:hover:bg-gray-600",
            ButtonVariant::Danger => "bg-red-600 hover:bg-red-700 text-white shadow-sm",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center gap-2 rounded-lg px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get()
            {..attributes}
        >
            {children()}
        </button>
    }
}

/// Title row of a panel, with optional actions on the right.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between mb-6">
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">{title}</h1>
            <div class="flex items-center gap-2">{children.map(|c| c())}</div>
        </div>
    }
}

#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Buscar...".to_string());
    view! {
        <div class="relative w-full max-w-md">
            <input
                type="search"
                class="w-full pl-10 pr-4 py-2 rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-primary"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <i class="fas fa-search absolute left-3 top-3 text-gray-400"></i>
        </div>
    }
}

/// Horizontal tab strip. Tabs are `(key, label)` pairs.
#[component]
pub fn TabBar(
    tabs: Vec<(&'static str, &'static str)>,
    #[prop(into)] active: Signal<&'static str>,
    on_select: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="border-b border-gray-200 dark:border-gray-700 mb-6">
            <nav class="-mb-px flex space-x-8" role="tablist">
                {tabs
                    .into_iter()
                    .map(|(key, label)| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                aria-selected=move || (active.get() == key).to_string()
                                class=move || {
                                    if active.get() == key {
                                        "py-4 px-1 border-b-2 border-primary text-primary font-medium text-sm"
                                    } else {
                                        "py-4 px-1 border-b-2 border-transparent text-gray-500 hover:text-gray-700 dark:text-gray-400 font-medium text-sm"
                                    }
                                }
                                on:click=move |_| on_select.call(key)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}

#[component]
pub fn Badge(#[prop(into)] label: String, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <span class=format!("inline-flex px-2 py-1 text-xs font-semibold rounded-full {}", class)>
            {label}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_have_distinct_classes() {
        assert!(ButtonVariant::Primary.classes().contains("bg-primary"));
        assert!(ButtonVariant::Danger.classes().contains("bg-red-600"));
        assert_ne!(
            ButtonVariant::Primary.classes(),
            ButtonVariant::Secondary.classes()
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn tab_bar_marks_active_tab() {
        let html = render_to_string(move || {
            view! {
                <TabBar
                    tabs=vec![("customers", "Clientes"), ("groups", "Grupos")]
                    active=Signal::derive(|| "groups")
                    on_select=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Clientes"));
        assert!(html.contains("Grupos"));
        assert!(html.contains("aria-selected=\"true\""));
        assert!(html.contains("aria-selected=\"false\""));
    }

    #[test]
    fn page_header_and_badge_render() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <PageHeader title="Estoque">
                        <Button>"Novo"</Button>
                    </PageHeader>
                    <SearchInput value=create_rw_signal(String::new()) />
                    <Badge label="VIP" class="bg-green-100" />
                </div>
            }
        });
        assert!(html.contains("Estoque"));
        assert!(html.contains("Novo"));
        assert!(html.contains("Buscar..."));
        assert!(html.contains("VIP"));
    }
}
