use leptos::*;

#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    icon: &'static str,
    #[prop(optional, into)] caption: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 overflow-hidden shadow rounded-lg p-6">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm font-medium text-gray-500 dark:text-gray-400">{title}</p>
                    <p class="mt-2 text-2xl font-semibold text-gray-900 dark:text-white">{value}</p>
                    {caption.map(|c| view! { <p class="mt-1 text-xs text-gray-500">{c}</p> })}
                </div>
                <div class="w-12 h-12 flex items-center justify-center rounded-full bg-primary-lighter text-primary-dark">
                    <i class=format!("{} text-xl", icon)></i>
                </div>
            </div>
        </div>
    }
}

/// Static stand-in for charts and maps.
#[component]
pub fn PlaceholderCard(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 shadow rounded-lg p-6">
            <h3 class="text-lg font-medium text-gray-900 dark:text-white">{title}</h3>
            <div class="mt-4 h-64 flex items-center justify-center rounded-lg border-2 border-dashed border-gray-200 dark:border-gray-700 text-gray-400">
                {description.unwrap_or_else(|| "Em breve".to_string())}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stat_card_shows_value_and_icon() {
        let html = render_to_string(move || {
            view! {
                <StatCard title="Total de Produtos" value="1.234" icon="fas fa-box" caption="+12%" />
            }
        });
        assert!(html.contains("Total de Produtos"));
        assert!(html.contains("1.234"));
        assert!(html.contains("fas fa-box"));
        assert!(html.contains("+12%"));
    }

    #[test]
    fn placeholder_defaults_its_description() {
        let html = render_to_string(move || view! { <PlaceholderCard title="Mapa" /> });
        assert!(html.contains("Mapa"));
        assert!(html.contains("Em breve"));
    }
}
