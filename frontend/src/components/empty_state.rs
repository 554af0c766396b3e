use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] icon: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-gray-200 dark:border-gray-700">
            <i class=format!("{} text-3xl text-gray-400", icon.unwrap_or("fas fa-inbox"))></i>
            <h3 class="mt-2 text-sm font-semibold text-gray-900 dark:text-white">{title}</h3>
            {description.map(|desc| view! { <p class="mt-1 text-sm text-gray-500">{desc}</p> })}
        </div>
    }
}
