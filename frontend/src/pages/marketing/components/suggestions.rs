use crate::{models::Product, pages::marketing::types::MarketingSuggestions};
use leptos::*;

const CARD_CLASS: &str = "bg-white dark:bg-gray-800 rounded-lg shadow p-6";
const HEADING_CLASS: &str = "text-lg font-semibold text-gray-900 dark:text-white mb-4";

#[component]
pub fn ProductOverview(product: Product) -> impl IntoView {
    let product_type = if product.product_type.is_empty() {
        "-".to_string()
    } else {
        product.product_type.clone()
    };
    view! {
        <div class=CARD_CLASS>
            <h2 class="text-xl font-semibold text-gray-900 dark:text-white mb-4">{product.name}</h2>
            <div class="grid grid-cols-2 gap-4">
                <div>
                    <p class="text-sm text-gray-500">"Categoria"</p>
                    <p class="font-medium">{product.category}</p>
                </div>
                <div>
                    <p class="text-sm text-gray-500">"Tipo de Produto"</p>
                    <p class="font-medium">{product_type}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn SuggestionCards(suggestions: MarketingSuggestions) -> impl IntoView {
    let MarketingSuggestions {
        seo_terms,
        audience,
        channels,
        campaigns,
    } = suggestions;

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class=CARD_CLASS>
                <h3 class=HEADING_CLASS>"Termos SEO Recomendados"</h3>
                <div class="flex flex-wrap gap-2">
                    {seo_terms
                        .into_iter()
                        .map(|term| view! { <span class="px-3 py-1 bg-blue-100 text-blue-800 rounded-full text-sm">{term}</span> })
                        .collect_view()}
                </div>
            </div>
            <div class=CARD_CLASS>
                <h3 class=HEADING_CLASS>"Público-Alvo"</h3>
                <div class="space-y-3">
                    {audience
                        .into_iter()
                        .map(|share| {
                            view! {
                                <div class="flex items-center justify-between gap-4">
                                    <span class="text-gray-700 dark:text-gray-300 w-16">{share.age}</span>
                                    <div class="flex-1 h-2 bg-gray-200 rounded-full">
                                        <div
                                            class="h-2 bg-primary rounded-full"
                                            style=format!("width: {}%", share.percentage)
                                        ></div>
                                    </div>
                                    <span class="text-gray-700 dark:text-gray-300">{format!("{}%", share.percentage)}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class=CARD_CLASS>
                <h3 class=HEADING_CLASS>"Canais Recomendados"</h3>
                <ul class="space-y-2">
                    {channels
                        .into_iter()
                        .map(|channel| view! { <li class="flex items-center gap-2"><i class="fas fa-hashtag text-primary"></i>{channel}</li> })
                        .collect_view()}
                </ul>
            </div>
            <div class=CARD_CLASS>
                <h3 class=HEADING_CLASS>"Sugestões de Campanhas"</h3>
                <div class="space-y-4">
                    {campaigns
                        .into_iter()
                        .map(|campaign| {
                            view! {
                                <div class="border border-gray-200 dark:border-gray-700 rounded-lg p-4">
                                    <div class="flex justify-between items-start">
                                        <div>
                                            <h4 class="font-medium text-gray-900 dark:text-white">{campaign.title}</h4>
                                            <p class="text-sm text-gray-500 mt-1">{campaign.description}</p>
                                        </div>
                                        <span class="px-2 py-1 bg-green-100 text-green-800 rounded text-sm whitespace-nowrap">
                                            {format!("ROI: {}", campaign.estimated_roi)}
                                        </span>
                                    </div>
                                    <div class="mt-2 text-sm text-gray-500">{format!("Duração: {}", campaign.duration)}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
