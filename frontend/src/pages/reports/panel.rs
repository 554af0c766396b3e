use super::repository::{BreakdownSection, ReportsRepository, Trend};
use crate::components::{cards::PlaceholderCard, common::PageHeader};
use leptos::*;

#[component]
fn TrendTag(trend: Trend) -> impl IntoView {
    let (class, icon) = if trend.is_up() {
        ("flex items-center text-green-600 text-sm font-medium", "fas fa-arrow-up mr-1")
    } else {
        ("flex items-center text-red-600 text-sm font-medium", "fas fa-arrow-down mr-1")
    };
    view! {
        <span class=class>
            <i class=icon></i>
            {trend.label()}
        </span>
    }
}

#[component]
fn Breakdown(section: BreakdownSection) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{section.title}</h2>
                {match section.trend {
                    Some(trend) => view! { <TrendTag trend=trend /> }.into_view(),
                    None => view! { <i class=format!("{} text-gray-400", section.icon)></i> }.into_view(),
                }}
            </div>
            <div class="space-y-4">
                {section
                    .rows
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="flex justify-between items-center">
                                <span class="text-gray-600 dark:text-gray-300">{label}</span>
                                <span class="text-lg font-semibold text-gray-900 dark:text-white">{value}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let repository = ReportsRepository::new();

    view! {
        <div class="space-y-6">
            <PageHeader title="Relatórios" />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                {repository
                    .charts()
                    .into_iter()
                    .map(|chart| {
                        view! {
                            <div class="relative">
                                {chart.trend.map(|trend| view! {
                                    <div class="absolute top-6 right-6"><TrendTag trend=trend /></div>
                                })}
                                <PlaceholderCard title=chart.title description=chart.placeholder />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {repository
                    .breakdowns()
                    .into_iter()
                    .map(|section| view! { <Breakdown section=section /> })
                    .collect_view()}
            </div>
        </div>
    }
}
