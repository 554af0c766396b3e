use super::{
    components::{messages::AutomatedMessages, routes::RouteSuggestions, tracking::VehicleTracking},
    repository::AssistantRepository,
    utils::AssistantTab,
};
use crate::components::common::{PageHeader, TabBar};
use leptos::*;

#[component]
pub fn AiAssistantPage() -> impl IntoView {
    let active_tab = create_rw_signal(AssistantTab::default());
    view! { <AiAssistantPanel active_tab=active_tab /> }
}

#[component]
pub fn AiAssistantPanel(active_tab: RwSignal<AssistantTab>) -> impl IntoView {
    let repository = AssistantRepository::new();
    let active_key = Signal::derive(move || active_tab.get().key());
    let on_tab = Callback::new(move |key: &'static str| active_tab.set(AssistantTab::from_key(key)));

    view! {
        <div class="space-y-6">
            <PageHeader title="Assistente IA" />
            <TabBar tabs=AssistantTab::TABS.to_vec() active=active_key on_select=on_tab />
            {move || match active_tab.get() {
                AssistantTab::Suggestions => view! { <RouteSuggestions routes=repository.routes() /> }.into_view(),
                AssistantTab::Tracking => view! { <VehicleTracking vehicles=repository.vehicles() /> }.into_view(),
                AssistantTab::Messages => view! { <AutomatedMessages messages=repository.messages() /> }.into_view(),
            }}
        </div>
    }
}
