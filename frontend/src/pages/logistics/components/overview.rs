use crate::{
    components::cards::{PlaceholderCard, StatCard},
    pages::logistics::utils::DeliverySummary,
};
use leptos::*;

#[component]
pub fn LogisticsOverview(summary: DeliverySummary) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard title="Entregas Hoje" value=summary.today.to_string() icon="fas fa-truck" />
                <StatCard title="Em Rota" value=summary.in_route.to_string() icon="fas fa-route" />
                <StatCard title="Agendadas" value=summary.scheduled.to_string() icon="fas fa-calendar" />
                <StatCard title="Total de Itens" value=summary.items.to_string() icon="fas fa-box" />
            </div>
            <PlaceholderCard title="Mapa da Frota" description="Mapa com localização em tempo real dos veículos" />
        </div>
    }
}
