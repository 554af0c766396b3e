use super::{repository::DashboardRepository, utils::stat_tiles};
use crate::components::{
    cards::{PlaceholderCard, StatCard},
    common::PageHeader,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = DashboardRepository::new().stats();

    view! {
        <div class="space-y-6">
            <PageHeader title="Dashboard" />
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                {stat_tiles(&stats)
                    .into_iter()
                    .map(|(title, value, icon)| view! { <StatCard title=title value=value icon=icon /> })
                    .collect_view()}
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <PlaceholderCard title="Produtos Mais Vendidos" description="Gráfico de Produtos" />
                <PlaceholderCard title="Últimos Pedidos" description="Lista de Pedidos" />
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_stats_and_placeholders() {
        let html = render_to_string(move || view! { <DashboardPage /> });
        assert!(html.contains("Total Produtos"));
        assert!(html.contains("1.234"));
        assert!(html.contains("R$ 45.678,00"));
        assert!(html.contains("Produtos Mais Vendidos"));
        assert!(html.contains("Lista de Pedidos"));
    }
}
