use super::{
    components::{
        delivery_list::DeliveryList, overview::LogisticsOverview, truck_form::TruckForm,
        truck_table::TruckTable,
    },
    utils::{DeliverySummary, LogisticsTab},
    view_model::{use_logistics_view_model, LogisticsViewModel},
};
use crate::{
    components::{
        common::{Button, PageHeader, SearchInput, TabBar},
        confirm_dialog::ConfirmDialog,
    },
    models::Truck,
    utils::time::today_string,
};
use leptos::*;

#[component]
pub fn LogisticsPage() -> impl IntoView {
    let vm = use_logistics_view_model();
    view! { <LogisticsPanel vm=vm /> }
}

#[component]
pub fn LogisticsPanel(vm: LogisticsViewModel) -> impl IntoView {
    let LogisticsViewModel {
        trucks,
        deliveries,
        active_tab,
    } = vm;
    let active_key = Signal::derive(move || active_tab.get().key());
    let on_tab = Callback::new(move |key: &'static str| active_tab.set(LogisticsTab::from_key(key)));

    view! {
        <div class="space-y-6">
            <PageHeader title="Logística">
                <Button on:click=move |_| vm.open_create()>
                    <i class="fas fa-plus"></i>
                    "Novo Veículo"
                </Button>
            </PageHeader>
            <TabBar tabs=LogisticsTab::TABS.to_vec() active=active_key on_select=on_tab />
            {move || match active_tab.get() {
                LogisticsTab::Overview => {
                    let summary = deliveries.with_value(|d| DeliverySummary::of(d, &today_string()));
                    view! { <LogisticsOverview summary=summary /> }.into_view()
                }
                LogisticsTab::Trucks => view! {
                    <div class="space-y-4">
                        <SearchInput value=trucks.search() placeholder="Buscar veículos..." />
                        <TruckTable
                            trucks=trucks.filtered()
                            on_edit=Callback::new(move |truck: Truck| trucks.open_edit(&truck))
                            on_delete=Callback::new(move |id: String| trucks.request_delete(&id))
                        />
                    </div>
                }
                .into_view(),
                LogisticsTab::Deliveries => view! {
                    <DeliveryList deliveries=deliveries.get_value() />
                }
                .into_view(),
            }}
            <TruckForm store=trucks />
            <ConfirmDialog
                is_open=trucks.confirming_delete()
                title="Excluir veículo"
                message="Tem certeza que deseja excluir este veículo?"
                on_confirm=Callback::new(move |_| {
                    trucks.confirm_delete();
                })
                on_cancel=Callback::new(move |_| trucks.cancel_delete())
                confirm_label="Excluir"
                destructive=true
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn overview_is_the_default_tab() {
        let html = render_to_string(move || view! { <LogisticsPage /> });
        assert!(html.contains("Logística"));
        assert!(html.contains("Visão Geral"));
        assert!(html.contains("Mapa da Frota"));
        assert!(!html.contains("ABC-1234"));
    }

    #[test]
    fn fleet_tab_lists_trucks() {
        let html = render_to_string(move || {
            let vm = use_logistics_view_model();
            vm.active_tab.set(LogisticsTab::Trucks);
            view! { <LogisticsPanel vm=vm /> }
        });
        assert!(html.contains("Buscar veículos..."));
        assert!(html.contains("ABC-1234"));
    }

    #[test]
    fn search_hides_non_matching_trucks() {
        let html = render_to_string(move || {
            let vm = use_logistics_view_model();
            vm.active_tab.set(LogisticsTab::Trucks);
            vm.trucks.search().set("scania".into());
            view! { <LogisticsPanel vm=vm /> }
        });
        assert!(!html.contains("ABC-1234"));
        assert!(html.contains("Nenhum veículo cadastrado"));
    }

    #[test]
    fn deliveries_tab_and_delete_prompt() {
        let html = render_to_string(move || {
            let vm = use_logistics_view_model();
            vm.active_tab.set(LogisticsTab::Deliveries);
            vm.trucks.request_delete("1");
            view! { <LogisticsPanel vm=vm /> }
        });
        assert!(html.contains("#12347"));
        assert!(html.contains("Tem certeza que deseja excluir este veículo?"));
    }
}
