use super::{
    components::order_table::OrderTable,
    utils::{parse_status_filter, status_filter_options, ALL_STATUSES},
    view_model::{use_orders_view_model, OrdersViewModel},
};
use crate::{
    components::{
        common::{PageHeader, SearchInput},
        forms::SelectInput,
    },
    crud::FieldValue,
};
use leptos::*;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let vm = use_orders_view_model();
    view! { <OrdersPanel vm=vm /> }
}

#[component]
pub fn OrdersPanel(vm: OrdersViewModel) -> impl IntoView {
    let status = vm.status;
    let status_value = Signal::derive(move || {
        status
            .get()
            .map_or(ALL_STATUSES, |s| s.as_str())
            .to_string()
    });
    let on_status = Callback::new(move |value: FieldValue| {
        if let FieldValue::Text(text) = value {
            status.set(parse_status_filter(&text));
        }
    });

    view! {
        <div class="space-y-6">
            <PageHeader title="Pedidos" />
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6 space-y-6">
                <div class="flex flex-col md:flex-row gap-4">
                    <div class="flex-1">
                        <SearchInput value=vm.search placeholder="Buscar pedidos..." />
                    </div>
                    <div class="md:w-64">
                        <SelectInput
                            label="Status"
                            options=status_filter_options()
                            value=status_value
                            on_change=on_status
                        />
                    </div>
                </div>
                <OrderTable orders=vm.filtered() />
            </div>
        </div>
    }
}
