use super::{
    components::{
        customer_form::CustomerForm, customer_table::CustomerTable, group_form::GroupForm,
        group_grid::GroupGrid,
    },
    utils::CustomersTab,
    view_model::{use_customers_view_model, CustomersViewModel},
};
use crate::{
    components::{
        common::{Button, PageHeader, SearchInput, TabBar},
        confirm_dialog::ConfirmDialog,
    },
    models::{Customer, CustomerGroup},
};
use leptos::*;

#[component]
pub fn CustomersPage() -> impl IntoView {
    let vm = use_customers_view_model();
    view! { <CustomersPanel vm=vm /> }
}

#[component]
pub fn CustomersPanel(vm: CustomersViewModel) -> impl IntoView {
    let CustomersViewModel {
        customers,
        groups,
        active_tab,
        search,
    } = vm;
    let active_key = Signal::derive(move || active_tab.get().key());
    let on_tab = Callback::new(move |key: &'static str| active_tab.set(CustomersTab::from_key(key)));
    let new_label = move || match active_tab.get() {
        CustomersTab::Customers => "Novo Cliente",
        CustomersTab::Groups => "Novo Grupo",
    };
    let all_groups = groups.items();

    view! {
        <div class="space-y-6">
            <PageHeader title="Clientes">
                <Button on:click=move |_| vm.open_create()>
                    <i class="fas fa-plus"></i>
                    {new_label}
                </Button>
            </PageHeader>
            <TabBar tabs=CustomersTab::TABS.to_vec() active=active_key on_select=on_tab />
            {move || {
                let placeholder = active_tab.get().search_placeholder();
                view! { <SearchInput value=search placeholder=placeholder /> }
            }}
            {move || match active_tab.get() {
                CustomersTab::Customers => view! {
                    <CustomerTable
                        customers=customers.filtered()
                        groups=all_groups
                        on_edit=Callback::new(move |customer: Customer| customers.open_edit(&customer))
                        on_delete=Callback::new(move |id: String| customers.request_delete(&id))
                    />
                }
                .into_view(),
                CustomersTab::Groups => view! {
                    <GroupGrid
                        groups=groups.filtered()
                        on_edit=Callback::new(move |group: CustomerGroup| groups.open_edit(&group))
                        on_delete=Callback::new(move |id: String| groups.request_delete(&id))
                    />
                }
                .into_view(),
            }}
            <CustomerForm store=customers groups=all_groups />
            <GroupForm store=groups />
            <ConfirmDialog
                is_open=customers.confirming_delete()
                title="Excluir cliente"
                message="Tem certeza que deseja excluir este cliente?"
                on_confirm=Callback::new(move |_| {
                    customers.confirm_delete();
                })
                on_cancel=Callback::new(move |_| customers.cancel_delete())
                confirm_label="Excluir"
                destructive=true
            />
            <ConfirmDialog
                is_open=groups.confirming_delete()
                title="Excluir grupo"
                message="Tem certeza que deseja excluir este grupo?"
                on_confirm=Callback::new(move |_| {
                    groups.confirm_delete();
                })
                on_cancel=Callback::new(move |_| groups.cancel_delete())
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
    fn customers_tab_is_shown_first() {
        let html = render_to_string(move || view! { <CustomersPage /> });
        assert!(html.contains("Clientes"));
        assert!(html.contains("Novo Cliente"));
        assert!(html.contains("Buscar clientes..."));
        assert!(html.contains("João Silva"));
        assert!(!html.contains("Clientes corporativos"));
    }

    #[test]
    fn groups_tab_lists_groups() {
        let html = render_to_string(move || {
            let vm = use_customers_view_model();
            vm.active_tab.set(CustomersTab::Groups);
            view! { <CustomersPanel vm=vm /> }
        });
        assert!(html.contains("Novo Grupo"));
        assert!(html.contains("Buscar grupos..."));
        assert!(html.contains("Clientes corporativos"));
    }

    #[test]
    fn pending_delete_opens_confirmation() {
        let html = render_to_string(move || {
            let vm = use_customers_view_model();
            vm.customers.request_delete("1");
            view! { <CustomersPanel vm=vm /> }
        });
        assert!(html.contains("Tem certeza que deseja excluir este cliente?"));
        assert!(!html.contains("Tem certeza que deseja excluir este grupo?"));
    }
}
