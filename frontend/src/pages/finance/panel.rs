use super::{
    components::{
        document_table::DocumentTable, overview::FinanceOverview,
        transaction_form::TransactionForm, transaction_table::TransactionTable,
    },
    utils::FinanceTab,
    view_model::{use_finance_view_model, FinanceViewModel},
};
use crate::{
    components::{
        common::{Button, PageHeader, SearchInput, TabBar},
        confirm_dialog::ConfirmDialog,
    },
    models::Transaction,
};
use leptos::*;

#[component]
pub fn FinancePage() -> impl IntoView {
    let vm = use_finance_view_model();
    view! { <FinancePanel vm=vm /> }
}

#[component]
pub fn FinancePanel(vm: FinanceViewModel) -> impl IntoView {
    let FinanceViewModel {
        transactions,
        documents,
        active_tab,
    } = vm;
    let active_key = Signal::derive(move || active_tab.get().key());
    let on_tab = Callback::new(move |key: &'static str| active_tab.set(FinanceTab::from_key(key)));
    let can_create = vm.can_create();
    let summary = vm.summary();

    view! {
        <div class="space-y-6">
            <PageHeader title="Finanças">
                <Show when=move || can_create.get()>
                    <Button on:click=move |_| transactions.open_create()>
                        <i class="fas fa-plus"></i>
                        "Nova Transação"
                    </Button>
                </Show>
            </PageHeader>
            <TabBar tabs=FinanceTab::TABS.to_vec() active=active_key on_select=on_tab />
            {move || match active_tab.get() {
                FinanceTab::Overview => view! { <FinanceOverview summary=summary /> }.into_view(),
                FinanceTab::Transactions => view! {
                    <div class="space-y-4">
                        <SearchInput value=transactions.search() placeholder="Buscar transações..." />
                        <TransactionTable
                            transactions=transactions.filtered()
                            on_edit=Callback::new(move |record: Transaction| transactions.open_edit(&record))
                            on_delete=Callback::new(move |id: String| transactions.request_delete(&id))
                        />
                    </div>
                }
                .into_view(),
                FinanceTab::Documents => view! {
                    <DocumentTable documents=documents.get_value() />
                }
                .into_view(),
            }}
            <TransactionForm store=transactions />
            <ConfirmDialog
                is_open=transactions.confirming_delete()
                title="Excluir transação"
                message="Tem certeza que deseja excluir este registro?"
                on_confirm=Callback::new(move |_| {
                    transactions.confirm_delete();
                })
                on_cancel=Callback::new(move |_| transactions.cancel_delete())
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
    fn overview_hides_the_new_button() {
        let html = render_to_string(move || view! { <FinancePage /> });
        assert!(html.contains("Finanças"));
        assert!(html.contains("Saldo"));
        assert!(html.contains("R$ 750,00"));
        assert!(!html.contains("Nova Transação"));
    }

    #[test]
    fn transactions_tab_offers_create() {
        let html = render_to_string(move || {
            let vm = use_finance_view_model();
            vm.active_tab.set(FinanceTab::Transactions);
            view! { <FinancePanel vm=vm /> }
        });
        assert!(html.contains("Nova Transação"));
        assert!(html.contains("Pagamento fornecedor Y"));
    }

    #[test]
    fn documents_tab_is_read_only() {
        let html = render_to_string(move || {
            let vm = use_finance_view_model();
            vm.active_tab.set(FinanceTab::Documents);
            view! { <FinancePanel vm=vm /> }
        });
        assert!(html.contains("NF-00123"));
        assert!(!html.contains("aria-label=\"Editar\""));
    }
}
