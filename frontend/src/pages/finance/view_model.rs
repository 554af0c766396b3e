use super::{repository::FinanceRepository, utils::FinanceTab};
use crate::crud::CrudStore;
use crate::models::{CashSummary, FiscalDocument, Transaction};
use leptos::*;

#[derive(Clone, Copy)]
pub struct FinanceViewModel {
    pub transactions: CrudStore<Transaction>,
    pub documents: StoredValue<Vec<FiscalDocument>>,
    pub active_tab: RwSignal<FinanceTab>,
}

impl FinanceViewModel {
    pub fn new(repository: &FinanceRepository) -> Self {
        Self {
            transactions: CrudStore::new(repository.transactions()),
            documents: store_value(repository.documents()),
            active_tab: create_rw_signal(FinanceTab::default()),
        }
    }

    /// Totals over every transaction, ignoring the search term.
    pub fn summary(&self) -> Signal<CashSummary> {
        let items = self.transactions.items();
        Signal::derive(move || items.with(|t| CashSummary::of(t)))
    }

    pub fn can_create(&self) -> Signal<bool> {
        let tab = self.active_tab;
        Signal::derive(move || tab.get() == FinanceTab::Transactions)
    }
}

pub fn use_finance_view_model() -> FinanceViewModel {
    FinanceViewModel::new(&FinanceRepository::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn summary_follows_transaction_edits() {
        with_runtime(|| {
            let vm = use_finance_view_model();
            let summary = vm.summary();
            assert_eq!(summary.get_untracked().net(), 750.0);

            let store = vm.transactions;
            store.open_create();
            store.update_path("date", "2024-03-10".into()).unwrap();
            store.update_path("description", "Frete".into()).unwrap();
            store.update_path("kind", "saída".into()).unwrap();
            store.update_path("amount", "250".into()).unwrap();
            store.submit();

            let totals = summary.get_untracked();
            assert_eq!(totals.income, 1500.0);
            assert_eq!(totals.expense, 1000.0);
            assert_eq!(totals.net(), 500.0);

            store.request_delete("1");
            store.confirm_delete();
            assert_eq!(summary.get_untracked().net(), -1000.0);
        });
    }

    #[test]
    fn create_is_only_offered_on_transactions_tab() {
        with_runtime(|| {
            let vm = use_finance_view_model();
            assert!(!vm.can_create().get_untracked());
            vm.active_tab.set(FinanceTab::Transactions);
            assert!(vm.can_create().get_untracked());
        });
    }
}
