use crate::models::{DocumentStatus, FiscalDocument, Transaction, TransactionKind};

/// Seed data for the financial panel.
#[derive(Clone, Default)]
pub struct FinanceRepository;

impl FinanceRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        vec![
            Transaction {
                id: "1".into(),
                date: "2024-03-01".into(),
                description: "Venda de produto X".into(),
                kind: TransactionKind::Income,
                amount: 1500.0,
            },
            Transaction {
                id: "2".into(),
                date: "2024-03-05".into(),
                description: "Pagamento fornecedor Y".into(),
                kind: TransactionKind::Expense,
                amount: 750.0,
            },
        ]
    }

    pub fn documents(&self) -> Vec<FiscalDocument> {
        [
            ("1", "NF-00123", "2024-03-01", DocumentStatus::Issued),
            ("2", "NF-00124", "2024-03-05", DocumentStatus::Pending),
        ]
        .into_iter()
        .map(|(id, number, date, status)| FiscalDocument {
            id: id.into(),
            number: number.into(),
            kind: "Nota Fiscal".into(),
            date: date.into(),
            status,
        })
        .collect()
    }
}
