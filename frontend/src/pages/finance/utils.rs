use crate::models::TransactionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinanceTab {
    #[default]
    Overview,
    Transactions,
    Documents,
}

impl FinanceTab {
    pub const TABS: [(&'static str, &'static str); 3] = [
        ("overview", "Visão Geral"),
        ("transactions", "Transações"),
        ("documents", "Documentos Fiscais"),
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FinanceTab::Overview => "overview",
            FinanceTab::Transactions => "transactions",
            FinanceTab::Documents => "documents",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "transactions" => FinanceTab::Transactions,
            "documents" => FinanceTab::Documents,
            _ => FinanceTab::Overview,
        }
    }
}

pub fn kind_badge_class(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "bg-green-100 text-green-800",
        TransactionKind::Expense => "bg-red-100 text-red-800",
    }
}
