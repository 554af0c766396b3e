use crate::crud::{leaf_fields, Assign, Entity, FieldError, FieldValue, Identity};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransactionKind {
    #[default]
    Income,
    Expense,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "entrada",
            TransactionKind::Expense => "saida",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Entrada",
            TransactionKind::Expense => "Saída",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "entrada" => Ok(TransactionKind::Income),
            "saida" | "saída" => Ok(TransactionKind::Expense),
            _ => Err(()),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transaction {
    pub id: String,
    pub date: String,
    pub description: String,
    pub kind: TransactionKind,
    pub amount: f64,
}

leaf_fields! {
    pub enum TransactionField {
        Date => "date",
        Description => "description",
        Kind => "kind",
        Amount => "amount",
    }
}

impl Assign for Transaction {
    type Field = TransactionField;

    fn assign(&mut self, field: &TransactionField, value: FieldValue) -> Result<(), FieldError> {
        match field {
            TransactionField::Date => self.date = value.into_text(field)?,
            TransactionField::Description => self.description = value.into_text(field)?,
            TransactionField::Kind => self.kind = value.into_option(field)?,
            TransactionField::Amount => self.amount = value.into_number(field)?,
        }
        Ok(())
    }
}

impl Entity for Transaction {
    const KIND: &'static str = "transaction";

    fn id(&self) -> &str {
        &self.id
    }

    fn stamp(&mut self, identity: &Identity) {
        self.id = identity.id.clone();
    }

    fn keep_identity(&mut self, stored: &Self) {
        self.id = stored.id.clone();
    }

    fn search_text(&self) -> Vec<String> {
        vec![self.description.clone()]
    }
}

/// Income, expense and net balance over a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CashSummary {
    pub income: f64,
    pub expense: f64,
}

impl CashSummary {
    pub fn of(transactions: &[Transaction]) -> Self {
        transactions
            .iter()
            .fold(CashSummary::default(), |mut acc, tx| {
                match tx.kind {
                    TransactionKind::Income => acc.income += tx.amount,
                    TransactionKind::Expense => acc.expense += tx.amount,
                }
                acc
            })
    }

    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    Issued,
    Pending,
    Cancelled,
}

impl DocumentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Issued => "Emitida",
            DocumentStatus::Pending => "Pendente",
            DocumentStatus::Cancelled => "Cancelada",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            DocumentStatus::Issued => "bg-green-100 text-green-800",
            DocumentStatus::Pending => "bg-yellow-100 text-yellow-800",
            DocumentStatus::Cancelled => "bg-red-100 text-red-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FiscalDocument {
    pub id: String,
    pub number: String,
    /// e.g. `"Nota Fiscal"`.
    pub kind: String,
    pub date: String,
    pub status: DocumentStatus,
}
