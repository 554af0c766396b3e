use crate::models::{Customer, CustomerGroup};
use crate::utils::format::format_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomersTab {
    #[default]
    Customers,
    Groups,
}

impl CustomersTab {
    pub const TABS: [(&'static str, &'static str); 2] =
        [("customers", "Clientes"), ("groups", "Grupos")];

    pub fn key(&self) -> &'static str {
        match self {
            CustomersTab::Customers => "customers",
            CustomersTab::Groups => "groups",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "groups" => CustomersTab::Groups,
            _ => CustomersTab::Customers,
        }
    }

    pub fn search_placeholder(&self) -> &'static str {
        match self {
            CustomersTab::Customers => "Buscar clientes...",
            CustomersTab::Groups => "Buscar grupos...",
        }
    }
}

/// Groups a customer belongs to, in membership order. Ids whose group no
/// longer exists are skipped.
pub fn group_badges(group_ids: &[String], groups: &[CustomerGroup]) -> Vec<CustomerGroup> {
    group_ids
        .iter()
        .filter_map(|id| groups.iter().find(|group| group.id == *id).cloned())
        .collect()
}

pub fn last_purchase_label(customer: &Customer) -> String {
    match customer.last_purchase.as_deref() {
        Some(date) if !date.is_empty() => format_date(date),
        _ => "Sem compras".to_string(),
    }
}

/// `(id, name)` pairs for the membership picker.
pub fn group_options(groups: &[CustomerGroup]) -> Vec<(String, String)> {
    groups
        .iter()
        .map(|group| (group.id.clone(), group.name.clone()))
        .collect()
}
