use crate::models::{Order, OrderStatus};

/// Select value meaning "no status filter".
pub const ALL_STATUSES: &str = "all";

pub fn status_filter_options() -> Vec<(&'static str, &'static str)> {
    std::iter::once((ALL_STATUSES, "Todos os status"))
        .chain(OrderStatus::ALL.into_iter().map(|s| (s.as_str(), s.label())))
        .collect()
}

/// Unknown values clear the filter.
pub fn parse_status_filter(value: &str) -> Option<OrderStatus> {
    value.parse().ok()
}

pub fn filter_orders(orders: &[Order], term: &str, status: Option<OrderStatus>) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| status.map_or(true, |s| order.status == s))
        .filter(|order| order.matches(term))
        .cloned()
        .collect()
}
