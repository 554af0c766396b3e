use super::{repository::OrdersRepository, utils::filter_orders};
use crate::models::{Order, OrderStatus};
use leptos::*;

/// Orders are read-only; only the filters change.
#[derive(Clone, Copy)]
pub struct OrdersViewModel {
    pub orders: StoredValue<Vec<Order>>,
    pub search: RwSignal<String>,
    pub status: RwSignal<Option<OrderStatus>>,
}

impl OrdersViewModel {
    pub fn new(repository: &OrdersRepository) -> Self {
        Self {
            orders: store_value(repository.orders()),
            search: create_rw_signal(String::new()),
            status: create_rw_signal(None),
        }
    }

    pub fn filtered(&self) -> Signal<Vec<Order>> {
        let Self {
            orders,
            search,
            status,
        } = *self;
        Signal::derive(move || {
            let term = search.get();
            let status = status.get();
            orders.with_value(|orders| filter_orders(orders, &term, status))
        })
    }
}

pub fn use_orders_view_model() -> OrdersViewModel {
    OrdersViewModel::new(&OrdersRepository::new())
}
