use crate::models::{Order, OrderItem, OrderStatus};

/// Seed data for the orders panel.
#[derive(Clone, Default)]
pub struct OrdersRepository;

impl OrdersRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn orders(&self) -> Vec<Order> {
        [
            ("1", OrderStatus::Pending, "João Silva", "1", 2, "2024-03-15T10:30:00", 2499.98),
            ("2", OrderStatus::Processing, "Maria Santos", "2", 1, "2024-03-14T15:45:00", 8999.99),
            ("3", OrderStatus::Shipped, "Pedro Oliveira", "3", 1, "2024-03-13T09:15:00", 4599.99),
        ]
        .into_iter()
        .map(|(id, status, customer, product_id, quantity, created_at, total)| Order {
            id: id.into(),
            status,
            customer: customer.into(),
            items: vec![OrderItem {
                product_id: product_id.into(),
                quantity,
            }],
            created_at: created_at.into(),
            total,
        })
        .collect()
    }
}
