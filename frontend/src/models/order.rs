use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendente",
            OrderStatus::Processing => "Em Processamento",
            OrderStatus::Shipped => "Enviado",
            OrderStatus::Delivered => "Entregue",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "bg-yellow-100 text-yellow-800",
            OrderStatus::Processing => "bg-blue-100 text-blue-800",
            OrderStatus::Shipped => "bg-purple-100 text-purple-800",
            OrderStatus::Delivered => "bg-green-100 text-green-800",
        }
    }
}

impl OrderStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "fas fa-clock",
            OrderStatus::Processing => "fas fa-box",
            OrderStatus::Shipped => "fas fa-truck",
            OrderStatus::Delivered => "fas fa-check-circle",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or(())
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    pub customer: String,
    pub items: Vec<OrderItem>,
    /// ISO date-time.
    pub created_at: String,
    pub total: f64,
}

impl Order {
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        needle.is_empty()
            || self.id.to_lowercase().contains(&needle)
            || self.customer.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_from_its_wire_name() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert!("cancelled".parse::<OrderStatus>().is_err());
        assert_eq!(OrderStatus::Shipped.label(), "Enviado");
    }

    #[test]
    fn search_matches_id_or_customer() {
        let order = Order {
            id: "PED-001".into(),
            customer: "Maria Santos".into(),
            items: vec![
                OrderItem {
                    product_id: "1".into(),
                    quantity: 2,
                },
                OrderItem {
                    product_id: "2".into(),
                    quantity: 1,
                },
            ],
            ..Order::default()
        };
        assert!(order.matches("ped-001"));
        assert!(order.matches("SANTOS"));
        assert!(!order.matches("joão"));
        assert_eq!(order.item_count(), 3);
    }
}
