use crate::models::DashboardStats;

#[derive(Clone, Default)]
pub struct DashboardRepository;

impl DashboardRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total_products: 1234,
            low_stock_items: 15,
            pending_orders: 23,
            monthly_revenue: 45678.0,
        }
    }
}
