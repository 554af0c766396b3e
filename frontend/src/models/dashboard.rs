#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    pub total_products: u32,
    pub low_stock_items: u32,
    pub pending_orders: u32,
    pub monthly_revenue: f64,
}
