use crate::models::DashboardStats;
use crate::utils::format::{format_brl, format_number};

/// Title, formatted value, icon.
pub type StatTile = (&'static str, String, &'static str);

pub fn stat_tiles(stats: &DashboardStats) -> Vec<StatTile> {
    vec![
        ("Total Produtos", format_number(f64::from(stats.total_products)), "fas fa-box"),
        ("Estoque Baixo", format_number(f64::from(stats.low_stock_items)), "fas fa-exclamation-triangle"),
        ("Pedidos Pendentes", format_number(f64::from(stats.pending_orders)), "fas fa-shopping-cart"),
        ("Receita Mensal", format_brl(stats.monthly_revenue), "fas fa-chart-line"),
    ]
}
