use crate::models::Product;

/// Seed data for the inventory panel.
#[derive(Clone, Default)]
pub struct InventoryRepository;

impl InventoryRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn products(&self) -> Vec<Product> {
        vec![
            Product {
                id: "1".into(),
                name: "Smartphone Galaxy S23".into(),
                sku: "SMG-S23-256-BLK".into(),
                quantity: 45,
                min_stock: 10,
                category: "Eletrônicos".into(),
                last_updated: "2024-03-15".into(),
                marketing_enabled: true,
                product_type: "Smartphone Premium".into(),
                target_audience: vec!["Jovens Adultos".into(), "Profissionais".into()],
            },
            Product {
                id: "2".into(),
                name: "Notebook Dell XPS".into(),
                sku: "DELL-XPS-15-SLV".into(),
                quantity: 8,
                min_stock: 5,
                category: "Computadores".into(),
                last_updated: "2024-03-14".into(),
                marketing_enabled: true,
                product_type: "Notebook Premium".into(),
                target_audience: vec!["Profissionais".into(), "Criativos".into()],
            },
            Product {
                id: "3".into(),
                name: "Mouse Logitech MX Master".into(),
                sku: "LOG-MXM-3S-GRF".into(),
                quantity: 3,
                min_stock: 10,
                category: "Periféricos".into(),
                last_updated: "2024-03-12".into(),
                ..Product::default()
            },
        ]
    }
}
