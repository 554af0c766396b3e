use super::repository::InventoryRepository;
use crate::crud::CrudStore;
use crate::models::Product;
use leptos::*;

#[derive(Clone, Copy)]
pub struct InventoryViewModel {
    pub products: CrudStore<Product>,
}

impl InventoryViewModel {
    pub fn new(repository: &InventoryRepository) -> Self {
        Self {
            products: CrudStore::new(repository.products()),
        }
    }

    pub fn low_stock_count(&self) -> Signal<usize> {
        let items = self.products.items();
        Signal::derive(move || items.with(|p| p.iter().filter(|p| p.is_low_stock()).count()))
    }
}

pub fn use_inventory_view_model() -> InventoryViewModel {
    InventoryViewModel::new(&InventoryRepository::new())
}
