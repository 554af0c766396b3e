use super::{repository::MarketingRepository, types::MarketingSuggestions, utils::marketing_products};
use crate::models::Product;
use leptos::*;
use log::debug;

#[derive(Clone, Copy)]
pub struct MarketingViewModel {
    repository: StoredValue<MarketingRepository>,
    pub products: StoredValue<Vec<Product>>,
    pub search: RwSignal<String>,
    pub selected: RwSignal<Option<Product>>,
}

impl MarketingViewModel {
    pub fn new(repository: MarketingRepository) -> Self {
        let products = repository.products();
        Self {
            repository: store_value(repository),
            products: store_value(products),
            search: create_rw_signal(String::new()),
            selected: create_rw_signal(None),
        }
    }

    pub fn filtered(&self) -> Signal<Vec<Product>> {
        let products = self.products;
        let search = self.search;
        Signal::derive(move || {
            let term = search.get();
            products.with_value(|p| marketing_products(p, &term))
        })
    }

    pub fn select(&self, product: Product) {
        debug!("marketing: selected product {}", product.id);
        self.selected.set(Some(product));
    }

    /// Suggestions for the selected product's category, if any exist.
    pub fn suggestions(&self) -> Signal<Option<MarketingSuggestions>> {
        let repository = self.repository;
        let selected = self.selected;
        Signal::derive(move || {
            selected.with(|product| {
                product
                    .as_ref()
                    .and_then(|p| repository.with_value(|r| r.suggestions(&p.category)))
            })
        })
    }
}

pub fn use_marketing_view_model() -> MarketingViewModel {
    MarketingViewModel::new(MarketingRepository::new())
}
