use super::{
    repository::{Delivery, LogisticsRepository},
    utils::LogisticsTab,
};
use crate::crud::CrudStore;
use crate::models::Truck;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LogisticsViewModel {
    pub trucks: CrudStore<Truck>,
    pub deliveries: StoredValue<Vec<Delivery>>,
    pub active_tab: RwSignal<LogisticsTab>,
}

impl LogisticsViewModel {
    pub fn new(repository: &LogisticsRepository) -> Self {
        Self {
            trucks: CrudStore::new(repository.trucks()),
            deliveries: store_value(repository.deliveries()),
            active_tab: create_rw_signal(LogisticsTab::default()),
        }
    }

    /// The add button lives on the fleet tab; opening it from elsewhere
    /// switches there first.
    pub fn open_create(&self) {
        self.active_tab.set(LogisticsTab::Trucks);
        self.trucks.open_create();
    }
}

pub fn use_logistics_view_model() -> LogisticsViewModel {
    LogisticsViewModel::new(&LogisticsRepository::new())
}
