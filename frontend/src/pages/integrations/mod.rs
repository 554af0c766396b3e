pub mod components;
pub mod panel;
pub mod repository;
pub mod types;
pub mod utils;

pub use panel::IntegrationsPage;
