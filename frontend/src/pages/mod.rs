pub mod ai_assistant;
pub mod customers;
pub mod dashboard;
pub mod finance;
pub mod integrations;
pub mod inventory;
pub mod logistics;
pub mod marketing;
pub mod orders;
pub mod reports;
pub mod settings;

pub use ai_assistant::AiAssistantPage;
pub use customers::CustomersPage;
pub use dashboard::DashboardPage;
pub use finance::FinancePage;
pub use integrations::IntegrationsPage;
pub use inventory::InventoryPage;
pub use logistics::LogisticsPage;
pub use marketing::MarketingPage;
pub use orders::OrdersPage;
pub use reports::ReportsPage;
pub use settings::SettingsPage;
