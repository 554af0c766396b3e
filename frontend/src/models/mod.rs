mod customer;
mod dashboard;
mod finance;
mod order;
mod product;
mod truck;

pub use customer::{Address, AddressField, Customer, CustomerField, CustomerGroup, CustomerGroupField};
pub use dashboard::DashboardStats;
pub use finance::{
    CashSummary, DocumentStatus, FiscalDocument, Transaction, TransactionField, TransactionKind,
};
pub use order::{Order, OrderItem, OrderStatus};
pub use product::{Product, ProductField};
pub use truck::{
    DocumentField, Driver, DriverField, FuelType, Truck, TruckDocuments, TruckField, TruckStatus,
};
