pub mod messages;
pub mod routes;
pub mod tracking;
