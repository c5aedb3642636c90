pub mod auth;
pub mod backup;
pub mod bill;
pub mod customers;
pub mod measurements;
pub mod orders;
pub mod settings;
