//! Database access layer

pub mod bills;
pub mod egg_types;
pub mod eggs;
pub mod order_items;
pub mod orders;
pub mod payments;
pub mod reports;
pub mod roles;
pub mod suppliers;
pub mod users;
pub mod web_visits;
