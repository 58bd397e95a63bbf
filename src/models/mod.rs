//! Domain models: row structs, create inputs, and update inputs

pub mod bill;
pub mod egg;
pub mod egg_type;
pub mod order;
pub mod order_item;
pub mod payment;
pub mod report;
pub mod role;
pub mod supplier;
pub mod user;
pub mod web_visit;
