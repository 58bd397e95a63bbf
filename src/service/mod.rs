//! Service layer: validation rules and orchestration between routes and
//! repositories. Validation order is fixed for deterministic errors:
//! field checks, then foreign-key existence, then uniqueness, then the write.

pub mod auth;
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
