use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Egg {
    pub id: i64,
    pub available_quantity: i32,
    pub entry_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub entry_price: f64,
    pub sell_price: f64,
    pub color: String,
    pub type_egg_id: i64,
    pub supplier_id: i64,
}

/// Input for both create and update; every column except `id` is mutable.
#[derive(Debug, Deserialize)]
pub struct EggInput {
    pub available_quantity: i32,
    pub entry_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub entry_price: f64,
    pub sell_price: f64,
    pub color: String,
    pub type_egg_id: i64,
    pub supplier_id: i64,
}
