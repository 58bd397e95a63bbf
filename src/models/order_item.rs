use serde::{Deserialize, Serialize};

/// Order line item: the order↔egg join with per-line pricing.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OrderItem {
    pub id: i64,
    pub quantity: i32,
    pub unit_price: f64,
    pub sub_total: f64,
    pub egg_id: i64,
    pub order_id: i64,
}

/// Input for both create and update.
#[derive(Debug, Deserialize)]
pub struct OrderItemInput {
    pub quantity: i32,
    pub unit_price: f64,
    pub sub_total: f64,
    pub egg_id: i64,
    pub order_id: i64,
}
