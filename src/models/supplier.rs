use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// Input for both create and update.
#[derive(Debug, Deserialize)]
pub struct SupplierInput {
    pub name: String,
    pub address: String,
}
