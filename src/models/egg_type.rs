use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EggType {
    pub id: i64,
    pub name: String,
}

/// Input for both create and update.
#[derive(Debug, Deserialize)]
pub struct EggTypeInput {
    pub name: String,
}
