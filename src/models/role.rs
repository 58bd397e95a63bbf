use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

/// Input for both create and update; `name` is the only mutable field.
#[derive(Debug, Deserialize)]
pub struct RoleInput {
    pub name: String,
}
