//! Application state for coop-server

use sqlx::PgPool;

use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// JWT signing secret
    pub jwt_secret: String,
    /// Access-token lifetime in minutes
    pub token_ttl_minutes: i64,
}

impl AppState {
    /// Connect to the database, run migrations, and build the state.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self {
            pool,
            jwt_secret: config.jwt_secret.clone(),
            token_ttl_minutes: config.token_ttl_minutes,
        })
    }

    /// Build state over an existing pool without touching the database.
    /// Used by router-level tests with a lazily-connected pool.
    pub fn with_pool(pool: PgPool, jwt_secret: &str, token_ttl_minutes: i64) -> Self {
        Self {
            pool,
            jwt_secret: jwt_secret.to_string(),
            token_ttl_minutes,
        }
    }
}
