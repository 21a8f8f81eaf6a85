use std::str::FromStr;
use common::log;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

use crate::server_config::{DATABASE_URL_ENV, DatabaseConfig};

const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS public.player_score (
        id BIGSERIAL PRIMARY KEY,
        player_name TEXT NOT NULL,
        score NUMERIC NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

pub fn read_database_url() -> Result<String, String> {
    std::env::var(DATABASE_URL_ENV)
        .map_err(|e| format!("{} must be set: {}", DATABASE_URL_ENV, e))
}

/// Builds the pool without opening a connection. Connections are made on first
/// use, so an unreachable database shows up as failed requests, not a failed start.
pub fn create_pool(database_url: &str, config: &DatabaseConfig) -> Result<PgPool, String> {
    let mut options = PgConnectOptions::from_str(database_url)
        .map_err(|e| format!("Invalid {}: {}", DATABASE_URL_ENV, e))?;

    if config.require_tls {
        options = options.ssl_mode(PgSslMode::Require);
    }

    log!(
        "Database pool: host {}, max {} connections, tls required: {}",
        options.get_host(),
        config.max_connections,
        config.require_tls
    );

    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_lazy_with(options))
}

pub async fn create_table_if_missing(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_TABLE_SQL).execute(pool).await?;
    log!("Ensured table public.player_score exists");
    Ok(())
}
