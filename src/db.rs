use sqlx::{Connection, PgConnection};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::{Result, RosterError};

const CREATE_STUDENTS: &str = r#"
CREATE TABLE IF NOT EXISTS students (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT UNIQUE NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

/// Open a fresh connection for a single operation.
///
/// There is no pool: every repository call acquires its own connection and
/// releases it before returning. Connection failures are not retried.
pub async fn connect(config: &AppConfig) -> Result<PgConnection> {
    PgConnection::connect_with(&config.connect_options())
        .await
        .map_err(RosterError::Connect)
}

/// Close a connection, logging shutdown failures instead of propagating
/// them.
pub async fn close(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        debug!(error = %e, "error closing connection");
    }
}

/// Idempotently ensure the students table exists. Safe to run on every
/// process start; the caller treats any failure as fatal.
pub async fn init_schema(config: &AppConfig) -> Result<()> {
    let mut conn = connect(config).await?;
    let result = sqlx::query(CREATE_STUDENTS).execute(&mut conn).await;
    close(conn).await;
    result?;
    info!("database initialized");
    Ok(())
}
