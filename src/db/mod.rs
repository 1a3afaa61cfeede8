use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::time::Duration;

const MAX_CONNECTIONS: u32 = 20;
const MIN_CONNECTIONS: u32 = 2;

/// Establish a connection pool to the catalog database.
///
/// `SQLite` URLs get a single connection so bulk imports never hit
/// `database is locked` against concurrent writers.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let (max, min) = if database_url.starts_with("sqlite:") {
        (1, 1)
    } else {
        (MAX_CONNECTIONS, MIN_CONNECTIONS)
    };

    let mut opts = ConnectOptions::new(database_url);
    opts.max_connections(max)
        .min_connections(min)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Database::connect(opts).await?;
    tracing::debug!(backend = ?db.get_database_backend(), max_connections = max, "Connection pool ready");
    Ok(db)
}
