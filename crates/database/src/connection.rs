use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};

/// Builds the connect options for the configured server, including the
/// character set and collation the `reviews` table expects.
pub fn connect_options(settings: &DatabaseSettings) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .password(&settings.password)
        .database(&settings.name)
        .charset(&settings.charset)
        .collation(&settings.collation)
}

/// A handle to the storage engine.
///
/// It holds only connection parameters. Each operation opens a fresh
/// connection through `connect` and releases it before returning.
#[derive(Clone)]
pub struct Database {
    options: MySqlConnectOptions,
}

impl Database {
    pub fn new(settings: &DatabaseSettings) -> Self {
        Self::from_options(connect_options(settings))
    }

    pub fn from_options(options: MySqlConnectOptions) -> Self {
        Self { options }
    }

    /// Opens a single connection.
    ///
    /// An unreachable server or rejected credentials are logged and returned
    /// as `DbError::Connection`.
    pub async fn connect(&self) -> Result<MySqlConnection, DbError> {
        self.options.connect().await.map_err(|e| {
            tracing::error!(error = %e, "Database connection error.");
            DbError::Connection(e)
        })
    }
}

/// Closes a connection, logging (but otherwise ignoring) a failed close.
pub(crate) async fn release(conn: MySqlConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Failed to close database connection.");
    }
}

/// Opens and closes one connection to confirm the server is reachable.
pub async fn check_connection(db: &Database) -> Result<(), DbError> {
    let conn = db.connect().await?;
    release(conn).await;
    tracing::info!("Database connection successful.");
    Ok(())
}

/// Applies the embedded migrations in `./migrations` so the `reviews` table exists.
pub async fn run_migrations(db: &Database) -> Result<(), DbError> {
    let mut conn = db.connect().await?;
    let result = sqlx::migrate!("./migrations").run(&mut conn).await;
    release(conn).await;
    result?;
    tracing::info!("Database migrations applied.");
    Ok(())
}
