use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;

/// Minimum length of `secret_key`, in bytes. The cookie signing key is
/// derived from it.
pub const MIN_SECRET_LEN: usize = 32;

/// The root configuration structure for the entire application.
#[derive(Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    /// Secret used to sign flash-message cookies.
    pub secret_key: String,
}

/// Where the HTTP server listens.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Connection parameters for the MySQL/MariaDB server holding the `reviews` table.
#[derive(Clone, Deserialize)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    /// The database (schema) name.
    pub name: String,
    pub user: String,
    pub password: String,
    /// Connection character set, e.g. `utf8mb4`.
    pub charset: String,
    /// Connection collation, e.g. `utf8mb4_unicode_ci`.
    pub collation: String,
}

impl Settings {
    /// Checks constraints that deserialization alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::ValidationError(format!(
                "secret_key must be at least {MIN_SECRET_LEN} bytes long"
            )));
        }
        if self.database.charset.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "database.charset must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl ServerSettings {
    /// `host:port`, ready for `TcpListener::bind`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Credentials never reach the logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("server", &self.server)
            .field("database", &self.database)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("charset", &self.charset)
            .field("collation", &self.collation)
            .finish()
    }
}
