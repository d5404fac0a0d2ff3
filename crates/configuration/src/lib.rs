use crate::error::ConfigError;
use config::builder::DefaultState;
use config::ConfigBuilder;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DatabaseSettings, MIN_SECRET_LEN, ServerSettings, Settings};

/// Name of the optional configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config";

/// Prefix for environment overrides, e.g. `SCHOOL_REVIEWS__DATABASE__HOST`.
pub const ENV_PREFIX: &str = "SCHOOL_REVIEWS";

/// Loads the application configuration.
///
/// Sources are layered, later ones winning:
/// 1. built-in defaults,
/// 2. the TOML file at `path` (required) or `config.toml` (optional),
/// 3. `SCHOOL_REVIEWS__*` environment variables.
///
/// The result is validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = with_defaults(config::Config::builder())?
        .add_source(file)
        .add_source(environment(None));

    let settings = finish(builder)?;
    tracing::debug!(?settings, "Configuration loaded.");
    Ok(settings)
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000_i64)?
        .set_default("database.host", "localhost")?
        .set_default("database.port", 3306_i64)?
        .set_default("database.name", "school_reviews")?
        .set_default("database.user", "root")?
        .set_default("database.password", "")?
        .set_default("database.charset", "utf8mb4")?
        .set_default("database.collation", "utf8mb4_unicode_ci")?;
    Ok(builder)
}

/// `SCHOOL_REVIEWS__*` variables, read from `vars` when given instead of the
/// process environment.
fn environment(vars: Option<config::Map<String, String>>) -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .source(vars)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Settings, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.build()?.try_deserialize::<Settings>()?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        let builder = with_defaults(config::Config::builder())?
            .add_source(File::from_str(toml, FileFormat::Toml));
        finish(builder)
    }

    #[test]
    fn defaults_fill_everything_but_the_secret() {
        let settings = from_toml(&format!("secret_key = \"{SECRET}\"")).unwrap();
        assert_eq!(settings.server.address(), "0.0.0.0:5000");
        assert_eq!(settings.database.host, "localhost");
        assert_eq!(settings.database.port, 3306);
        assert_eq!(settings.database.name, "school_reviews");
        assert_eq!(settings.database.user, "root");
        assert_eq!(settings.database.password, "");
        assert_eq!(settings.database.charset, "utf8mb4");
        assert_eq!(settings.database.collation, "utf8mb4_unicode_ci");
    }

    #[test]
    fn file_values_override_defaults() {
        let toml = format!(
            r#"
            secret_key = "{SECRET}"

            [server]
            port = 8080

            [database]
            host = "db.internal"
            name = "reviews_test"
            user = "reviewer"
            password = "hunter2"
            "#
        );
        let settings = from_toml(&toml).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.database.host, "db.internal");
        assert_eq!(settings.database.name, "reviews_test");
        assert_eq!(settings.database.user, "reviewer");
        assert_eq!(settings.database.password, "hunter2");
        assert_eq!(settings.database.port, 3306);
    }

    #[test]
    fn environment_overrides_file() {
        let toml = format!(
            "secret_key = \"{SECRET}\"\n[server]\nport = 8080\n[database]\npassword = \"from-file\"\n"
        );
        let env: config::Map<String, String> = [
            ("SCHOOL_REVIEWS__DATABASE__PASSWORD", "from-env"),
            ("SCHOOL_REVIEWS__SERVER__PORT", "9090"),
            ("UNRELATED__SERVER__PORT", "1"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let builder = with_defaults(config::Config::builder())
            .unwrap()
            .add_source(File::from_str(&toml, FileFormat::Toml))
            .add_source(environment(Some(env)));
        let settings = finish(builder).unwrap();

        assert_eq!(settings.database.password, "from-env");
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.database.host, "localhost");
    }

    #[test]
    fn missing_secret_is_a_load_error() {
        assert!(matches!(from_toml(""), Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn short_secret_is_rejected() {
        let err = from_toml("secret_key = \"too-short\"").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("secret_key"));
    }

    #[test]
    fn debug_output_redacts_credentials() {
        let toml = format!(
            "secret_key = \"{SECRET}\"\n[database]\npassword = \"hunter2\"\n"
        );
        let rendered = format!("{:?}", from_toml(&toml).unwrap());
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains(SECRET));
        assert!(rendered.contains("<redacted>"));
    }
}
