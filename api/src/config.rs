use std::env;

use thiserror::Error;

/// Fallback salt for local development. Hashes written with it do not match
/// hashes written under any real deployment salt, so it is refused when
/// `APP_ENV=production`.
const DEV_PASSWORD_SALT: &str = "dev-salt-not-for-production";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },

    #[error("{0} must be set in production")]
    Missing(&'static str),
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Static salt prepended to every password before hashing.
    /// Must match the value used when existing hashes were written.
    pub password_salt: String,
    /// Sustained requests per second allowed per peer IP
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => format!(
                "postgres://{}:{}@{}:{}/{}",
                env::var("DB_USER").unwrap_or_else(|_| "salam".to_string()),
                env::var("DB_PASSWORD").unwrap_or_else(|_| "salam".to_string()),
                env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
                parse_var::<u16>("DB_PORT", 5432)?,
                env::var("DB_NAME").unwrap_or_else(|_| "salam".to_string()),
            ),
        };

        let password_salt = resolve_password_salt(
            env::var("APP_ENV").ok().as_deref(),
            env::var("PASSWORD_SALT").ok(),
        )?;

        Ok(Self {
            database_url,
            port: parse_var("PORT", 8080)?,
            password_salt,
            rate_limit_per_second: parse_var("RATE_LIMIT_PER_SECOND", 10)?,
            rate_limit_burst: parse_var("RATE_LIMIT_BURST", 20)?,
        })
    }
}

/// Pick the password salt. A blank value counts as unset.
fn resolve_password_salt(
    app_env: Option<&str>,
    salt: Option<String>,
) -> Result<String, ConfigError> {
    match salt.filter(|s| !s.trim().is_empty()) {
        Some(salt) => Ok(salt),
        None if app_env.is_some_and(|e| e.eq_ignore_ascii_case("production")) => {
            Err(ConfigError::Missing("PASSWORD_SALT"))
        }
        None => {
            tracing::warn!(
                "PASSWORD_SALT not set, using development salt; \
                 hashes will not match those written with a deployment salt"
            );
            Ok(DEV_PASSWORD_SALT.to_string())
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
