use {crate::domain::funding::BufferMultiplier, std::env, thiserror::Error};

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub stripe_webhook_secret: String,
    pub buffer_multiplier: BufferMultiplier,
    pub listen_addr: String,
    pub max_connections: u32,
}

impl Config {
    /// Read from the process environment. Call `dotenvy::dotenv()` first to
    /// pick up a local `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let buffer_multiplier = required("BUFFER_MULTIPLIER_FOR_DELIVERY")?
            .parse::<BufferMultiplier>()
            .map_err(|e| ConfigError::Invalid {
                key: "BUFFER_MULTIPLIER_FOR_DELIVERY",
                reason: e.to_string(),
            })?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            stripe_webhook_secret: required("STRIPE_WEBHOOK_SECRET")?,
            buffer_multiplier,
            listen_addr: lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            max_connections,
        })
    }
}
