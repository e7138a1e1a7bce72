use crate::server::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub storage_root: String,
    pub storage_public_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            storage_root: require("STORAGE_ROOT")?,
            storage_public_url: require("STORAGE_PUBLIC_URL")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
