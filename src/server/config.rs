use crate::server::error::config::ConfigError;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SWAPI_URL: &str = "https://swapi.dev/api";

pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub redis_url: String,
    pub swapi_url: String,
    /// Prefix applied to every cache key, lets several deployments share one Redis
    pub cache_namespace: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };
        let optional = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let port = match optional("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            database_url: required("DATABASE_URL")?,
            redis_url: required("REDIS_URL")?,
            swapi_url: optional("SWAPI_URL").unwrap_or_else(|| DEFAULT_SWAPI_URL.to_string()),
            cache_namespace: optional("CACHE_NAMESPACE"),
        })
    }
}
