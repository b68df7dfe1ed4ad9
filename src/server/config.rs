use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_TTL_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Push gateway endpoint and server key. Push is disabled unless both are set.
    pub push_api_url: Option<String>,
    pub push_server_key: Option<String>,

    /// Days of inactivity before a session expires.
    pub session_ttl_days: i64,

    /// Login ids granted the admin role when they log in.
    pub admin_login_ids: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            push_api_url: optional_var("PUSH_API_URL"),
            push_server_key: optional_var("PUSH_SERVER_KEY"),
            session_ttl_days: parse_var("SESSION_TTL_DAYS", DEFAULT_SESSION_TTL_DAYS)?,
            admin_login_ids: parse_list(optional_var("ADMIN_LOGIN_IDS")),
        })
    }
}

/// Reads a variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parse_var(name: &str, default: i64) -> Result<i64, ConfigError> {
    match optional_var(name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

/// Splits a comma separated list, dropping blank entries.
fn parse_list(value: Option<String>) -> Vec<String> {
    value
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
