//! Server configuration read from the environment

use anyhow::{Context, bail};
use std::str::FromStr;

const DEFAULT_HTTP_PORT: u16 = 8080;
const DEFAULT_PG_POOL_MAX: u32 = 5;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000";

#[derive(Clone)]
pub struct ServerConfig {
    pub database_url: String,
    /// Optional in debug builds, which then sign with a random secret
    pub jwt_secret: Option<String>,
    pub http_port: u16,
    pub pg_pool_max: u32,
    pub log_level: String,
    pub frontend_origins: Vec<String>,
    pub enforce_lot_window: bool,
}

impl ServerConfig {
    /// Read the process environment (call after `dotenvy::dotenv()`)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("{key} must be set in environment"))
        };

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: lookup("JWT_SECRET").filter(|v| !v.trim().is_empty()),
            http_port: parse_or(&lookup, "HTTP_PORT", DEFAULT_HTTP_PORT)?,
            pg_pool_max: parse_or(&lookup, "PG_POOL_MAX", DEFAULT_PG_POOL_MAX)?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            frontend_origins,
            enforce_lot_window: parse_bool(&lookup, "ENFORCE_LOT_WINDOW")?,
        })
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("http_port", &self.http_port)
            .field("pg_pool_max", &self.pg_pool_max)
            .field("log_level", &self.log_level)
            .field("frontend_origins", &self.frontend_origins)
            .field("enforce_lot_window", &self.enforce_lot_window)
            .finish()
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}

fn parse_bool<F>(lookup: &F, key: &str) -> anyhow::Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("{key} has an invalid value: {raw:?}"),
    }
}
