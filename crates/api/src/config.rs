use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataBackend {
    Postgres,
    Memory,
}

impl FromStr for DataBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "postgres" => Ok(DataBackend::Postgres),
            "memory" => Ok(DataBackend::Memory),
            other => Err(anyhow!("unknown DATA_BACKEND `{other}` (expected postgres or memory)")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GraphqlConfig {
    pub introspection: bool,
    pub depth_limit: usize,
    pub complexity_limit: usize,
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        Self {
            introspection: false,
            depth_limit: 15,
            complexity_limit: 200,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub backend: DataBackend,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub skip_migrations: bool,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub graphql: GraphqlConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let backend: DataBackend = lookup("DATA_BACKEND")
            .unwrap_or_else(|| "postgres".to_string())
            .parse()?;

        let database_url = lookup("DATABASE_URL");
        if backend == DataBackend::Postgres && database_url.is_none() {
            return Err(anyhow!("DATABASE_URL must be set when DATA_BACKEND=postgres"));
        }

        let defaults = GraphqlConfig::default();

        Ok(Self {
            backend,
            database_url,
            database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 30)?,
            skip_migrations: lookup("SKIP_MIGRATIONS")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
            port: parse_or(&lookup, "PORT", 8080)?,
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .unwrap_or_else(|| "http://localhost:3000,http://localhost:3001".to_string())
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            request_timeout_secs: parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?,
            graphql: GraphqlConfig {
                introspection: lookup("GQL_INTROSPECTION")
                    .map(|v| v == "true")
                    .unwrap_or(defaults.introspection),
                depth_limit: parse_or(&lookup, "GQL_DEPTH_LIMIT", defaults.depth_limit)?,
                complexity_limit: parse_or(
                    &lookup,
                    "GQL_COMPLEXITY_LIMIT",
                    defaults.complexity_limit,
                )?,
            },
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: `{raw}`")),
        None => Ok(default),
    }
}
