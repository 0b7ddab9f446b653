use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub handoff: HandoffConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration_seconds: u64,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HandoffBackend {
    #[default]
    Memory,
    Redis,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HandoffConfig {
    #[serde(default)]
    pub backend: HandoffBackend,
    pub redis_url: Option<String>,
    /// Recompute nights/total when a stored summary is read and warn on drift
    #[serde(default)]
    pub verify_on_read: bool,
    /// Lifetime of a stored key after its last write
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
    /// Cap on keys held by the memory backend
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            backend: HandoffBackend::default(),
            redis_url: None,
            verify_on_read: false,
            ttl_seconds: default_ttl_seconds(),
            max_entries: default_max_entries(),
        }
    }
}

fn default_ttl_seconds() -> u64 {
    crate::memory_repo::DEFAULT_TTL.as_secs()
}

fn default_max_entries() -> usize {
    crate::memory_repo::DEFAULT_MAX_ENTRIES
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON array of units; the built-in Kwathu table is used when unset
    pub path: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment and local overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `KWATHU_SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("KWATHU").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
