//! Server configuration sourced from `GARDEN_*` environment variables.

/// Runtime configuration.
///
/// Every field has a default suitable for local development; nothing here
/// is required to boot the server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
    /// Path of the SQLite database file (created on first run).
    pub db_path: String,
    /// Directory holding the built garden frontend.
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            listen_addr: env_or("GARDEN_LISTEN_ADDR", "127.0.0.1:8420"),
            db_path: env_or("GARDEN_DB_PATH", "data/garden.db"),
            static_dir: env_or("GARDEN_STATIC_DIR", "dist"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
