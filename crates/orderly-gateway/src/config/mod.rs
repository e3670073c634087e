//! Service config loader (strict parsing).

pub mod schema;

use std::{fs, io::ErrorKind};

use orderly_core::error::{OrderlyError, Result};

pub use schema::{Config, ServerSection};

/// Env var overriding the config file path.
pub const CONFIG_ENV: &str = "ORDERLY_CONFIG";
pub const DEFAULT_PATH: &str = "orderly.yaml";

/// Load from `$ORDERLY_CONFIG`, else `orderly.yaml`. A missing default file
/// yields the built-in defaults; a missing explicit file is an error.
pub fn load() -> Result<Config> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => load_from_file(&path),
        Err(_) => match fs::read_to_string(DEFAULT_PATH) {
            Ok(s) => load_from_str(&s),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = DEFAULT_PATH, "config file not found, using defaults");
                Ok(Config::default())
            }
            Err(e) => Err(OrderlyError::Internal(format!("read config failed: {e}"))),
        },
    }
}

pub fn load_from_file(path: &str) -> Result<Config> {
    let s = fs::read_to_string(path)
        .map_err(|e| OrderlyError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<Config> {
    let cfg: Config = serde_yaml::from_str(s)
        .map_err(|e| OrderlyError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
