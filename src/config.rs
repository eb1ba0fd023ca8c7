use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Retry and timeout budgets for remote acquisition, loaded once at startup
/// from `~/.config/filestage/config.toml` and threaded down explicitly.
///
/// Any field missing from the file takes its default below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of retry attempts after the first failure.
    pub max_retries: u32,
    /// Base multiplier in milliseconds for exponential backoff.
    pub backoff_factor_ms: u64,
    /// Upper clamp on a computed backoff delay.
    pub backoff_max_ms: u64,
    /// TCP connect budget.
    pub connect_timeout_ms: u64,
    /// Receive-stall budget (no bytes arriving for this long aborts).
    pub recv_timeout_ms: u64,
    /// Whole-request budget.
    pub request_timeout_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_factor_ms: 1000,
            backoff_max_ms: 30_000,
            connect_timeout_ms: 10_000,
            recv_timeout_ms: 5_000,
            request_timeout_ms: 10_000,
        }
    }
}

impl RetryConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn recv_timeout(&self) -> Duration {
        Duration::from_millis(self.recv_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("filestage")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RetryConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RetryConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RetryConfig = toml::from_str(&data)?;
    Ok(cfg)
}
