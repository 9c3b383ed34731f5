use crate::http::HttpOptions;
use crate::manifest::DEFAULT_CATALOG_URL;
use crate::skip::SkipRule;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Network settings (optional `[http]` section in config.toml).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Seconds allowed for establishing a connection (None = built-in default).
    pub connect_timeout_secs: Option<u64>,
    /// Seconds a transfer may sit below 1 byte/s before it is aborted.
    pub stall_timeout_secs: Option<u64>,
    /// Overrides the `gfget/<version>` User-Agent.
    pub user_agent: Option<String>,
}

impl HttpConfig {
    pub fn to_options(&self) -> HttpOptions {
        let mut opts = HttpOptions::default();
        if let Some(s) = self.connect_timeout_secs {
            opts.connect_timeout = Some(Duration::from_secs(s));
        }
        if let Some(s) = self.stall_timeout_secs {
            opts.stall_timeout = Some(Duration::from_secs(s));
        }
        if let Some(ua) = &self.user_agent {
            opts.user_agent = ua.clone();
        }
        opts
    }
}

/// Settings loaded from `~/.config/gfget/config.toml`. Every key is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GfgetConfig {
    /// Manifest endpoint; the family is appended as `?family=<name>`.
    pub catalog_url: String,
    /// Filename substrings excluded from download.
    pub skip: SkipRule,
    pub http: HttpConfig,
}

impl Default for GfgetConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            skip: SkipRule::static_variants(),
            http: HttpConfig::default(),
        }
    }
}

const CONFIG_FILE: &str = "config.toml";

/// Existing `gfget/config.toml` under `$XDG_CONFIG_HOME` (or `$XDG_CONFIG_DIRS`),
/// if any. Never creates directories.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gfget")?;
    Ok(xdg_dirs.find_config_file(CONFIG_FILE))
}

/// Load configuration from the XDG config dir; defaults when the file is absent.
/// Nothing is written to disk.
pub fn load() -> Result<GfgetConfig> {
    match config_path()? {
        Some(path) => load_from(&path),
        None => Ok(GfgetConfig::default()),
    }
}

pub fn load_from(path: &Path) -> Result<GfgetConfig> {
    if !path.exists() {
        return Ok(GfgetConfig::default());
    }
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GfgetConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
