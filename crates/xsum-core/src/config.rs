use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::algorithm::HashAlgorithm;
use crate::options::DigestEncoding;

/// Global configuration loaded from `~/.config/xsum/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XsumConfig {
    /// Hash algorithm used when the CLI is not given `--algorithm`.
    pub algorithm: HashAlgorithm,
    /// Optional digest-encoding override (absent = utf8 default).
    #[serde(default)]
    pub encoding: Option<DigestEncoding>,
}

impl Default for XsumConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::Sha256,
            encoding: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("xsum")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<XsumConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = XsumConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: XsumConfig = toml::from_str(&data)?;
    Ok(cfg)
}
