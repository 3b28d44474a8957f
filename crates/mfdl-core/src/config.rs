use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default CORS relay. MediaFire's pages forbid cross-origin reads, so page
/// fetches go through a relay that returns the target body verbatim.
const DEFAULT_CORS_RELAY: &str = "https://corsproxy.io/?";

/// MediaFire redirects parametered downloads after ~1000ms and the redirect
/// target needs roughly another 500ms before it serves a real page.
const DEFAULT_PRE_DOWNLOAD_DELAY_MS: u64 = 1500;

/// Global configuration loaded from `~/.config/mfdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MfdlConfig {
    /// CORS relay base URL; the target URL is appended component-encoded.
    /// An empty string disables the relay and fetches pages directly.
    pub cors_relay: String,
    /// Fixed wait before following a pre-download redirect link.
    pub pre_download_delay_ms: u64,
    /// Maximum number of pre-download hops to follow before giving up.
    pub max_pre_download_hops: u32,
    /// Connect timeout for page fetches, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Whole-request timeout for page fetches, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for MfdlConfig {
    fn default() -> Self {
        Self {
            cors_relay: DEFAULT_CORS_RELAY.to_string(),
            pre_download_delay_ms: DEFAULT_PRE_DOWNLOAD_DELAY_MS,
            max_pre_download_hops: 1,
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Browser-like User-Agent. MediaFire serves a bot-detection page to
/// unknown agents, which contains neither download link.
pub fn browser_ua() -> &'static str {
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mfdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MfdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MfdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MfdlConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = MfdlConfig::default();
        assert_eq!(cfg.cors_relay, "https://corsproxy.io/?");
        assert_eq!(cfg.pre_download_delay_ms, 1500);
        assert_eq!(cfg.max_pre_download_hops, 1);
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.request_timeout_secs, 30);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = MfdlConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: MfdlConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.cors_relay, cfg.cors_relay);
        assert_eq!(parsed.pre_download_delay_ms, cfg.pre_download_delay_ms);
        assert_eq!(parsed.max_pre_download_hops, cfg.max_pre_download_hops);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            cors_relay = ""
            pre_download_delay_ms = 2000
            max_pre_download_hops = 3
        "#;
        let cfg: MfdlConfig = toml::from_str(toml).unwrap();
        assert!(cfg.cors_relay.is_empty());
        assert_eq!(cfg.pre_download_delay_ms, 2000);
        assert_eq!(cfg.max_pre_download_hops, 3);
        // Timeouts fall back to built-in defaults when the file omits them.
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.request_timeout_secs, 30);
    }
}
