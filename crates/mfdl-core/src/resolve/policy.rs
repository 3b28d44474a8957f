use std::time::Duration;

use crate::config::MfdlConfig;

/// Bounds for following pre-download redirects.
#[derive(Debug, Clone, Copy)]
pub struct HopPolicy {
    /// Maximum number of pre-download hops to follow (0 = never hop).
    pub max_hops: u32,
    /// Fixed wait before re-fetching through a pre-download link. MediaFire
    /// redirects parametered downloads after ~1000ms; shorter waits hit its
    /// bot protection and come back without a usable page.
    pub pre_download_delay: Duration,
}

impl Default for HopPolicy {
    fn default() -> Self {
        Self {
            max_hops: 1,
            pre_download_delay: Duration::from_millis(1500),
        }
    }
}

impl HopPolicy {
    pub fn from_config(cfg: &MfdlConfig) -> Self {
        Self {
            max_hops: cfg.max_pre_download_hops,
            pre_download_delay: Duration::from_millis(cfg.pre_download_delay_ms),
        }
    }
}
