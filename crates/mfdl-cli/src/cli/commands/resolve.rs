//! `mfdl resolve <share-link>` – print the direct-download URL.

use anyhow::Result;
use mfdl_core::config::MfdlConfig;
use mfdl_core::fetch::ProxyFetcher;
use mfdl_core::resolve::{self, HopPolicy, ResolvedLink};

pub async fn run_resolve(cfg: &MfdlConfig, share_link: &str) -> Result<()> {
    let link = resolve_blocking(cfg, share_link).await?;
    println!("{}", link.direct_url);
    Ok(())
}

/// Runs the blocking resolve pipeline on a worker thread and maps its
/// errors for the user: fetch and extraction failures get the same
/// "no valid download page" message, details stay in the logs.
pub(super) async fn resolve_blocking(cfg: &MfdlConfig, share_link: &str) -> Result<ResolvedLink> {
    let fetcher = ProxyFetcher::from_config(cfg);
    let policy = HopPolicy::from_config(cfg);
    let input = share_link.to_string();

    let result =
        tokio::task::spawn_blocking(move || resolve::resolve_direct_link(&fetcher, &input, &policy))
            .await?;

    use mfdl_core::resolve::ResolveError;
    match result {
        Ok(link) => Ok(link),
        Err(e @ ResolveError::InvalidInput(_)) => Err(e.into()),
        Err(e @ ResolveError::RedirectLoop { .. }) => Err(e.into()),
        Err(e) => {
            tracing::error!("resolve failed: {:#}", anyhow::Error::from(e));
            anyhow::bail!("no valid download page for {:?}", share_link)
        }
    }
}
