//! Resolve loop: fetch pages and follow pre-download hops until a direct
//! link appears or the policy says stop.

use tracing::{debug, info, warn};

use super::error::ResolveError;
use super::policy::HopPolicy;
use crate::extract::{self, PageLink};
use crate::fetch::PageFetcher;
use crate::share_link;

/// Successful resolution of a share reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    /// Final time-limited direct-download URL. Consume promptly; the host
    /// expires these after a short window.
    pub direct_url: String,
    /// Number of pre-download redirects followed to get here.
    pub hops: u32,
}

/// Resolves a share reference to a direct-download link.
///
/// Validates and normalizes `input`, then runs the fetch/extract cycle,
/// sleeping `policy.pre_download_delay` before each pre-download hop.
/// Blocking (network + sleep); call from `spawn_blocking` in async code.
pub fn resolve_direct_link<F>(
    fetcher: &F,
    input: &str,
    policy: &HopPolicy,
) -> Result<ResolvedLink, ResolveError>
where
    F: PageFetcher + ?Sized,
{
    if !share_link::is_share_link(input) {
        return Err(ResolveError::InvalidInput(input.to_string()));
    }

    let mut url = share_link::normalize(input);
    let mut hops = 0u32;

    loop {
        info!("checking {} for a valid download page", url);
        let page = match fetcher.fetch_page(&url) {
            Ok(page) => page,
            Err(source) => {
                warn!("fetch failed for {}: {}", url, source);
                return Err(ResolveError::Fetch { url, source });
            }
        };
        debug!("fetched {} bytes from {}", page.len(), url);

        match extract::extract_page_link(&page) {
            Some(PageLink::Direct(direct_url)) => {
                info!("found direct download link: {}", direct_url);
                return Ok(ResolvedLink { direct_url, hops });
            }
            Some(PageLink::PreDownload(pre)) => {
                if hops >= policy.max_hops {
                    warn!("pre-download link at {} after {} hop(s), stopping", url, hops);
                    return Err(ResolveError::RedirectLoop { hops });
                }
                hops += 1;
                info!(
                    "found pre-download link {}, waiting {:?} before hop {}",
                    pre, policy.pre_download_delay, hops
                );
                std::thread::sleep(policy.pre_download_delay);
                // Pre-download links may omit the scheme or host prefix.
                url = share_link::normalize(&pre);
            }
            None => {
                warn!("no download link in page at {}", url);
                return Err(ResolveError::NoDownloadLink(url));
            }
        }
    }
}
