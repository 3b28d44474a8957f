//! Terminal errors of the resolve pipeline.

use thiserror::Error;

use crate::fetch::FetchError;

/// Why a resolve attempt ended without a direct link.
///
/// `Fetch` and `NoDownloadLink` are shown to the user with the same
/// "no valid download page" message; the distinction is for logs.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Input matched none of the share-link shapes; nothing was fetched.
    #[error("not a recognized MediaFire share link: {0:?}")]
    InvalidInput(String),

    /// Page fetch failed (transport error, bad status, or empty body).
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// The page was fetched but contained neither link pattern.
    #[error("no download link found at {0}")]
    NoDownloadLink(String),

    /// Every allowed hop led to yet another pre-download redirect.
    #[error("pre-download redirect loop: gave up after {hops} hop(s)")]
    RedirectLoop { hops: u32 },
}
