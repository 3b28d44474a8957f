//! Share-page fetching.
//!
//! The resolve pipeline only depends on the [`PageFetcher`] trait; the
//! curl-backed [`ProxyFetcher`] is the production implementation and tests
//! substitute scripted fakes.

mod error;
mod proxy;

pub use error::FetchError;
pub use proxy::ProxyFetcher;

/// Fetches the text content of a page for the resolve pipeline.
///
/// Implementations are blocking; call from `spawn_blocking` if used from
/// async code.
pub trait PageFetcher {
    /// Returns the page body, or a uniform [`FetchError`] for transport
    /// errors, non-2xx statuses, and empty bodies alike.
    fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}
