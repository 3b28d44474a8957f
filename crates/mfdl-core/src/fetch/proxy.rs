//! Curl-backed page fetcher that routes through a CORS relay.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::time::Duration;

use super::{FetchError, PageFetcher};
use crate::config::{self, MfdlConfig};

/// `encodeURIComponent` escape set: everything but `A-Za-z0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Fetches pages with libcurl, optionally through a CORS relay that returns
/// the target page body verbatim.
#[derive(Debug, Clone)]
pub struct ProxyFetcher {
    relay_base: String,
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl ProxyFetcher {
    pub fn new(relay_base: impl Into<String>) -> Self {
        Self {
            relay_base: relay_base.into(),
            connect_timeout: Duration::from_secs(15),
            request_timeout: Duration::from_secs(30),
        }
    }

    pub fn from_config(cfg: &MfdlConfig) -> Self {
        Self {
            relay_base: cfg.cors_relay.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
        }
    }

    /// The URL actually requested: relay base plus the component-encoded
    /// target, or the target itself when no relay is configured.
    pub fn request_url(&self, target: &str) -> String {
        if self.relay_base.is_empty() {
            return target.to_string();
        }
        format!(
            "{}{}",
            self.relay_base,
            utf8_percent_encode(target, COMPONENT)
        )
    }
}

impl PageFetcher for ProxyFetcher {
    fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let request_url = self.request_url(url);
        tracing::debug!("GET {}", request_url);

        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&request_url)?;
        easy.useragent(config::browser_ua())?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.request_timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_component_encodes_target() {
        let fetcher = ProxyFetcher::new("https://corsproxy.io/?");
        assert_eq!(
            fetcher.request_url("https://mediafire.com/?abc123"),
            "https://corsproxy.io/?https%3A%2F%2Fmediafire.com%2F%3Fabc123"
        );
    }

    #[test]
    fn request_url_encodes_dkey_query() {
        let fetcher = ProxyFetcher::new("https://relay.example/?");
        assert_eq!(
            fetcher.request_url("https://mediafire.com/file/a/b.zip?dkey=x"),
            "https://relay.example/?https%3A%2F%2Fmediafire.com%2Ffile%2Fa%2Fb.zip%3Fdkey%3Dx"
        );
    }

    #[test]
    fn empty_relay_means_direct_fetch() {
        let fetcher = ProxyFetcher::new("");
        assert_eq!(
            fetcher.request_url("https://mediafire.com/?abc123"),
            "https://mediafire.com/?abc123"
        );
    }
}
