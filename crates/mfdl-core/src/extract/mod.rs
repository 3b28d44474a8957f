//! Download-link extraction from a fetched share page.
//!
//! A share page embeds at most two interesting quoted substrings: a
//! pre-download redirect link carrying a `dkey` token, and/or a final
//! time-limited link on a numbered `download<N>.mediafire.com` subdomain.
//! The pre-download link always wins when both are present: it is an
//! earlier-stage redirect that must be resolved before any direct link on
//! the same page can be trusted as final.

mod patterns;

/// A link found in page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLink {
    /// Intermediate redirect link with a `dkey` token; needs a second fetch.
    PreDownload(String),
    /// Final time-limited direct-download link. Terminal.
    Direct(String),
}

/// Scans `page` for an embedded download link.
///
/// Checks the pre-download pattern first and returns it immediately if it
/// matches; only otherwise consults the dynamic direct-download pattern.
/// The matched link text is returned exactly as it appears in the page.
pub fn extract_page_link(page: &str) -> Option<PageLink> {
    if let Some(caps) = patterns::pre_download_re().captures(page) {
        return Some(PageLink::PreDownload(caps[1].to_string()));
    }

    if let Some(caps) = patterns::direct_download_re().captures(page) {
        return Some(PageLink::Direct(caps[1].to_string()));
    }

    None
}
