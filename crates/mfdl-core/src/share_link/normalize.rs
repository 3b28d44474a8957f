//! Rewrites a raw share reference into an absolute `https://` page URL.

use super::shape::is_bare_identifier;

/// Normalizes `input` into a fetchable page URL. Applied in order:
///
/// 1. a leading `http://` becomes `https://`
/// 2. a bare identifier expands to `https://mediafire.com/?<id>`
/// 3. a remaining scheme-less string gets `https:` (if `//`-prefixed)
///    or `https://` prepended
///
/// Never fails; whether the result is a recognized share link is decided
/// separately by [`super::is_share_link`].
pub fn normalize(input: &str) -> String {
    let url = match input.strip_prefix("http://") {
        Some(rest) => format!("https://{rest}"),
        None => input.to_string(),
    };

    if is_bare_identifier(&url) {
        return format!("https://mediafire.com/?{url}");
    }

    if url.starts_with("https://") {
        url
    } else if url.starts_with("//") {
        format!("https:{url}")
    } else {
        format!("https://{url}")
    }
}
