//! Share-link shape patterns.

use regex::Regex;
use std::sync::OnceLock;

fn bare_identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap())
}

fn short_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(https?://)?(www\.)?mediafire\.com/\?[a-zA-Z0-9]+$").unwrap())
}

fn long_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(https?://)?(www\.)?mediafire\.com/(file|view|download)/[a-zA-Z0-9]+(/[a-zA-Z0-9_~%.\-]+)?(/file)?$",
        )
        .unwrap()
    })
}

/// True if `input` is a bare alphanumeric file identifier.
pub fn is_bare_identifier(input: &str) -> bool {
    bare_identifier_re().is_match(input)
}

/// True if `input` matches any of the three share-link shapes
/// (bare identifier, short-form URL, long-form URL).
pub fn is_share_link(input: &str) -> bool {
    is_bare_identifier(input) || short_url_re().is_match(input) || long_url_re().is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_identifier_accepted() {
        assert!(is_share_link("abc123"));
        assert!(is_share_link("X9"));
    }

    #[test]
    fn bare_identifier_rejects_punctuation() {
        assert!(!is_bare_identifier("abc-123"));
        assert!(!is_bare_identifier("abc 123"));
        assert!(!is_bare_identifier(""));
    }

    #[test]
    fn short_form_accepted_with_and_without_scheme() {
        assert!(is_share_link("https://mediafire.com/?abc123"));
        assert!(is_share_link("http://www.mediafire.com/?abc123"));
        assert!(is_share_link("mediafire.com/?abc123"));
        assert!(is_share_link("www.mediafire.com/?abc123"));
    }

    #[test]
    fn long_form_accepted() {
        assert!(is_share_link(
            "https://www.mediafire.com/file/abc123/name.zip/file"
        ));
        assert!(is_share_link("mediafire.com/view/abc123"));
        assert!(is_share_link("mediafire.com/download/abc123/some_file-1.2.tar.gz"));
    }

    #[test]
    fn long_form_rejects_other_sections() {
        assert!(!is_share_link("mediafire.com/folder/abc123"));
        assert!(!is_share_link("mediafire.com/file/"));
    }

    #[test]
    fn garbage_rejected() {
        assert!(!is_share_link("not a url"));
        assert!(!is_share_link("https://example.com/file/abc123"));
        assert!(!is_share_link("ftp://mediafire.com/?abc123"));
    }
}
