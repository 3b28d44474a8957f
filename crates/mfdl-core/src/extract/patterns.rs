//! Embedded download-link patterns.
//!
//! Both links appear inside a quoted HTML attribute or script string, so
//! each pattern matches the surrounding quotes and captures the link text
//! in group 1 (the `regex` crate has no lookbehind/lookahead).

use regex::Regex;
use std::sync::OnceLock;

/// Pre-download redirect link: a `(file|view|download)` page path with a
/// `dkey` query token. Scheme and `www.` prefix are optional.
pub(super) fn pre_download_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"['"]((?:https?:)?(?://)?(?:www\.)?mediafire\.com/(?:file|view|download)/[^'"?]+\?dkey=[^'"]+)['"]"#,
        )
        .unwrap()
    })
}

/// Final direct-download link on a numbered download subdomain.
pub(super) fn direct_download_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"['"](https?://download[0-9]+\.mediafire\.com/[^'"]+)['"]"#).unwrap()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pre_download_requires_dkey() {
        let no_dkey = r#""https://mediafire.com/file/abc123/name.zip""#;
        assert!(!pre_download_re().is_match(no_dkey));

        let with_dkey = r#""https://mediafire.com/file/abc123/name.zip?dkey=tok""#;
        assert!(pre_download_re().is_match(with_dkey));
    }

    #[test]
    fn direct_requires_numbered_subdomain() {
        assert!(!direct_download_re().is_match(r#""https://download.mediafire.com/a/b.zip""#));
        assert!(direct_download_re().is_match(r#""https://download4571.mediafire.com/a/b.zip""#));
    }

    #[test]
    fn capture_excludes_quotes() {
        let caps = direct_download_re()
            .captures(r#"'https://download1.mediafire.com/a/b.zip'"#)
            .unwrap();
        assert_eq!(&caps[1], "https://download1.mediafire.com/a/b.zip");
    }
}
