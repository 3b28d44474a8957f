//! Local filename derivation for a resolved direct-download link.
//!
//! MediaFire direct links end in the original filename, usually
//! percent-encoded (`my%20file.zip`). The derived name is the decoded last
//! path segment, cleaned up for Linux filesystems.

use percent_encoding::percent_decode_str;

/// Fallback when the URL path yields nothing usable.
const DEFAULT_SAVE_NAME: &str = "download.bin";

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

/// Derives a safe local filename from a direct-download URL.
pub fn derive_save_name(direct_url: &str) -> String {
    let segment = match last_path_segment(direct_url) {
        Some(s) => s,
        None => return DEFAULT_SAVE_NAME.to_string(),
    };

    let decoded = percent_decode_str(&segment)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or(segment);

    let cleaned = clean(&decoded);
    if cleaned.is_empty() {
        DEFAULT_SAVE_NAME.to_string()
    } else {
        cleaned
    }
}

fn last_path_segment(direct_url: &str) -> Option<String> {
    let parsed = url::Url::parse(direct_url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

/// Replaces path separators, NUL, and control characters with `_`, trims
/// leading/trailing dots and spaces, and caps the length at NAME_MAX bytes.
fn clean(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c == '/' || c == '\\' || c == '\0' || c.is_control() {
            out.push('_');
        } else {
            out.push(c);
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == ' ');

    let mut take = trimmed.len().min(NAME_MAX);
    while take > 0 && !trimmed.is_char_boundary(take) {
        take -= 1;
    }
    trimmed[..take].to_string()
}
