//! MediaFire share-link classification and normalization.
//!
//! A share reference comes in three shapes: a bare alphanumeric identifier,
//! a short-form URL (`mediafire.com/?<id>`), or a long-form URL
//! (`mediafire.com/(file|view|download)/<id>[/<name>][/file]`). Anything
//! else is rejected. Normalization rewrites any accepted shape into an
//! absolute `https://` URL without judging validity.

mod normalize;
mod shape;

pub use normalize::normalize;
pub use shape::{is_bare_identifier, is_share_link};

/// Validates `input` as a share link and returns its normalized page URL.
///
/// `None` when the input matches none of the three share-link shapes.
pub fn share_page_url(input: &str) -> Option<String> {
    if !is_share_link(input) {
        return None;
    }
    Some(normalize(input))
}
