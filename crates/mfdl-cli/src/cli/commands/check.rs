//! `mfdl check <share-link>` – classify the input, print its page URL.

use anyhow::Result;
use mfdl_core::share_link;

/// Prints the normalized page URL for a valid share link; exits nonzero
/// (via the returned error) when the input matches no share-link shape.
pub fn run_check(share_link: &str) -> Result<()> {
    match share_link::share_page_url(share_link) {
        Some(url) => {
            println!("OK {url}");
            Ok(())
        }
        None => anyhow::bail!("not a recognized MediaFire share link: {share_link:?}"),
    }
}
