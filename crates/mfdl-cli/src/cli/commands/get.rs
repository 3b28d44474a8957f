//! `mfdl get <share-link>` – resolve and download the file.

use anyhow::{Context, Result};
use mfdl_core::config::MfdlConfig;
use mfdl_core::{save_name, transfer};
use std::path::Path;

use super::resolve::resolve_blocking;

pub async fn run_get(
    cfg: &MfdlConfig,
    share_link: &str,
    download_dir: Option<&Path>,
) -> Result<()> {
    let link = resolve_blocking(cfg, share_link).await?;
    println!("Direct link: {}", link.direct_url);

    let dir = match download_dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let dest = dir.join(save_name::derive_save_name(&link.direct_url));

    let url = link.direct_url.clone();
    let dest_for_worker = dest.clone();
    let written =
        tokio::task::spawn_blocking(move || transfer::download_to_file(&url, &dest_for_worker))
            .await?
            .with_context(|| format!("download {}", link.direct_url))?;

    println!("Saved {} ({} bytes)", dest.display(), written);
    Ok(())
}
