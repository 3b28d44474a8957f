//! Direct-link download: streams the file body to local disk.
//!
//! This replaces the original web page's transient-anchor click. A single
//! sequential GET is enough; direct links are one-shot, short-lived URLs.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::config;

/// Downloads `url` to `dest` with a single GET. Returns bytes written.
///
/// Blocking; call from `spawn_blocking` in async code.
pub fn download_to_file(url: &str, dest: &Path) -> Result<u64> {
    let file = fs::File::create(dest)
        .with_context(|| format!("create {}", dest.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    let mut written = 0u64;
    let mut write_err: Option<std::io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.useragent(config::browser_ua())?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(Duration::from_secs(30))?;
    easy.low_speed_limit(1024)?;
    easy.low_speed_time(Duration::from_secs(60))?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            match writer.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            }
        })?;
        transfer.perform()
    };

    // A disk failure aborts the transfer; report it rather than curl's
    // generic write error.
    if let Some(e) = write_err {
        return Err(e).with_context(|| format!("write {}", dest.display()));
    }
    performed.context("GET request failed")?;

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    writer.flush().context("flush output file")?;
    Ok(written)
}
