//! One-shot HTTP fetch of animation sources.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use tracing::debug;

/// User agent sent with gallery requests.
const USER_AGENT: &str = concat!("flick/", env!("CARGO_PKG_VERSION"));

/// Redirect ceiling for gallery fetches.
const MAX_REDIRECTS: usize = 10;

/// Fetch raw animation source over HTTP.
///
/// Blocking by design: a fetch always completes or fails before playback
/// starts, so nothing here ever runs concurrently with frame rendering.
/// Follows up to [`MAX_REDIRECTS`] redirects and enforces `timeout` per
/// request.
pub fn fetch_source(url: &str, timeout: Duration) -> Result<String> {
    debug!(url = %url, "fetching animation source");

    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .redirect(Policy::limited(MAX_REDIRECTS))
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Failed to fetch {}", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("Gallery returned {} for {}", status, url);
    }

    response
        .text()
        .with_context(|| format!("Failed to read response body from {}", url))
}
