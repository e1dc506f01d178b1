use anyhow::{anyhow, bail, Result};
use bytes::Bytes;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::time::Duration;
use url::Url;

use crate::extract::extract_artist_meta;
use crate::types::ArtistRecord;

#[derive(Clone)]
pub struct ScrapeClient {
    http: Client,
}

impl ScrapeClient {
    pub fn new(user_agent: &str, timeout: Duration) -> Self {
        let http = Client::builder()
            .user_agent(user_agent)
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .redirect(Policy::limited(8))
            .timeout(timeout)
            .build()
            .unwrap();

        Self { http }
    }

    pub async fn fetch_bytes(&self, url: &Url) -> Result<(StatusCode, Bytes)> {
        let res = self.http.get(url.clone()).send().await?;
        let status = res.status();
        let body = res.bytes().await?;
        Ok((status, body))
    }
}

/// Fetch one URL and derive its artist metadata.
///
/// Ok covers both real extractions and the non-200 placeholder record; Err is
/// anything that kept us from getting a response body at all (bad URL,
/// transport failure) or from reading the expected tags out of it. The caller
/// turns Err into the per-URL error record.
pub async fn scrape_artist(sc: &ScrapeClient, url_raw: &str) -> Result<ArtistRecord> {
    let url = Url::parse(url_raw).map_err(|e| anyhow!("bad url: {e}"))?;
    if !(url.scheme() == "https" || url.scheme() == "http") {
        bail!("unsupported scheme");
    }

    let (status, body) = sc.fetch_bytes(&url).await?;
    // Exactly 200; redirects were already followed by the client, so any
    // remaining non-200 becomes the placeholder record.
    if status != StatusCode::OK {
        return Ok(ArtistRecord::fetch_failure(url_raw));
    }

    let html = String::from_utf8_lossy(&body);
    let meta = extract_artist_meta(&html)?;

    // Echo the caller's string, not the normalized Url form.
    Ok(ArtistRecord::success(
        url_raw,
        meta.artist_name,
        meta.monthly_listeners,
    ))
}
