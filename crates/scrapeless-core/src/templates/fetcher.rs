//! Template archive fetching
//!
//! Templates are published as zip archives (GitHub branch downloads). The
//! fetch is a single blocking call with no internal retry; transient failures
//! surface directly as `FetchFailed`.

use crate::error::Error;
use url::Url;

/// Fetches template archives over HTTP
pub struct TemplateFetcher {
    client: reqwest::Client,
}

impl TemplateFetcher {
    /// Create a new fetcher with a custom user agent
    pub fn new(user_agent: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Download the archive at `url` into memory
    pub async fn fetch_archive(&self, url: &Url) -> Result<Vec<u8>, Error> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::FetchFailed {
                url: url.to_string(),
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FetchFailed {
                url: url.to_string(),
                source: format!("HTTP {}", status).into(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| Error::FetchFailed {
            url: url.to_string(),
            source: Box::new(e),
        })?;

        Ok(bytes.to_vec())
    }
}
