use std::time::Instant;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::error::{FetchCause, Result, ScrapeError};

pub const DEFAULT_BASE_URL: &str = "https://en.oxforddictionaries.com/definition";

/// Anything that can hand back the raw markup of a word's page.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, word: &str) -> Result<String>;
}

/// Fetches `<base_url>/<word>` over HTTP. No retries, no timeout.
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, word: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), word)
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch(&self, word: &str) -> Result<String> {
        let url = self.url_for(word);
        let fail = |cause: FetchCause| ScrapeError::Fetch {
            word: word.to_string(),
            cause,
        };

        let start = Instant::now();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| fail(e.into()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(fail(FetchCause::Status(status)));
        }

        let html = response.text().await.map_err(|e| fail(e.into()))?;
        debug!(
            "Fetched {} ({} bytes) in {}ms",
            url,
            html.len(),
            start.elapsed().as_millis()
        );
        Ok(html)
    }
}
