// Resource fetch client.
// Resolves locators to text: http(s) URLs over the network, anything else
// relative to the deck file's directory.

use std::path::{Path, PathBuf};

use reqwest::{
    Client, StatusCode,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{DeckError, Result};

/// Fetches resource bodies for hydration.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    base: PathBuf,
}

impl Fetcher {
    /// Create a fetcher resolving relative locators against `base`.
    pub fn new(base: &Path) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("stepdeck-tui"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(DeckError::Fetch)?;

        Ok(Self {
            client,
            base: base.to_path_buf(),
        })
    }

    /// Fetch a locator's body as text.
    pub async fn fetch_text(&self, src: &str) -> Result<String> {
        if src.starts_with("http://") || src.starts_with("https://") {
            self.fetch_remote(src).await
        } else {
            let path = self.base.join(src);
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| match e.kind() {
                    std::io::ErrorKind::NotFound => DeckError::NotFound(src.to_string()),
                    _ => DeckError::Io(e),
                })
        }
    }

    async fn fetch_remote(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await.map_err(DeckError::Fetch)?;

        match response.status() {
            StatusCode::OK => Ok(response.text().await.map_err(DeckError::Fetch)?),
            StatusCode::NOT_FOUND => Err(DeckError::NotFound(url.to_string())),
            status => Err(DeckError::Other(format!(
                "HTTP {}: {}",
                status,
                response.text().await.unwrap_or_default()
            ))),
        }
    }
}
