/// Where image bytes come from
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use crate::error::LoadError;

/// Give up on a remote image after this long
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// A parsed image URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// http:// or https:// URL
    Remote(String),
    /// file:// URI or a bare filesystem path
    File(PathBuf),
}

impl Location {
    /// Classify a URI string
    pub fn parse(uri: &str) -> Result<Self, LoadError> {
        let uri = uri.trim();

        if uri.is_empty() {
            return Err(LoadError::UnsupportedUri("empty source".to_string()));
        }

        let lower = uri.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(Location::Remote(uri.to_string()));
        }

        if let Some(path) = uri.strip_prefix("file://") {
            return Ok(Location::File(PathBuf::from(path)));
        }

        // Any other scheme is something we can't fetch
        if uri.contains("://") {
            return Err(LoadError::UnsupportedUri(uri.to_string()));
        }

        Ok(Location::File(PathBuf::from(uri)))
    }

    /// Read the full byte payload
    pub async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        match self {
            Location::Remote(url) => fetch_remote(url).await,
            Location::File(path) => Ok(tokio::fs::read(path).await?),
        }
    }
}

/// Shared HTTP client, built on first use
fn client() -> Result<&'static reqwest::Client, LoadError> {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("photo-grid/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(CLIENT.get_or_init(|| client))
}

async fn fetch_remote(url: &str) -> Result<Vec<u8>, LoadError> {
    let response = client()?.get(url).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}
