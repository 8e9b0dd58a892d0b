use thiserror::Error;

use crate::model::DemoRecord;

/// Fixed relative resource the demo list is read from.
pub const DEFAULT_RESOURCE: &str = "demos.json";

#[derive(Clone, Debug)]
pub enum DataSource {
    Url(String),
    FilePath(String),
    Inline(Vec<DemoRecord>),
}

impl DataSource {
    /// `http://` and `https://` locations are fetched over the network,
    /// anything else is read from disk.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::FilePath(trimmed.to_string())
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::FilePath(path) => path.clone(),
            Self::Inline(records) => format!("<inline: {} records>", records.len()),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load demos.json: {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to load demos.json: request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to load demos.json: {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed demo list from {origin}: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads the demo list once. No retries and no caching; a timeout only
/// applies if the client was built with one.
pub async fn fetch_demos(
    client: &reqwest::Client,
    source: &DataSource,
) -> Result<Vec<DemoRecord>, LoadError> {
    match source {
        DataSource::Url(url) => {
            let response = client
                .get(url.as_str())
                .send()
                .await
                .map_err(|e| LoadError::Request {
                    url: url.clone(),
                    source: e,
                })?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status {
                    url: url.clone(),
                    status: status.as_u16(),
                });
            }
            let body = response.bytes().await.map_err(|e| LoadError::Request {
                url: url.clone(),
                source: e,
            })?;
            parse_demos(&body, url)
        }
        DataSource::FilePath(path) => {
            let body = tokio::fs::read(path)
                .await
                .map_err(|e| LoadError::FileRead {
                    path: path.clone(),
                    source: e,
                })?;
            parse_demos(&body, path)
        }
        DataSource::Inline(records) => Ok(records.clone()),
    }
}

pub fn parse_demos(body: &[u8], origin: &str) -> Result<Vec<DemoRecord>, LoadError> {
    serde_json::from_slice::<Vec<DemoRecord>>(body).map_err(|e| LoadError::Malformed {
        origin: origin.to_string(),
        source: e,
    })
}
