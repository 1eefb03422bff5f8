use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::VideoDescriptor;

pub(crate) const VIDEOS_PATH: &str = "videos";

/// HTTP client for the video catalogue service.
pub struct VideosClient {
    client: Client,
    base_url: Url,
}

impl VideosClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        let base_url = parse_base_url(&config.base_url)?;
        Ok(Self { client, base_url })
    }

    /// Build a client around an existing `reqwest::Client`, sharing its
    /// connection pool.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the full catalogue: `GET {base_url}/videos`.
    ///
    /// A non-2xx response becomes `ApiError::RequestFailed` carrying the
    /// status code and the response body text.
    pub async fn fetch_videos(&self) -> Result<Vec<VideoDescriptor>, ApiError> {
        let url = self
            .base_url
            .join(VIDEOS_PATH)
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        debug!(url = %url, "fetching video catalogue");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_owned());
            warn!(status = status.as_u16(), "catalogue request failed");
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let videos: Vec<VideoDescriptor> = serde_json::from_str(&body)?;
        debug!(count = videos.len(), "fetched video catalogue");
        Ok(videos)
    }
}

/// Normalize the base URL so `Url::join` treats the last path segment as a
/// directory instead of replacing it.
fn parse_base_url(base_url: &str) -> Result<Url, ApiError> {
    let normalized = if base_url.ends_with('/') {
        base_url.to_owned()
    } else {
        format!("{base_url}/")
    };
    Url::parse(&normalized).map_err(|e| ApiError::InvalidUrl(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_videos_path_onto_base() {
        let url = parse_base_url("http://localhost:4000")
            .unwrap()
            .join(VIDEOS_PATH)
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/videos");
    }

    #[test]
    fn preserves_base_path_segments() {
        let url = parse_base_url("http://example.com/api/v1")
            .unwrap()
            .join(VIDEOS_PATH)
            .unwrap();
        assert_eq!(url.as_str(), "http://example.com/api/v1/videos");
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
