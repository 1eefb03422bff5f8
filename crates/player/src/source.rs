use async_trait::async_trait;
use vodloop_api::{ApiError, VideoDescriptor, VideosClient};

/// Seam in front of the catalogue service so the player can be driven by
/// anything that yields descriptors (the HTTP client, fixtures in tests).
#[async_trait]
pub trait VideoSource: Send + Sync {
    async fn fetch_videos(&self) -> Result<Vec<VideoDescriptor>, ApiError>;
}

#[async_trait]
impl VideoSource for VideosClient {
    async fn fetch_videos(&self) -> Result<Vec<VideoDescriptor>, ApiError> {
        VideosClient::fetch_videos(self).await
    }
}
