use serde::{Deserialize, Serialize};

/// The account that published a video. Both fields are nullable on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// One entry of the catalogue as returned by `GET /videos`.
///
/// The service exposes two renditions per video: a progressive `fullURL`
/// and an HLS `hlsURL`. `publishedAt` is a string-encoded UTC timestamp
/// (`yyyy-MM-ddTHH:mm:ss.SSSZ`); it is kept as a string here and parsed
/// only when the playlist is ordered.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoDescriptor {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<Author>,
    #[serde(rename = "fullURL")]
    pub full_url: Option<String>,
    #[serde(rename = "hlsURL")]
    pub hls_url: Option<String>,
    pub published_at: String,
}

impl VideoDescriptor {
    /// Preferred playback URL: the HLS rendition, falling back to the
    /// progressive one.
    pub fn media_url(&self) -> Option<&str> {
        self.hls_url.as_deref().or(self.full_url.as_deref())
    }

    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().and_then(|a| a.name.as_deref())
    }
}
