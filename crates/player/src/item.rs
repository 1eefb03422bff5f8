use vodloop_api::VideoDescriptor;

/// The minimal media reference and metadata the playback engine needs for
/// one video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayableItem {
    pub media_url: String,
    pub title: String,
    pub author_name: String,
    pub description: String,
}

/// What the engine reports about the current queue position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemMetadata {
    pub title: String,
    pub author_name: String,
    pub description: String,
}

impl PlayableItem {
    pub fn metadata(&self) -> ItemMetadata {
        ItemMetadata {
            title: self.title.clone(),
            author_name: self.author_name.clone(),
            description: self.description.clone(),
        }
    }
}

impl From<&VideoDescriptor> for PlayableItem {
    fn from(video: &VideoDescriptor) -> Self {
        Self {
            media_url: video.media_url().unwrap_or_default().to_owned(),
            title: video.title.clone().unwrap_or_default(),
            author_name: video.author_name().unwrap_or_default().to_owned(),
            description: video.description.clone().unwrap_or_default(),
        }
    }
}
