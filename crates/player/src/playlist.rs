use chrono::{DateTime, FixedOffset};
use thiserror::Error;
use tracing::warn;
use vodloop_api::VideoDescriptor;

use crate::item::PlayableItem;

/// A publish timestamp that could not be parsed. One bad timestamp fails
/// the whole ordering pass; the caller abandons the load for that cycle.
#[derive(Error, Debug)]
#[error("unparsable publish timestamp {value:?}: {source}")]
pub struct SortError {
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Order descriptors newest-first by `publishedAt` and adapt them into
/// playable items. Exactly N descriptors in, N items out.
pub fn sorted_playlist(videos: Vec<VideoDescriptor>) -> Result<Vec<PlayableItem>, SortError> {
    let mut dated = videos
        .iter()
        .map(|video| Ok((parse_published_at(&video.published_at)?, video)))
        .collect::<Result<Vec<_>, SortError>>()?;

    dated.sort_by(|(a, _), (b, _)| b.cmp(a));

    let items = dated
        .into_iter()
        .map(|(_, video)| {
            if video.media_url().is_none() {
                warn!(id = %video.id, "video has no rendition url");
            }
            PlayableItem::from(video)
        })
        .collect();
    Ok(items)
}

fn parse_published_at(value: &str) -> Result<DateTime<FixedOffset>, SortError> {
    DateTime::parse_from_rfc3339(value).map_err(|source| SortError {
        value: value.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vodloop_api::Author;

    fn video(id: &str, published_at: &str) -> VideoDescriptor {
        VideoDescriptor {
            id: id.to_owned(),
            title: Some(format!("video {id}")),
            description: Some("desc".to_owned()),
            author: Some(Author {
                id: Some("u1".to_owned()),
                name: Some("Dana".to_owned()),
            }),
            full_url: Some(format!("https://cdn.example.com/{id}/full.mp4")),
            hls_url: Some(format!("https://cdn.example.com/{id}/index.m3u8")),
            published_at: published_at.to_owned(),
        }
    }

    #[test]
    fn orders_newest_first() {
        let items = sorted_playlist(vec![
            video("a", "2023-01-01T00:00:00.000Z"),
            video("b", "2023-06-01T00:00:00.000Z"),
        ])
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "video b");
        assert_eq!(items[1].title, "video a");
    }

    #[test]
    fn keeps_every_descriptor() {
        let items = sorted_playlist(vec![
            video("a", "2022-03-14T09:26:53.589Z"),
            video("b", "2021-12-31T23:59:59.999Z"),
            video("c", "2023-06-01T00:00:00.000Z"),
        ])
        .unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "video c");
        assert_eq!(items[2].title, "video b");
    }

    #[test]
    fn one_bad_timestamp_fails_the_pass() {
        let err = sorted_playlist(vec![
            video("a", "2023-01-01T00:00:00.000Z"),
            video("b", "not-a-date"),
        ])
        .unwrap_err();
        assert_eq!(err.value, "not-a-date");
    }

    #[test]
    fn missing_rendition_maps_to_empty_url() {
        let mut v = video("a", "2023-01-01T00:00:00.000Z");
        v.full_url = None;
        v.hls_url = None;
        let items = sorted_playlist(vec![v]).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].media_url, "");
    }

    #[test]
    fn adapts_metadata_fields() {
        let items = sorted_playlist(vec![video("a", "2023-01-01T00:00:00.000Z")]).unwrap();
        let item = &items[0];
        assert_eq!(item.media_url, "https://cdn.example.com/a/index.m3u8");
        assert_eq!(item.author_name, "Dana");
        assert_eq!(item.description, "desc");
    }
}
