//! Raw JSON items to model records.

use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::pager::Page;
use crate::YouTubeError;

/// Maps each item by field name. Unknown fields are ignored and absent ones
/// stay `None`; only a wrongly typed value fails.
pub fn map_items<T: DeserializeOwned>(items: Vec<Value>) -> Result<Vec<T>, YouTubeError> {
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(YouTubeError::from))
        .collect()
}

pub fn map_page<T: DeserializeOwned>(page: Page<Value>) -> Result<Page<T>, YouTubeError> {
    Ok(Page {
        items: map_items(page.items)?,
        summary: page.summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlaylistItem, Video};
    use serde_json::json;

    #[test]
    fn present_fields_round_trip_and_absent_fields_are_none() {
        let raw = json!({
            "kind": "youtube#playlistItem",
            "id": "UExPVTJYTFl4bXNJSkpWbkhXbWQxcWZyMENhcTRWWkN1NC4zRjM0MkVCRTg0MkYyQTM0",
            "snippet": {
                "title": "Google I/O 101",
                "position": 0,
                "resourceId": {"kind": "youtube#video", "videoId": "CvTApw9X8aA"},
                "someFutureField": {"nested": true}
            }
        });

        let items: Vec<PlaylistItem> = map_items(vec![raw]).unwrap();
        let item = &items[0];

        assert_eq!(item.kind.as_deref(), Some("youtube#playlistItem"));
        assert_eq!(
            item.id.as_deref(),
            Some("UExPVTJYTFl4bXNJSkpWbkhXbWQxcWZyMENhcTRWWkN1NC4zRjM0MkVCRTg0MkYyQTM0")
        );
        let snippet = item.snippet.as_ref().unwrap();
        assert_eq!(snippet.title.as_deref(), Some("Google I/O 101"));
        assert_eq!(snippet.position, Some(0));
        assert_eq!(
            snippet.resource_id.as_ref().and_then(|r| r.video_id.as_deref()),
            Some("CvTApw9X8aA")
        );

        assert_eq!(item.etag, None);
        assert_eq!(item.content_details, None);
        assert_eq!(item.status, None);
        assert_eq!(snippet.description, None);
        assert_eq!(snippet.published_at_datetime(), None);
    }

    #[test]
    fn empty_object_maps_to_all_none() {
        let videos: Vec<Video> = map_items(vec![json!({})]).unwrap();
        assert_eq!(videos[0], Video::default());
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        let err = map_items::<PlaylistItem>(vec![json!({"snippet": {"position": "first"}})]).unwrap_err();
        assert_eq!(err.code(), crate::ErrorCode::Transport);
        assert!(matches!(err, YouTubeError::ParseError(_)));
    }

    #[test]
    fn order_is_preserved() {
        let raw = vec![json!({"id": "b"}), json!({"id": "a"}), json!({"id": "c"})];
        let videos: Vec<Video> = map_items(raw).unwrap();
        let ids: Vec<_> = videos.iter().filter_map(|v| v.id.as_deref()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }
}
