use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::common::{parse_datetime, Localized, Player, Thumbnails};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: Option<String>,
    pub snippet: Option<PlaylistSnippet>,
    pub content_details: Option<PlaylistContentDetails>,
    pub status: Option<PlaylistStatus>,
    pub player: Option<Player>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSnippet {
    pub published_at: Option<String>,
    pub channel_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnails: Option<Thumbnails>,
    pub channel_title: Option<String>,
    pub tags: Option<Vec<String>>,
    pub default_language: Option<String>,
    pub localized: Option<Localized>,
}

impl PlaylistSnippet {
    pub fn published_at_datetime(&self) -> Option<DateTime<Utc>> {
        parse_datetime(self.published_at.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistContentDetails {
    pub item_count: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistStatus {
    pub privacy_status: Option<String>,
}
