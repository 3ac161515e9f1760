use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::common::{parse_datetime, Thumbnails};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: Option<String>,
    pub snippet: Option<PlaylistItemSnippet>,
    pub content_details: Option<PlaylistItemContentDetails>,
    pub status: Option<PlaylistItemStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    pub published_at: Option<String>,
    pub channel_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnails: Option<Thumbnails>,
    pub channel_title: Option<String>,
    pub playlist_id: Option<String>,
    pub position: Option<u32>,
    pub resource_id: Option<ResourceId>,
    pub video_owner_channel_title: Option<String>,
    pub video_owner_channel_id: Option<String>,
}

impl PlaylistItemSnippet {
    pub fn published_at_datetime(&self) -> Option<DateTime<Utc>> {
        parse_datetime(self.published_at.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    pub kind: Option<String>,
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemContentDetails {
    pub video_id: Option<String>,
    pub note: Option<String>,
    pub video_published_at: Option<String>,
}

impl PlaylistItemContentDetails {
    pub fn video_published_at_datetime(&self) -> Option<DateTime<Utc>> {
        parse_datetime(self.video_published_at.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemStatus {
    pub privacy_status: Option<String>,
}
