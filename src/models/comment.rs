use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::common::parse_datetime;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: Option<String>,
    pub snippet: Option<CommentSnippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    pub author_display_name: Option<String>,
    pub author_profile_image_url: Option<String>,
    pub author_channel_url: Option<String>,
    pub author_channel_id: Option<AuthorChannelId>,
    pub channel_id: Option<String>,
    pub video_id: Option<String>,
    pub text_display: Option<String>,
    pub text_original: Option<String>,
    pub parent_id: Option<String>,
    pub can_rate: Option<bool>,
    pub viewer_rating: Option<String>,
    pub like_count: Option<u64>,
    pub moderation_status: Option<String>,
    pub published_at: Option<String>,
    pub updated_at: Option<String>,
}

impl CommentSnippet {
    pub fn published_at_datetime(&self) -> Option<DateTime<Utc>> {
        parse_datetime(self.published_at.as_deref())
    }

    pub fn updated_at_datetime(&self) -> Option<DateTime<Utc>> {
        parse_datetime(self.updated_at.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorChannelId {
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentThread {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: Option<String>,
    pub snippet: Option<CommentThreadSnippet>,
    pub replies: Option<CommentThreadReplies>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub channel_id: Option<String>,
    pub video_id: Option<String>,
    pub top_level_comment: Option<Comment>,
    pub can_reply: Option<bool>,
    pub total_reply_count: Option<u64>,
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentThreadReplies {
    pub comments: Option<Vec<Comment>>,
}
