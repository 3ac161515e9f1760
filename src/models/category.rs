use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoCategory {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: Option<String>,
    pub snippet: Option<VideoCategorySnippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCategorySnippet {
    pub channel_id: Option<String>,
    pub title: Option<String>,
    pub assignable: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideCategory {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub id: Option<String>,
    pub snippet: Option<GuideCategorySnippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideCategorySnippet {
    pub channel_id: Option<String>,
    pub title: Option<String>,
}
