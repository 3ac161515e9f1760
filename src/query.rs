//! Parameter validation and query assembly. Nothing here touches the network.

use std::fmt;
use std::str::FromStr;
use crate::YouTubeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Channels,
    Playlists,
    PlaylistItems,
    Videos,
    CommentThreads,
    Comments,
    VideoCategories,
    GuideCategories,
}

impl Resource {
    /// Path under the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Channels => "channels",
            Resource::Playlists => "playlists",
            Resource::PlaylistItems => "playlistItems",
            Resource::Videos => "videos",
            Resource::CommentThreads => "commentThreads",
            Resource::Comments => "comments",
            Resource::VideoCategories => "videoCategories",
            Resource::GuideCategories => "guideCategories",
        }
    }

    pub fn allowed_parts(&self) -> &'static [&'static str] {
        match self {
            Resource::Channels => &[
                "id",
                "auditDetails",
                "brandingSettings",
                "contentDetails",
                "contentOwnerDetails",
                "localizations",
                "snippet",
                "statistics",
                "status",
                "topicDetails",
            ],
            Resource::Playlists => &["id", "contentDetails", "localizations", "player", "snippet", "status"],
            Resource::PlaylistItems => &["id", "contentDetails", "snippet", "status"],
            Resource::Videos => &[
                "id",
                "contentDetails",
                "fileDetails",
                "liveStreamingDetails",
                "localizations",
                "player",
                "processingDetails",
                "recordingDetails",
                "snippet",
                "statistics",
                "status",
                "suggestions",
                "topicDetails",
            ],
            Resource::CommentThreads => &["id", "replies", "snippet"],
            Resource::Comments => &["id", "snippet"],
            Resource::VideoCategories => &["id", "snippet"],
            Resource::GuideCategories => &["id", "snippet"],
        }
    }

    /// Parts requested when the caller picks none.
    pub fn default_parts(&self) -> Parts {
        let parts: &[&str] = match self {
            Resource::Channels => &["id", "snippet", "contentDetails", "statistics", "status"],
            Resource::Playlists => &["id", "snippet", "contentDetails", "status"],
            Resource::PlaylistItems => &["id", "snippet", "contentDetails", "status"],
            Resource::Videos => &["id", "snippet", "contentDetails", "statistics", "status"],
            Resource::CommentThreads => &["id", "snippet"],
            Resource::Comments => &["id", "snippet"],
            Resource::VideoCategories | Resource::GuideCategories => &["id", "snippet"],
        };
        Parts::from_iter(parts.iter().copied())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Ordered, de-duplicated list of part names.
///
/// Each input element may itself be comma-separated, so `["id,snippet"]` and
/// `["id", "snippet"]` are the same selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parts(Vec<String>);

impl Parts {
    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Parts {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut names: Vec<String> = Vec::new();
        for chunk in iter {
            for name in chunk.as_ref().split(',').map(str::trim).filter(|n| !n.is_empty()) {
                if !names.iter().any(|existing| existing == name) {
                    names.push(name.to_string());
                }
            }
        }
        Parts(names)
    }
}

impl FromStr for Parts {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Parts::from_iter([s]))
    }
}

/// Normalized query parameters, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(Vec<(&'static str, String)>);

impl Query {
    pub fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.push((name, value.into()));
    }

    /// Replaces an existing parameter, or appends it.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Validates one operation's arguments into a [`Query`].
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    resource: Resource,
    query: Query,
}

impl QueryBuilder {
    pub fn new(resource: Resource) -> Self {
        QueryBuilder {
            resource,
            query: Query::default(),
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Adds `part`. Absent parts are missing, an empty list or an unknown
    /// name for this resource is invalid.
    pub fn parts(mut self, parts: Option<&Parts>) -> Result<Self, YouTubeError> {
        let parts = parts.ok_or_else(|| {
            YouTubeError::MissingParams(format!("Specify the parts for resource {}", self.resource))
        })?;

        if parts.is_empty() {
            return Err(YouTubeError::InvalidParams(format!(
                "Parts for resource {} must not be empty",
                self.resource
            )));
        }

        let allowed = self.resource.allowed_parts();
        if let Some(unknown) = parts.names().iter().find(|p| !allowed.contains(&p.as_str())) {
            return Err(YouTubeError::InvalidParams(format!(
                "Part {} for resource {} not supported",
                unknown, self.resource
            )));
        }

        self.query.push("part", parts.names().join(","));
        Ok(self)
    }

    /// Requires exactly one of the mutually exclusive selectors to be set.
    pub fn selector(mut self, candidates: Vec<(&'static str, Option<String>)>) -> Result<Self, YouTubeError> {
        let names: Vec<&str> = candidates.iter().map(|(name, _)| *name).collect();
        let mut provided = candidates.into_iter().filter(|(_, value)| value.is_some());

        match (provided.next(), provided.next()) {
            (Some((name, Some(value))), None) => {
                self.query.push(name, value);
                Ok(self)
            }
            (None, _) => Err(YouTubeError::MissingParams(format!(
                "Specify one of {} for resource {}",
                names.join(", "),
                self.resource
            ))),
            _ => Err(YouTubeError::InvalidParams(format!(
                "Only one of {} may be given for resource {}",
                names.join(", "),
                self.resource
            ))),
        }
    }

    pub fn optional<V: ToString>(mut self, name: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.query.push(name, value.to_string());
        }
        self
    }

    pub fn build(self) -> Query {
        self.query
    }
}

macro_rules! allow_list {
    ($(#[$meta:meta])* $name:ident, $what:literal { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = YouTubeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(YouTubeError::InvalidParams(format!(
                        "Unsupported {} {:?}, expected one of: {}",
                        $what,
                        other,
                        [$($wire),+].join(", ")
                    ))),
                }
            }
        }
    };
}

allow_list!(
    /// `chart` filter for `videos.list`.
    VideoChart, "chart" {
        MostPopular => "mostPopular",
    }
);

allow_list!(
    /// `myRating` filter for `videos.list`.
    Rating, "rating" {
        Like => "like",
        Dislike => "dislike",
    }
);

allow_list!(CommentOrder, "order" {
    Time => "time",
    Relevance => "relevance",
});

allow_list!(TextFormat, "text format" {
    Html => "html",
    PlainText => "plainText",
});

allow_list!(ModerationStatus, "moderation status" {
    HeldForReview => "heldForReview",
    LikelySpam => "likelySpam",
    Published => "published",
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;

    fn parts(s: &str) -> Parts {
        s.parse().unwrap()
    }

    #[test]
    fn missing_parts_is_missing_params() {
        let err = QueryBuilder::new(Resource::Videos).parts(None).unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingParams);
    }

    #[test]
    fn empty_parts_is_invalid_params() {
        let err = QueryBuilder::new(Resource::Videos)
            .parts(Some(&Parts::from_iter(Vec::<String>::new())))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidParams);

        let err = QueryBuilder::new(Resource::Videos).parts(Some(&parts(" , "))).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidParams);
    }

    #[test]
    fn unknown_part_is_invalid_params() {
        let err = QueryBuilder::new(Resource::PlaylistItems)
            .parts(Some(&parts("id,part")))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidParams);
        assert!(err.to_string().contains("part"));
    }

    #[test]
    fn parts_keep_order_and_drop_duplicates() {
        let query = QueryBuilder::new(Resource::Videos)
            .parts(Some(&Parts::from_iter(["snippet,id", "statistics", "id"])))
            .unwrap()
            .build();
        assert_eq!(query.get("part"), Some("snippet,id,statistics"));
    }

    #[test]
    fn exactly_one_selector() {
        let none = QueryBuilder::new(Resource::Comments)
            .selector(vec![("id", None), ("parentId", None)])
            .unwrap_err();
        assert_eq!(none.code(), ErrorCode::MissingParams);

        let both = QueryBuilder::new(Resource::Comments)
            .selector(vec![("id", Some("a".into())), ("parentId", Some("b".into()))])
            .unwrap_err();
        assert_eq!(both.code(), ErrorCode::InvalidParams);

        let query = QueryBuilder::new(Resource::Comments)
            .selector(vec![("id", None), ("parentId", Some("b".into()))])
            .unwrap()
            .build();
        assert_eq!(query.get("parentId"), Some("b"));
        assert_eq!(query.get("id"), None);
    }

    #[test]
    fn allow_lists_reject_unknown_values() {
        assert_eq!("relevance".parse::<CommentOrder>().unwrap(), CommentOrder::Relevance);
        assert_eq!("plainText".parse::<TextFormat>().unwrap(), TextFormat::PlainText);
        assert_eq!("mostPopular".parse::<VideoChart>().unwrap(), VideoChart::MostPopular);

        let err = "rev".parse::<CommentOrder>().unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidParams);
        assert_eq!("love".parse::<Rating>().unwrap_err().code(), ErrorCode::InvalidParams);
        assert_eq!(Rating::ALL.len(), 2);
    }

    #[test]
    fn query_string_is_encoded() {
        let mut query = Query::default();
        query.push("part", "id,snippet");
        query.push("searchTerms", "rust lang");
        query.set("part", "id");
        assert_eq!(query.to_query_string(), "part=id&searchTerms=rust%20lang");
    }
}
