//! Typed client for the YouTube Data API v3.
//!
//! Every list operation is a request builder handed out by [`YouTubeDataV3Client`].
//! Builders validate their arguments before any network call, then either fetch a
//! single page (ID lookups) or follow `nextPageToken` until the requested count is
//! reached.
//!
//! ```rust,no_run
//! use youtube_data_api::{ClientConfig, Credentials, YouTubeDataV3Client};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = YouTubeDataV3Client::new(ClientConfig::default(), Credentials::api_key("key"))?;
//! let page = client
//!     .playlist_items()
//!     .playlist_id("PLOU2XLYxmsIJJVnHWmd1qfr0Caq4VZCu4")
//!     .count(10)
//!     .send()
//!     .await?;
//! println!("{} of {:?}", page.items.len(), page.summary.total_results);
//! # Ok(())
//! # }
//! ```

use std::error::Error;
use std::fmt;
use std::time::Duration;
use hyper::StatusCode;
use thiserror::Error;


pub mod config;
pub use config::{ClientConfig, Credentials};
pub mod transport;
pub use transport::{initialize_client, HyperTransport, Transport};
pub mod query;
pub use query::{CommentOrder, ModerationStatus, Parts, Query, QueryBuilder, Rating, Resource, TextFormat, VideoChart};
pub mod pager;
pub use pager::{Page, Pager};
pub mod mapper;
pub mod models;
pub use models::PageInfo;

pub mod channels;
pub use channels::ChannelInfoRequest;
pub mod playlists;
pub use playlists::{ListPlaylistsRequest, PlaylistInfoRequest};
pub mod playlist_items;
pub use playlist_items::ListPlaylistItemsRequest;
pub mod videos;
pub use videos::{ListVideosByFilterRequest, VideoInfoRequest};
pub mod comment_threads;
pub use comment_threads::{CommentThreadInfoRequest, ListCommentThreadsRequest};
pub mod comments;
pub use comments::{CommentInfoRequest, ListCommentsByParentRequest};
pub mod categories;
pub use categories::{GuideCategoriesRequest, VideoCategoriesRequest};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    NetworkError(#[from] std::io::Error),
    #[error("TLS error: {0}")]
    TlsError(#[from] native_tls::Error),
}

/// Credentials and headers attached to a single request.
///
/// Builders start from the client's [`Credentials`]; the [`GoogleAPIRequest`]
/// methods override them per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleAPIRequestFields<'a> {
    pub bearer_token: Option<&'a str>,
    pub key: Option<&'a str>,
    pub referrer: Option<&'a str>,
}

impl<'a> GoogleAPIRequestFields<'a> {
    pub fn from_credentials(credentials: &'a Credentials) -> Self {
        GoogleAPIRequestFields {
            bearer_token: credentials.access_token.as_deref(),
            key: credentials.api_key.as_deref(),
            referrer: credentials.referrer.as_deref(),
        }
    }
}

pub trait GoogleAPIRequest<'a> {
    fn bearer_token(&mut self) -> &mut Option<&'a str>;

    fn key(&mut self) -> &mut Option<&'a str>;

    fn referrer(&mut self) -> &mut Option<&'a str>;

    fn with_bearer_token(mut self, bearer_token: &'a str) -> Self
    where
        Self: Sized,
    {
        *self.bearer_token() = Some(bearer_token);
        self
    }

    fn with_key(mut self, key: &'a str) -> Self
    where
        Self: Sized,
    {
        *self.key() = Some(key);
        self
    }

    fn with_referrer(mut self, referrer: &'a str) -> Self
    where
        Self: Sized,
    {
        *self.referrer() = Some(referrer);
        self
    }
}

impl<'a, T> GoogleAPIRequest<'a> for T
where
    T: AsMut<GoogleAPIRequestFields<'a>>,
{
    fn bearer_token(&mut self) -> &mut Option<&'a str> {
        &mut self.as_mut().bearer_token
    }

    fn key(&mut self) -> &mut Option<&'a str> {
        &mut self.as_mut().key
    }

    fn referrer(&mut self) -> &mut Option<&'a str> {
        &mut self.as_mut().referrer
    }
}

/// Machine-readable category of a [`YouTubeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    MissingParams,
    InvalidParams,
    UpstreamError,
    Transport,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingParams => "MISSING_PARAMS",
            ErrorCode::InvalidParams => "INVALID_PARAMS",
            ErrorCode::UpstreamError => "UPSTREAM_ERROR",
            ErrorCode::Transport => "TRANSPORT_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("Missing params: {0}")]
    MissingParams(String),
    #[error("Invalid params: {0}")]
    InvalidParams(String),
    #[error("Upstream error {status}: {message}")]
    Upstream {
        status: StatusCode,
        message: String,
        reason: Option<String>,
        payload: Option<serde_json::Value>,
    },
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    HttpError(#[from] hyper::Error),
    #[error("Legacy HTTP error: {0}")]
    LegacyHttpError(#[from] hyper_util::client::legacy::Error),
    #[error("Other error: {0}")]
    Other(Box<dyn Error + Send + Sync>),
}

impl YouTubeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            YouTubeError::MissingParams(_) => ErrorCode::MissingParams,
            YouTubeError::InvalidParams(_) => ErrorCode::InvalidParams,
            YouTubeError::Upstream { .. } => ErrorCode::UpstreamError,
            _ => ErrorCode::Transport,
        }
    }

    /// Upstream HTTP status, when the failure came from the API itself.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            YouTubeError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 429s and for quota or rate-limit reasons the API reports as 403.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            YouTubeError::Upstream { status, reason, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS
                    || matches!(
                        reason.as_deref(),
                        Some("quotaExceeded" | "rateLimitExceeded" | "userRateLimitExceeded")
                    )
            }
            _ => false,
        }
    }
}

/// Entry point: owns configuration, default credentials and the transport.
pub struct YouTubeDataV3Client {
    transport: Box<dyn Transport>,
    config: ClientConfig,
    credentials: Credentials,
}

impl YouTubeDataV3Client {
    /// Builds a client over the default hyper transport.
    pub fn new(config: ClientConfig, credentials: Credentials) -> Result<Self, ClientError> {
        let transport = HyperTransport::new(&config)?;
        Ok(Self::with_transport(transport, config, credentials))
    }

    pub fn with_transport(
        transport: impl Transport + 'static,
        config: ClientConfig,
        credentials: Credentials,
    ) -> Self {
        YouTubeDataV3Client {
            transport: Box::new(transport),
            config,
            credentials,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn fields(&self) -> GoogleAPIRequestFields<'_> {
        GoogleAPIRequestFields::from_credentials(&self.credentials)
    }

    pub fn channel_info(&self) -> ChannelInfoRequest<'_> {
        ChannelInfoRequest::new(self.transport.as_ref(), &self.config, self.fields())
    }

    pub fn playlist_info<I, S>(&self, playlist_ids: I) -> PlaylistInfoRequest<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PlaylistInfoRequest::new(self.transport.as_ref(), &self.config, self.fields(), join_ids(playlist_ids))
    }

    pub fn playlists(&self) -> ListPlaylistsRequest<'_> {
        ListPlaylistsRequest::new(self.transport.as_ref(), &self.config, self.fields())
    }

    pub fn playlist_items(&self) -> ListPlaylistItemsRequest<'_> {
        ListPlaylistItemsRequest::new(self.transport.as_ref(), &self.config, self.fields())
    }

    pub fn video_info<I, S>(&self, video_ids: I) -> VideoInfoRequest<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        VideoInfoRequest::new(self.transport.as_ref(), &self.config, self.fields(), join_ids(video_ids))
    }

    pub fn videos_by_filter(&self) -> ListVideosByFilterRequest<'_> {
        ListVideosByFilterRequest::new(self.transport.as_ref(), &self.config, self.fields())
    }

    pub fn comment_threads(&self) -> ListCommentThreadsRequest<'_> {
        ListCommentThreadsRequest::new(self.transport.as_ref(), &self.config, self.fields())
    }

    pub fn comment_thread_info<I, S>(&self, comment_thread_ids: I) -> CommentThreadInfoRequest<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommentThreadInfoRequest::new(
            self.transport.as_ref(),
            &self.config,
            self.fields(),
            join_ids(comment_thread_ids),
        )
    }

    pub fn comments_by_parent(&self, parent_id: impl Into<String>) -> ListCommentsByParentRequest<'_> {
        ListCommentsByParentRequest::new(
            self.transport.as_ref(),
            &self.config,
            self.fields(),
            non_empty(parent_id),
        )
    }

    pub fn comment_info<I, S>(&self, comment_ids: I) -> CommentInfoRequest<'_>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommentInfoRequest::new(self.transport.as_ref(), &self.config, self.fields(), join_ids(comment_ids))
    }

    pub fn video_categories(&self) -> VideoCategoriesRequest<'_> {
        VideoCategoriesRequest::new(self.transport.as_ref(), &self.config, self.fields())
    }

    pub fn guide_categories(&self) -> GuideCategoriesRequest<'_> {
        GuideCategoriesRequest::new(self.transport.as_ref(), &self.config, self.fields())
    }
}

/// Comma-joins an ID list; an empty list is no selector at all.
pub(crate) fn join_ids<I, S>(ids: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let ids: Vec<String> = ids
        .into_iter()
        .map(Into::into)
        .filter(|id| !id.is_empty())
        .collect();
    if ids.is_empty() {
        None
    } else {
        Some(ids.join(","))
    }
}

pub(crate) fn non_empty(value: impl Into<String>) -> Option<String> {
    Some(value.into()).filter(|v| !v.is_empty())
}
