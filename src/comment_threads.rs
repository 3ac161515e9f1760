use serde_json::Value;
use crate::mapper;
use crate::models::CommentThread;
use crate::pager::{fetch_once, Page, Pager};
use crate::query::{CommentOrder, ModerationStatus, Parts, Query, QueryBuilder, Resource, TextFormat};
use crate::transport::Transport;
use crate::{non_empty, ClientConfig, GoogleAPIRequestFields, YouTubeError};

/// `commentThreads.list` by filter: a channel's whole discussion, a channel, or a video.
pub struct ListCommentThreadsRequest<'a> {
    pub transport: &'a dyn Transport,
    pub config: &'a ClientConfig,
    pub fields: GoogleAPIRequestFields<'a>,
    pub all_threads_related_to_channel_id: Option<String>,
    pub channel_id: Option<String>,
    pub video_id: Option<String>,
    pub order: Option<CommentOrder>,
    pub search_terms: Option<String>,
    pub text_format: Option<TextFormat>,
    pub moderation_status: Option<ModerationStatus>,
    pub parts: Option<Parts>,
    pub count: Option<usize>,
    pub page_size: Option<u32>,
}

impl<'a> AsMut<GoogleAPIRequestFields<'a>> for ListCommentThreadsRequest<'a> {
    fn as_mut(&mut self) -> &mut GoogleAPIRequestFields<'a> {
        &mut self.fields
    }
}

impl<'a> ListCommentThreadsRequest<'a> {
    pub(crate) fn new(
        transport: &'a dyn Transport,
        config: &'a ClientConfig,
        fields: GoogleAPIRequestFields<'a>,
    ) -> Self {
        ListCommentThreadsRequest {
            transport,
            config,
            fields,
            all_threads_related_to_channel_id: None,
            channel_id: None,
            video_id: None,
            order: None,
            search_terms: None,
            text_format: None,
            moderation_status: None,
            parts: None,
            count: None,
            page_size: None,
        }
    }

    pub fn all_threads_related_to_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.all_threads_related_to_channel_id = non_empty(channel_id);
        self
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = non_empty(channel_id);
        self
    }

    pub fn video_id(mut self, video_id: impl Into<String>) -> Self {
        self.video_id = non_empty(video_id);
        self
    }

    pub fn order(mut self, order: CommentOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn search_terms(mut self, terms: impl Into<String>) -> Self {
        self.search_terms = non_empty(terms);
        self
    }

    pub fn text_format(mut self, text_format: TextFormat) -> Self {
        self.text_format = Some(text_format);
        self
    }

    /// Needs the channel owner's bearer token.
    pub fn moderation_status(mut self, status: ModerationStatus) -> Self {
        self.moderation_status = Some(status);
        self
    }

    pub fn parts<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parts = Some(parts.into_iter().collect());
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn all(mut self) -> Self {
        self.count = Some(usize::MAX);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    fn query(&self) -> Result<Query, YouTubeError> {
        let parts = self.parts.clone().unwrap_or_else(|| Resource::CommentThreads.default_parts());
        Ok(QueryBuilder::new(Resource::CommentThreads)
            .parts(Some(&parts))?
            .selector(vec![
                ("allThreadsRelatedToChannelId", self.all_threads_related_to_channel_id.clone()),
                ("channelId", self.channel_id.clone()),
                ("videoId", self.video_id.clone()),
            ])?
            .optional("order", self.order)
            .optional("searchTerms", self.search_terms.as_deref())
            .optional("textFormat", self.text_format)
            .optional("moderationStatus", self.moderation_status)
            .build())
    }

    pub async fn send_json(self) -> Result<Page<Value>, YouTubeError> {
        let query = self.query()?;
        Pager::new(
            self.transport,
            Resource::CommentThreads,
            query,
            self.fields,
            self.count.unwrap_or(self.config.default_count),
            self.page_size.unwrap_or(self.config.default_page_size),
        )
        .collect()
        .await
    }

    pub async fn send(self) -> Result<Page<CommentThread>, YouTubeError> {
        mapper::map_page(self.send_json().await?)
    }
}

/// `commentThreads.list` by a comma-joined ID list. Never paginates.
pub struct CommentThreadInfoRequest<'a> {
    pub transport: &'a dyn Transport,
    pub config: &'a ClientConfig,
    pub fields: GoogleAPIRequestFields<'a>,
    pub comment_thread_ids: Option<String>,
    pub text_format: Option<TextFormat>,
    pub parts: Option<Parts>,
}

impl<'a> AsMut<GoogleAPIRequestFields<'a>> for CommentThreadInfoRequest<'a> {
    fn as_mut(&mut self) -> &mut GoogleAPIRequestFields<'a> {
        &mut self.fields
    }
}

impl<'a> CommentThreadInfoRequest<'a> {
    pub(crate) fn new(
        transport: &'a dyn Transport,
        config: &'a ClientConfig,
        fields: GoogleAPIRequestFields<'a>,
        comment_thread_ids: Option<String>,
    ) -> Self {
        CommentThreadInfoRequest {
            transport,
            config,
            fields,
            comment_thread_ids,
            text_format: None,
            parts: None,
        }
    }

    pub fn text_format(mut self, text_format: TextFormat) -> Self {
        self.text_format = Some(text_format);
        self
    }

    pub fn parts<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parts = Some(parts.into_iter().collect());
        self
    }

    pub async fn send_json(self) -> Result<Vec<Value>, YouTubeError> {
        let parts = self.parts.clone().unwrap_or_else(|| Resource::CommentThreads.default_parts());
        let query = QueryBuilder::new(Resource::CommentThreads)
            .parts(Some(&parts))?
            .selector(vec![("id", self.comment_thread_ids.clone())])?
            .optional("textFormat", self.text_format)
            .build();

        Ok(fetch_once(self.transport, Resource::CommentThreads, &query, &self.fields).await?.items)
    }

    pub async fn send(self) -> Result<Vec<CommentThread>, YouTubeError> {
        mapper::map_items(self.send_json().await?)
    }
}
