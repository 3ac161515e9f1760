use serde_json::Value;
use crate::mapper;
use crate::models::Comment;
use crate::pager::{fetch_once, Page, Pager};
use crate::query::{Parts, Query, QueryBuilder, Resource, TextFormat};
use crate::transport::Transport;
use crate::{ClientConfig, GoogleAPIRequestFields, YouTubeError};

/// `comments.list` for the replies under one top-level comment.
pub struct ListCommentsByParentRequest<'a> {
    pub transport: &'a dyn Transport,
    pub config: &'a ClientConfig,
    pub fields: GoogleAPIRequestFields<'a>,
    pub parent_id: Option<String>,
    pub text_format: Option<TextFormat>,
    pub parts: Option<Parts>,
    pub count: Option<usize>,
    pub page_size: Option<u32>,
}

impl<'a> AsMut<GoogleAPIRequestFields<'a>> for ListCommentsByParentRequest<'a> {
    fn as_mut(&mut self) -> &mut GoogleAPIRequestFields<'a> {
        &mut self.fields
    }
}

impl<'a> ListCommentsByParentRequest<'a> {
    pub(crate) fn new(
        transport: &'a dyn Transport,
        config: &'a ClientConfig,
        fields: GoogleAPIRequestFields<'a>,
        parent_id: Option<String>,
    ) -> Self {
        ListCommentsByParentRequest {
            transport,
            config,
            fields,
            parent_id,
            text_format: None,
            parts: None,
            count: None,
            page_size: None,
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
        let parts = self.parts.clone().unwrap_or_else(|| Resource::Comments.default_parts());
        Ok(QueryBuilder::new(Resource::Comments)
            .parts(Some(&parts))?
            .selector(vec![("parentId", self.parent_id.clone())])?
            .optional("textFormat", self.text_format)
            .build())
    }

    pub async fn send_json(self) -> Result<Page<Value>, YouTubeError> {
        let query = self.query()?;
        Pager::new(
            self.transport,
            Resource::Comments,
            query,
            self.fields,
            self.count.unwrap_or(self.config.default_count),
            self.page_size.unwrap_or(self.config.default_page_size),
        )
        .collect()
        .await
    }

    pub async fn send(self) -> Result<Page<Comment>, YouTubeError> {
        mapper::map_page(self.send_json().await?)
    }
}

/// `comments.list` by a comma-joined ID list. Never paginates.
pub struct CommentInfoRequest<'a> {
    pub transport: &'a dyn Transport,
    pub config: &'a ClientConfig,
    pub fields: GoogleAPIRequestFields<'a>,
    pub comment_ids: Option<String>,
    pub text_format: Option<TextFormat>,
    pub parts: Option<Parts>,
}

impl<'a> AsMut<GoogleAPIRequestFields<'a>> for CommentInfoRequest<'a> {
    fn as_mut(&mut self) -> &mut GoogleAPIRequestFields<'a> {
        &mut self.fields
    }
}

impl<'a> CommentInfoRequest<'a> {
    pub(crate) fn new(
        transport: &'a dyn Transport,
        config: &'a ClientConfig,
        fields: GoogleAPIRequestFields<'a>,
        comment_ids: Option<String>,
    ) -> Self {
        CommentInfoRequest {
            transport,
            config,
            fields,
            comment_ids,
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
        let parts = self.parts.clone().unwrap_or_else(|| Resource::Comments.default_parts());
        let query = QueryBuilder::new(Resource::Comments)
            .parts(Some(&parts))?
            .selector(vec![("id", self.comment_ids.clone())])?
            .optional("textFormat", self.text_format)
            .build();

        Ok(fetch_once(self.transport, Resource::Comments, &query, &self.fields).await?.items)
    }

    pub async fn send(self) -> Result<Vec<Comment>, YouTubeError> {
        mapper::map_items(self.send_json().await?)
    }
}
