use serde_json::Value;
use crate::mapper;
use crate::models::PlaylistItem;
use crate::pager::{fetch_once, Page, Pager};
use crate::query::{Parts, Query, QueryBuilder, Resource};
use crate::transport::Transport;
use crate::{join_ids, non_empty, ClientConfig, GoogleAPIRequestFields, YouTubeError};

/// `playlistItems.list`, selected by item IDs or by playlist.
///
/// Only the playlist selector paginates; an ID lookup is a single request.
pub struct ListPlaylistItemsRequest<'a> {
    pub transport: &'a dyn Transport,
    pub config: &'a ClientConfig,
    pub fields: GoogleAPIRequestFields<'a>,
    pub playlist_item_id: Option<String>,
    pub playlist_id: Option<String>,
    pub video_id: Option<String>,
    pub parts: Option<Parts>,
    pub count: Option<usize>,
    pub page_size: Option<u32>,
}

impl<'a> AsMut<GoogleAPIRequestFields<'a>> for ListPlaylistItemsRequest<'a> {
    fn as_mut(&mut self) -> &mut GoogleAPIRequestFields<'a> {
        &mut self.fields
    }
}

impl<'a> ListPlaylistItemsRequest<'a> {
    pub(crate) fn new(
        transport: &'a dyn Transport,
        config: &'a ClientConfig,
        fields: GoogleAPIRequestFields<'a>,
    ) -> Self {
        ListPlaylistItemsRequest {
            transport,
            config,
            fields,
            playlist_item_id: None,
            playlist_id: None,
            video_id: None,
            parts: None,
            count: None,
            page_size: None,
        }
    }

    pub fn playlist_item_id<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.playlist_item_id = join_ids(ids);
        self
    }

    pub fn playlist_id(mut self, playlist_id: impl Into<String>) -> Self {
        self.playlist_id = non_empty(playlist_id);
        self
    }

    /// Only items holding this video.
    pub fn video_id(mut self, video_id: impl Into<String>) -> Self {
        self.video_id = non_empty(video_id);
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

    /// Follows the cursor until the playlist is exhausted.
    pub fn all(mut self) -> Self {
        self.count = Some(usize::MAX);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    fn query(&self) -> Result<Query, YouTubeError> {
        let parts = self.parts.clone().unwrap_or_else(|| Resource::PlaylistItems.default_parts());
        Ok(QueryBuilder::new(Resource::PlaylistItems)
            .parts(Some(&parts))?
            .selector(vec![
                ("id", self.playlist_item_id.clone()),
                ("playlistId", self.playlist_id.clone()),
            ])?
            .optional("videoId", self.video_id.as_deref())
            .build())
    }

    pub async fn send_json(self) -> Result<Page<Value>, YouTubeError> {
        let query = self.query()?;

        if self.playlist_item_id.is_some() {
            return fetch_once(self.transport, Resource::PlaylistItems, &query, &self.fields).await;
        }

        Pager::new(
            self.transport,
            Resource::PlaylistItems,
            query,
            self.fields,
            self.count.unwrap_or(self.config.default_count),
            self.page_size.unwrap_or(self.config.default_page_size),
        )
        .collect()
        .await
    }

    pub async fn send(self) -> Result<Page<PlaylistItem>, YouTubeError> {
        mapper::map_page(self.send_json().await?)
    }
}
