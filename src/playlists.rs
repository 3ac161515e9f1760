use serde_json::Value;
use crate::mapper;
use crate::models::Playlist;
use crate::pager::{fetch_once, Page, Pager};
use crate::query::{Parts, Query, QueryBuilder, Resource};
use crate::transport::Transport;
use crate::{non_empty, ClientConfig, GoogleAPIRequestFields, YouTubeError};

/// `playlists.list` by a comma-joined ID list. Never paginates.
pub struct PlaylistInfoRequest<'a> {
    pub transport: &'a dyn Transport,
    pub config: &'a ClientConfig,
    pub fields: GoogleAPIRequestFields<'a>,
    pub playlist_ids: Option<String>,
    pub parts: Option<Parts>,
    pub hl: Option<String>,
}

impl<'a> AsMut<GoogleAPIRequestFields<'a>> for PlaylistInfoRequest<'a> {
    fn as_mut(&mut self) -> &mut GoogleAPIRequestFields<'a> {
        &mut self.fields
    }
}

impl<'a> PlaylistInfoRequest<'a> {
    pub(crate) fn new(
        transport: &'a dyn Transport,
        config: &'a ClientConfig,
        fields: GoogleAPIRequestFields<'a>,
        playlist_ids: Option<String>,
    ) -> Self {
        PlaylistInfoRequest {
            transport,
            config,
            fields,
            playlist_ids,
            parts: None,
            hl: None,
        }
    }

    pub fn parts<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parts = Some(parts.into_iter().collect());
        self
    }

    /// Language for `snippet.localized`.
    pub fn hl(mut self, hl: impl Into<String>) -> Self {
        self.hl = non_empty(hl);
        self
    }

    pub async fn send_json(self) -> Result<Vec<Value>, YouTubeError> {
        let parts = self.parts.clone().unwrap_or_else(|| Resource::Playlists.default_parts());
        let query = QueryBuilder::new(Resource::Playlists)
            .parts(Some(&parts))?
            .selector(vec![("id", self.playlist_ids.clone())])?
            .optional("hl", self.hl.as_deref())
            .build();

        Ok(fetch_once(self.transport, Resource::Playlists, &query, &self.fields).await?.items)
    }

    pub async fn send(self) -> Result<Vec<Playlist>, YouTubeError> {
        mapper::map_items(self.send_json().await?)
    }
}

/// `playlists.list` for a channel, or for the authorized user with `mine`.
pub struct ListPlaylistsRequest<'a> {
    pub transport: &'a dyn Transport,
    pub config: &'a ClientConfig,
    pub fields: GoogleAPIRequestFields<'a>,
    pub channel_id: Option<String>,
    pub mine: bool,
    pub parts: Option<Parts>,
    pub hl: Option<String>,
    pub count: Option<usize>,
    pub page_size: Option<u32>,
}

impl<'a> AsMut<GoogleAPIRequestFields<'a>> for ListPlaylistsRequest<'a> {
    fn as_mut(&mut self) -> &mut GoogleAPIRequestFields<'a> {
        &mut self.fields
    }
}

impl<'a> ListPlaylistsRequest<'a> {
    pub(crate) fn new(
        transport: &'a dyn Transport,
        config: &'a ClientConfig,
        fields: GoogleAPIRequestFields<'a>,
    ) -> Self {
        ListPlaylistsRequest {
            transport,
            config,
            fields,
            channel_id: None,
            mine: false,
            parts: None,
            hl: None,
            count: None,
            page_size: None,
        }
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = non_empty(channel_id);
        self
    }

    /// Playlists of the authorized user; needs a bearer token.
    pub fn mine(mut self) -> Self {
        self.mine = true;
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

    pub fn hl(mut self, hl: impl Into<String>) -> Self {
        self.hl = non_empty(hl);
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
        let parts = self.parts.clone().unwrap_or_else(|| Resource::Playlists.default_parts());
        Ok(QueryBuilder::new(Resource::Playlists)
            .parts(Some(&parts))?
            .selector(vec![
                ("channelId", self.channel_id.clone()),
                ("mine", self.mine.then(|| "true".to_string())),
            ])?
            .optional("hl", self.hl.as_deref())
            .build())
    }

    pub async fn send_json(self) -> Result<Page<Value>, YouTubeError> {
        let query = self.query()?;
        Pager::new(
            self.transport,
            Resource::Playlists,
            query,
            self.fields,
            self.count.unwrap_or(self.config.default_count),
            self.page_size.unwrap_or(self.config.default_page_size),
        )
        .collect()
        .await
    }

    pub async fn send(self) -> Result<Page<Playlist>, YouTubeError> {
        mapper::map_page(self.send_json().await?)
    }
}
