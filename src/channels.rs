use serde_json::Value;
use crate::mapper;
use crate::models::Channel;
use crate::pager::fetch_once;
use crate::query::{Parts, QueryBuilder, Resource};
use crate::transport::Transport;
use crate::{join_ids, non_empty, ClientConfig, GoogleAPIRequestFields, YouTubeError};

/// `channels.list` by IDs, by legacy username, or for the authorized user.
pub struct ChannelInfoRequest<'a> {
    pub transport: &'a dyn Transport,
    pub config: &'a ClientConfig,
    pub fields: GoogleAPIRequestFields<'a>,
    pub channel_ids: Option<String>,
    pub for_username: Option<String>,
    pub mine: bool,
    pub parts: Option<Parts>,
    pub hl: Option<String>,
}

impl<'a> AsMut<GoogleAPIRequestFields<'a>> for ChannelInfoRequest<'a> {
    fn as_mut(&mut self) -> &mut GoogleAPIRequestFields<'a> {
        &mut self.fields
    }
}

impl<'a> ChannelInfoRequest<'a> {
    pub(crate) fn new(
        transport: &'a dyn Transport,
        config: &'a ClientConfig,
        fields: GoogleAPIRequestFields<'a>,
    ) -> Self {
        ChannelInfoRequest {
            transport,
            config,
            fields,
            channel_ids: None,
            for_username: None,
            mine: false,
            parts: None,
            hl: None,
        }
    }

    pub fn channel_id<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channel_ids = join_ids(ids);
        self
    }

    pub fn for_username(mut self, username: impl Into<String>) -> Self {
        self.for_username = non_empty(username);
        self
    }

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

    pub async fn send_json(self) -> Result<Vec<Value>, YouTubeError> {
        let parts = self.parts.clone().unwrap_or_else(|| Resource::Channels.default_parts());
        let query = QueryBuilder::new(Resource::Channels)
            .parts(Some(&parts))?
            .selector(vec![
                ("id", self.channel_ids.clone()),
                ("forUsername", self.for_username.clone()),
                ("mine", self.mine.then(|| "true".to_string())),
            ])?
            .optional("hl", self.hl.as_deref())
            .build();

        Ok(fetch_once(self.transport, Resource::Channels, &query, &self.fields).await?.items)
    }

    pub async fn send(self) -> Result<Vec<Channel>, YouTubeError> {
        mapper::map_items(self.send_json().await?)
    }
}
