use serde_json::Value;
use crate::mapper;
use crate::models::{GuideCategory, VideoCategory};
use crate::pager::fetch_once;
use crate::query::{Parts, QueryBuilder, Resource};
use crate::transport::Transport;
use crate::{join_ids, non_empty, ClientConfig, GoogleAPIRequestFields, YouTubeError};

/// `videoCategories.list` by IDs or by region.
pub struct VideoCategoriesRequest<'a> {
    pub transport: &'a dyn Transport,
    pub config: &'a ClientConfig,
    pub fields: GoogleAPIRequestFields<'a>,
    pub category_ids: Option<String>,
    pub region_code: Option<String>,
    pub hl: Option<String>,
    pub parts: Option<Parts>,
}

impl<'a> AsMut<GoogleAPIRequestFields<'a>> for VideoCategoriesRequest<'a> {
    fn as_mut(&mut self) -> &mut GoogleAPIRequestFields<'a> {
        &mut self.fields
    }
}

impl<'a> VideoCategoriesRequest<'a> {
    pub(crate) fn new(
        transport: &'a dyn Transport,
        config: &'a ClientConfig,
        fields: GoogleAPIRequestFields<'a>,
    ) -> Self {
        VideoCategoriesRequest {
            transport,
            config,
            fields,
            category_ids: None,
            region_code: None,
            hl: None,
            parts: None,
        }
    }

    pub fn category_id<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_ids = join_ids(ids);
        self
    }

    pub fn region_code(mut self, region_code: impl Into<String>) -> Self {
        self.region_code = non_empty(region_code);
        self
    }

    pub fn hl(mut self, hl: impl Into<String>) -> Self {
        self.hl = non_empty(hl);
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
        let parts = self.parts.clone().unwrap_or_else(|| Resource::VideoCategories.default_parts());
        let query = QueryBuilder::new(Resource::VideoCategories)
            .parts(Some(&parts))?
            .selector(vec![
                ("id", self.category_ids.clone()),
                ("regionCode", self.region_code.clone()),
            ])?
            .optional("hl", self.hl.as_deref())
            .build();

        Ok(fetch_once(self.transport, Resource::VideoCategories, &query, &self.fields).await?.items)
    }

    pub async fn send(self) -> Result<Vec<VideoCategory>, YouTubeError> {
        mapper::map_items(self.send_json().await?)
    }
}

/// `guideCategories.list` by IDs or by region.
pub struct GuideCategoriesRequest<'a> {
    pub transport: &'a dyn Transport,
    pub config: &'a ClientConfig,
    pub fields: GoogleAPIRequestFields<'a>,
    pub category_ids: Option<String>,
    pub region_code: Option<String>,
    pub hl: Option<String>,
    pub parts: Option<Parts>,
}

impl<'a> AsMut<GoogleAPIRequestFields<'a>> for GuideCategoriesRequest<'a> {
    fn as_mut(&mut self) -> &mut GoogleAPIRequestFields<'a> {
        &mut self.fields
    }
}

impl<'a> GuideCategoriesRequest<'a> {
    pub(crate) fn new(
        transport: &'a dyn Transport,
        config: &'a ClientConfig,
        fields: GoogleAPIRequestFields<'a>,
    ) -> Self {
        GuideCategoriesRequest {
            transport,
            config,
            fields,
            category_ids: None,
            region_code: None,
            hl: None,
            parts: None,
        }
    }

    pub fn category_id<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_ids = join_ids(ids);
        self
    }

    pub fn region_code(mut self, region_code: impl Into<String>) -> Self {
        self.region_code = non_empty(region_code);
        self
    }

    pub fn hl(mut self, hl: impl Into<String>) -> Self {
        self.hl = non_empty(hl);
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
        let parts = self.parts.clone().unwrap_or_else(|| Resource::GuideCategories.default_parts());
        let query = QueryBuilder::new(Resource::GuideCategories)
            .parts(Some(&parts))?
            .selector(vec![
                ("id", self.category_ids.clone()),
                ("regionCode", self.region_code.clone()),
            ])?
            .optional("hl", self.hl.as_deref())
            .build();

        Ok(fetch_once(self.transport, Resource::GuideCategories, &query, &self.fields).await?.items)
    }

    pub async fn send(self) -> Result<Vec<GuideCategory>, YouTubeError> {
        mapper::map_items(self.send_json().await?)
    }
}
