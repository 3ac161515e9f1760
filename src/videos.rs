use serde_json::Value;
use crate::mapper;
use crate::models::Video;
use crate::pager::{fetch_once, Page, Pager};
use crate::query::{Parts, Query, QueryBuilder, Rating, Resource, VideoChart};
use crate::transport::Transport;
use crate::{non_empty, ClientConfig, GoogleAPIRequestFields, YouTubeError};

/// `videos.list` by a comma-joined ID list. Never paginates.
pub struct VideoInfoRequest<'a> {
    pub transport: &'a dyn Transport,
    pub config: &'a ClientConfig,
    pub fields: GoogleAPIRequestFields<'a>,
    pub video_ids: Option<String>,
    pub parts: Option<Parts>,
    pub hl: Option<String>,
}

impl<'a> AsMut<GoogleAPIRequestFields<'a>> for VideoInfoRequest<'a> {
    fn as_mut(&mut self) -> &mut GoogleAPIRequestFields<'a> {
        &mut self.fields
    }
}

impl<'a> VideoInfoRequest<'a> {
    pub(crate) fn new(
        transport: &'a dyn Transport,
        config: &'a ClientConfig,
        fields: GoogleAPIRequestFields<'a>,
        video_ids: Option<String>,
    ) -> Self {
        VideoInfoRequest {
            transport,
            config,
            fields,
            video_ids,
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

    pub fn hl(mut self, hl: impl Into<String>) -> Self {
        self.hl = non_empty(hl);
        self
    }

    pub async fn send_json(self) -> Result<Vec<Value>, YouTubeError> {
        let parts = self.parts.clone().unwrap_or_else(|| Resource::Videos.default_parts());
        let query = QueryBuilder::new(Resource::Videos)
            .parts(Some(&parts))?
            .selector(vec![("id", self.video_ids.clone())])?
            .optional("hl", self.hl.as_deref())
            .build();

        Ok(fetch_once(self.transport, Resource::Videos, &query, &self.fields).await?.items)
    }

    pub async fn send(self) -> Result<Vec<Video>, YouTubeError> {
        mapper::map_items(self.send_json().await?)
    }
}

/// `videos.list` by chart or by the authorized user's rating.
pub struct ListVideosByFilterRequest<'a> {
    pub transport: &'a dyn Transport,
    pub config: &'a ClientConfig,
    pub fields: GoogleAPIRequestFields<'a>,
    pub chart: Option<VideoChart>,
    pub my_rating: Option<Rating>,
    pub region_code: Option<String>,
    pub category_id: Option<String>,
    pub hl: Option<String>,
    pub parts: Option<Parts>,
    pub count: Option<usize>,
    pub page_size: Option<u32>,
}

impl<'a> AsMut<GoogleAPIRequestFields<'a>> for ListVideosByFilterRequest<'a> {
    fn as_mut(&mut self) -> &mut GoogleAPIRequestFields<'a> {
        &mut self.fields
    }
}

impl<'a> ListVideosByFilterRequest<'a> {
    pub(crate) fn new(
        transport: &'a dyn Transport,
        config: &'a ClientConfig,
        fields: GoogleAPIRequestFields<'a>,
    ) -> Self {
        ListVideosByFilterRequest {
            transport,
            config,
            fields,
            chart: None,
            my_rating: None,
            region_code: None,
            category_id: None,
            hl: None,
            parts: None,
            count: None,
            page_size: None,
        }
    }

    pub fn chart(mut self, chart: VideoChart) -> Self {
        self.chart = Some(chart);
        self
    }

    /// Videos the authorized user rated; needs a bearer token.
    pub fn my_rating(mut self, rating: Rating) -> Self {
        self.my_rating = Some(rating);
        self
    }

    /// Only used together with `chart`.
    pub fn region_code(mut self, region_code: impl Into<String>) -> Self {
        self.region_code = non_empty(region_code);
        self
    }

    /// Only used together with `chart`.
    pub fn category_id(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = non_empty(category_id);
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
        let parts = self.parts.clone().unwrap_or_else(|| Resource::Videos.default_parts());
        Ok(QueryBuilder::new(Resource::Videos)
            .parts(Some(&parts))?
            .selector(vec![
                ("chart", self.chart.map(|c| c.to_string())),
                ("myRating", self.my_rating.map(|r| r.to_string())),
            ])?
            .optional("regionCode", self.region_code.as_deref())
            .optional("videoCategoryId", self.category_id.as_deref())
            .optional("hl", self.hl.as_deref())
            .build())
    }

    pub async fn send_json(self) -> Result<Page<Value>, YouTubeError> {
        let query = self.query()?;
        Pager::new(
            self.transport,
            Resource::Videos,
            query,
            self.fields,
            self.count.unwrap_or(self.config.default_count),
            self.page_size.unwrap_or(self.config.default_page_size),
        )
        .collect()
        .await
    }

    pub async fn send(self) -> Result<Page<Video>, YouTubeError> {
        mapper::map_page(self.send_json().await?)
    }
}
