//! Cursor-following aggregation over list endpoints.

use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;
use crate::models::PageInfo;
use crate::query::{Query, Resource};
use crate::transport::Transport;
use crate::{GoogleAPIRequestFields, YouTubeError};

/// Items of a list call plus the `pageInfo` of the last page fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub summary: PageInfo,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    #[serde(default)]
    items: Vec<Value>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
    #[serde(rename = "pageInfo", default)]
    page_info: PageInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PagerState {
    Init,
    Fetching(Option<String>),
    Done,
}

/// Follows `nextPageToken` until `count` items are gathered or the upstream
/// result set runs out. Never returns more than `count` items.
pub struct Pager<'a> {
    transport: &'a dyn Transport,
    resource: Resource,
    query: Query,
    auth: GoogleAPIRequestFields<'a>,
    count: usize,
    page_size: u32,
}

impl<'a> Pager<'a> {
    pub fn new(
        transport: &'a dyn Transport,
        resource: Resource,
        query: Query,
        auth: GoogleAPIRequestFields<'a>,
        count: usize,
        page_size: u32,
    ) -> Self {
        Pager {
            transport,
            resource,
            query,
            auth,
            count,
            page_size,
        }
    }

    /// Runs the fetch loop. A failure on any page discards everything
    /// gathered so far.
    #[instrument(skip(self), fields(resource = %self.resource, count = self.count))]
    pub async fn collect(self) -> Result<Page<Value>, YouTubeError> {
        let mut items: Vec<Value> = Vec::new();
        let mut summary = PageInfo::default();
        let mut state = PagerState::Init;
        let mut pages = 0usize;

        loop {
            state = match state {
                PagerState::Init => PagerState::Fetching(None),
                PagerState::Fetching(cursor) => {
                    let mut query = self.query.clone();
                    query.set("maxResults", self.page_size.to_string());
                    if let Some(token) = cursor {
                        query.set("pageToken", token);
                    }

                    let page = fetch_page(self.transport, self.resource, &query, &self.auth).await?;
                    pages += 1;
                    tracing::debug!(
                        page = pages,
                        returned_items = page.items.len(),
                        has_next = page.next_page_token.is_some(),
                        "fetched page"
                    );

                    items.extend(page.items);
                    summary = page.page_info;

                    if items.len() >= self.count {
                        items.truncate(self.count);
                        PagerState::Done
                    } else {
                        match page.next_page_token {
                            Some(token) => PagerState::Fetching(Some(token)),
                            None => PagerState::Done,
                        }
                    }
                }
                PagerState::Done => break,
            };
        }

        Ok(Page { items, summary })
    }
}

/// Single request, no cursor following. Used by ID-keyed lookups.
#[instrument(skip(transport, resource, query, auth), fields(resource = %resource))]
pub async fn fetch_once(
    transport: &dyn Transport,
    resource: Resource,
    query: &Query,
    auth: &GoogleAPIRequestFields<'_>,
) -> Result<Page<Value>, YouTubeError> {
    let page = fetch_page(transport, resource, query, auth).await?;
    tracing::debug!(returned_items = page.items.len(), "fetched single page");
    Ok(Page {
        items: page.items,
        summary: page.page_info,
    })
}

async fn fetch_page(
    transport: &dyn Transport,
    resource: Resource,
    query: &Query,
    auth: &GoogleAPIRequestFields<'_>,
) -> Result<RawPage, YouTubeError> {
    let body = transport.get(resource.path(), query, auth).await?;
    Ok(serde_json::from_value(body)?)
}
