use std::time::Duration;
use async_trait::async_trait;
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{Method, Request, StatusCode};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use native_tls::TlsConnector;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;
use crate::query::Query;
use crate::{ClientConfig, ClientError, GoogleAPIRequestFields, YouTubeError};

pub type HttpsClient = Client<HttpsConnector<HttpConnector>, Empty<Bytes>>;

/// Issues one GET against a resource path and returns the parsed JSON body.
///
/// Non-2xx responses come back as [`YouTubeError::Upstream`]; nothing is retried.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(
        &self,
        path: &str,
        query: &Query,
        auth: &GoogleAPIRequestFields<'_>,
    ) -> Result<Value, YouTubeError>;
}

pub fn initialize_client(config: &ClientConfig) -> Result<HttpsClient, ClientError> {
    let mut http = HttpConnector::new();
    http.enforce_http(false);

    let tls = TlsConnector::builder()
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .build()?;

    let https = HttpsConnector::from((http, tls.into()));

    let client = Client::builder(TokioExecutor::new())
        .build::<_, Empty<Bytes>>(https);

    Ok(client)
}

pub struct HyperTransport {
    client: HttpsClient,
    base_url: String,
    timeout: Duration,
}

impl HyperTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::with_client(initialize_client(config)?, config))
    }

    pub fn with_client(client: HttpsClient, config: &ClientConfig) -> Self {
        HyperTransport {
            client,
            base_url: config.base_url.clone(),
            timeout: config.timeout,
        }
    }

    async fn execute(&self, req: Request<Empty<Bytes>>) -> Result<(StatusCode, Bytes), YouTubeError> {
        let res = self.client.request(req).await?;
        let status = res.status();
        let body = res.into_body().collect().await?.to_bytes();
        Ok((status, body))
    }
}

#[async_trait]
impl Transport for HyperTransport {
    #[instrument(skip(self, query, auth), fields(params = %query.to_query_string()))]
    async fn get(
        &self,
        path: &str,
        query: &Query,
        auth: &GoogleAPIRequestFields<'_>,
    ) -> Result<Value, YouTubeError> {
        let mut params = query.clone();
        if let Some(key) = auth.key {
            params.push("key", key);
        }

        let mut url = format!("{}{}", self.base_url, path);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.to_query_string());
        }

        let mut req_builder = Request::builder()
            .method(Method::GET)
            .uri(url)
            .header("Accept", "application/json");

        if let Some(bearer_token) = auth.bearer_token {
            req_builder = req_builder.header("Authorization", format!("Bearer {}", bearer_token));
        }

        if let Some(referrer) = auth.referrer {
            req_builder = req_builder.header("Referer", referrer);
        }

        let req = req_builder
            .body(Empty::<Bytes>::new())
            .map_err(|e| YouTubeError::Other(Box::new(e)))?;

        let (status, body) = tokio::time::timeout(self.timeout, self.execute(req))
            .await
            .map_err(|_| YouTubeError::Timeout(self.timeout))??;

        if !status.is_success() {
            let err = upstream_error(status, &body);
            tracing::warn!(%status, error = %err, "YouTube API request failed");
            return Err(err);
        }

        tracing::trace!(bytes = body.len(), "received response");
        Ok(serde_json::from_slice(&body)?)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    reason: Option<String>,
}

/// Builds the structured failure for a non-2xx response, reading the Google
/// error envelope when the body carries one.
pub fn upstream_error(status: StatusCode, body: &[u8]) -> YouTubeError {
    let payload: Option<Value> = serde_json::from_slice(body).ok();
    let envelope = payload
        .as_ref()
        .and_then(|p| ErrorEnvelope::deserialize(p).ok());

    let reason = envelope
        .as_ref()
        .and_then(|e| e.error.errors.iter().find_map(|d| d.reason.clone()));

    let message = envelope
        .and_then(|e| e.error.message)
        .or_else(|| {
            let text = String::from_utf8_lossy(body).trim().to_string();
            (!text.is_empty()).then_some(text)
        })
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "unknown error".to_string());

    YouTubeError::Upstream {
        status,
        message,
        reason,
        payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upstream_error_reads_google_envelope() {
        let body = json!({
            "error": {
                "code": 403,
                "message": "The request cannot be completed because you have exceeded your quota.",
                "errors": [{"domain": "youtube.quota", "reason": "quotaExceeded"}]
            }
        })
        .to_string();

        let err = upstream_error(StatusCode::FORBIDDEN, body.as_bytes());
        match &err {
            YouTubeError::Upstream { status, message, reason, payload } => {
                assert_eq!(*status, StatusCode::FORBIDDEN);
                assert!(message.starts_with("The request cannot be completed"));
                assert_eq!(reason.as_deref(), Some("quotaExceeded"));
                assert!(payload.is_some());
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.is_rate_limited());
    }

    #[test]
    fn upstream_error_falls_back_to_body_text() {
        let err = upstream_error(StatusCode::BAD_GATEWAY, b"upstream exploded");
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
        assert!(err.to_string().contains("upstream exploded"));

        let err = upstream_error(StatusCode::NOT_FOUND, b"");
        assert!(err.to_string().contains("Not Found"));
    }
}
