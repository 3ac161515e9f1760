use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Client-wide settings, passed to the transport and every pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base endpoint; resource paths are appended to it.
    pub base_url: String,
    /// Item count a paged call stops at when the caller gives none.
    pub default_count: usize,
    /// `maxResults` sent with every paged request.
    pub default_page_size: u32,
    /// Bound on a single request, from send to the end of the body.
    pub timeout: Duration,
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_count: 5,
            default_page_size: 5,
            timeout: Duration::from_secs(30),
            accept_invalid_certs: false,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `YOUTUBE_API_BASE_URL`, `YOUTUBE_DEFAULT_COUNT`,
    /// `YOUTUBE_PAGE_SIZE` and `YOUTUBE_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClientConfig::default();

        if let Some(base_url) = lookup("YOUTUBE_API_BASE_URL").filter(|url| !url.is_empty()) {
            config = config.with_base_url(base_url);
        }
        if let Some(count) = parse_var(&lookup, "YOUTUBE_DEFAULT_COUNT") {
            config.default_count = count;
        }
        if let Some(page_size) = parse_var(&lookup, "YOUTUBE_PAGE_SIZE") {
            config.default_page_size = page_size;
        }
        if let Some(secs) = parse_var(&lookup, "YOUTUBE_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(secs);
        }

        config
    }

    /// Sets the base URL, adding the trailing slash resource paths expect.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    pub fn with_default_count(mut self, count: usize) -> Self {
        self.default_count = count;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.default_page_size = page_size;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(name, value = %raw, "ignoring unparsable configuration value");
            None
        }
    }
}

/// Default credentials attached to every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub referrer: Option<String>,
}

impl Credentials {
    pub fn api_key(key: impl Into<String>) -> Self {
        Credentials {
            api_key: Some(key.into()),
            ..Default::default()
        }
    }

    pub fn access_token(token: impl Into<String>) -> Self {
        Credentials {
            access_token: Some(token.into()),
            ..Default::default()
        }
    }

    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }

    /// Reads `YOUTUBE_API_KEY` and `YOUTUBE_ACCESS_TOKEN`.
    pub fn from_env() -> Self {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Credentials {
            api_key: non_empty("YOUTUBE_API_KEY"),
            access_token: non_empty("YOUTUBE_ACCESS_TOKEN"),
            referrer: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn lookup_overrides_defaults() {
        let vars: HashMap<&str, &str> = [
            ("YOUTUBE_API_BASE_URL", "http://localhost:8080/yt"),
            ("YOUTUBE_DEFAULT_COUNT", "20"),
            ("YOUTUBE_PAGE_SIZE", "50"),
            ("YOUTUBE_TIMEOUT_SECS", "3"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.base_url, "http://localhost:8080/yt/");
        assert_eq!(config.default_count, 20);
        assert_eq!(config.default_page_size, 50);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = ClientConfig::from_lookup(|name| match name {
            "YOUTUBE_DEFAULT_COUNT" => Some("many".to_string()),
            _ => None,
        });

        assert_eq!(config, ClientConfig::default());
    }
}
