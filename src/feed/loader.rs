use async_trait::async_trait;

use crate::error::WidgetError;
use crate::feed::fixtures;
use crate::models::post::Post;

/// Which path produced the loaded posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedSource {
    /// The feed file was fetched and parsed.
    Fetched,
    /// Something failed and the built-in sample posts were substituted.
    Fallback,
}

/// Outcome of a feed load: the posts plus the path that produced them.
#[derive(Debug, Clone)]
pub struct FeedLoad {
    pub posts: Vec<Post>,
    pub source: FeedSource,
}

/// Capability for fetching the raw feed body, so tests can swap the transport.
#[async_trait(?Send)]
pub trait FeedFetcher {
    async fn fetch(&self, url: &str) -> Result<String, WidgetError>;
}

/// Load the search feed, substituting the sample posts on any failure.
///
/// The fallback is total: the result is either the fetched sequence or the
/// fixture sequence, never a mix. Failures are logged, not surfaced: an
/// unreachable feed must leave the widget usable, just with sample data.
/// No retry; the fetch happens once per page load.
pub async fn load_feed(fetcher: &dyn FeedFetcher, url: &str) -> FeedLoad {
    match fetch_and_parse(fetcher, url).await {
        Ok(posts) => {
            tracing::debug!(count = posts.len(), "search feed loaded from {url}");
            FeedLoad {
                posts,
                source: FeedSource::Fetched,
            }
        }
        Err(err) => {
            tracing::warn!("Failed to load search feed from {url}: {err}; using sample posts");
            FeedLoad {
                posts: fixtures::sample_posts(),
                source: FeedSource::Fallback,
            }
        }
    }
}

async fn fetch_and_parse(fetcher: &dyn FeedFetcher, url: &str) -> Result<Vec<Post>, WidgetError> {
    let body = fetcher.fetch(url).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Feed transport backed by the browser's fetch API.
#[cfg(feature = "csr")]
pub struct HttpFeedFetcher;

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, url: &str) -> Result<String, WidgetError> {
        let response = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|err| WidgetError::Feed(err.to_string()))?;
        if !response.ok() {
            return Err(WidgetError::Feed(format!(
                "unexpected status {} fetching {url}",
                response.status()
            )));
        }
        response
            .text()
            .await
            .map_err(|err| WidgetError::Feed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticFetcher(&'static str);

    #[async_trait(?Send)]
    impl FeedFetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, WidgetError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingFetcher;

    #[async_trait(?Send)]
    impl FeedFetcher for FailingFetcher {
        async fn fetch(&self, url: &str) -> Result<String, WidgetError> {
            Err(WidgetError::Feed(format!("connection refused for {url}")))
        }
    }

    #[tokio::test]
    async fn test_successful_fetch_is_tagged_fetched() {
        let fetcher = StaticFetcher(r#"[{"title": "A", "content": "B"}]"#);
        let load = load_feed(&fetcher, "/search.json").await;
        assert_eq!(load.source, FeedSource::Fetched);
        assert_eq!(load.posts.len(), 1);
        assert_eq!(load.posts[0].title, "A");
    }

    #[tokio::test]
    async fn test_network_failure_falls_back_to_fixtures() {
        let load = load_feed(&FailingFetcher, "/search.json").await;
        assert_eq!(load.source, FeedSource::Fallback);
        assert_eq!(load.posts, fixtures::sample_posts());
    }

    #[tokio::test]
    async fn test_unparsable_body_falls_back_to_fixtures() {
        let fetcher = StaticFetcher("<html>404</html>");
        let load = load_feed(&fetcher, "/search.json").await;
        assert_eq!(load.source, FeedSource::Fallback);
        assert_eq!(load.posts.len(), 3);
    }

    #[tokio::test]
    async fn test_non_array_payload_falls_back_to_fixtures() {
        let fetcher = StaticFetcher(r#"{"posts": []}"#);
        let load = load_feed(&fetcher, "/search.json").await;
        assert_eq!(load.source, FeedSource::Fallback);
    }

    #[tokio::test]
    async fn test_empty_array_is_a_valid_fetched_feed() {
        let fetcher = StaticFetcher("[]");
        let load = load_feed(&fetcher, "/search.json").await;
        assert_eq!(load.source, FeedSource::Fetched);
        assert!(load.posts.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_entry_fields_default_instead_of_dropping() {
        let fetcher = StaticFetcher(r#"[{"title": 7, "tags": ["ok"]}, {"url": "/b"}]"#);
        let load = load_feed(&fetcher, "/search.json").await;
        assert_eq!(load.source, FeedSource::Fetched);
        assert_eq!(load.posts.len(), 2);
        assert_eq!(load.posts[0].title, "");
        assert_eq!(load.posts[0].tags, vec!["ok".to_string()]);
        assert_eq!(load.posts[1].url, "/b");
    }
}
