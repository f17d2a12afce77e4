//! HTTP fetch helper shared by all sources.

use serde_json::Value;

use crate::error::{ScrapeError, ScrapeResult};

/// Default user-agent, matching what the retailers' pages expect from a
/// browser-ish client.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Thin wrapper around `reqwest::Client` used by every source.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a fetcher with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("failed to build HTTP client"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// GET a URL and return the raw body text.
    pub async fn get_text(&self, url: &str) -> ScrapeResult<String> {
        let response = self.get(url).await?;
        response.text().await.map_err(|source| ScrapeError::Fetch {
            url: url.to_string(),
            source,
        })
    }

    /// GET a URL and decode the body as JSON.
    pub async fn get_json(&self, url: &str) -> ScrapeResult<Value> {
        let response = self.get(url).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ScrapeError::Parse {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }

    async fn get(&self, url: &str) -> ScrapeResult<reqwest::Response> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|source| ScrapeError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_override() {
        let fetcher = HttpFetcher::new().with_user_agent("ListingsBot/1.0");
        assert_eq!(fetcher.user_agent, "ListingsBot/1.0");
    }
}
