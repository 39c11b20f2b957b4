use reqwest::Client;
use sentimeter_core::{CoreError, RawTweet, TwitterApiError};
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info};

const TWITTER_API_BASE: &str = "https://api.twitter.com/2";
const TWEET_FIELDS: &str = "created_at,author_id,public_metrics";

// The recent-search endpoint accepts 10..=100 results per page.
const MIN_RESULTS: u32 = 10;
const MAX_RESULTS: u32 = 100;

/// Envelope of the v2 recent-search endpoint. `data` is absent entirely
/// when nothing matched.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<RawTweet>,
    #[serde(default)]
    pub meta: Option<SearchMeta>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchMeta {
    #[serde(default)]
    pub result_count: u32,
    #[serde(default)]
    pub next_token: Option<String>,
}

/// Twitter API v2 client using app-only bearer authentication.
#[derive(Debug)]
pub struct TwitterClient {
    http_client: Client,
    bearer_token: String,
}

impl TwitterClient {
    pub fn new(bearer_token: String, user_agent: &str) -> Result<Self, CoreError> {
        let http_client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http_client,
            bearer_token,
        })
    }

    /// Search recent tweets matching `query`, newest first.
    pub async fn search_recent(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<RawTweet>, CoreError> {
        let endpoint = format!("{}/tweets/search/recent", TWITTER_API_BASE);
        let max_results = max_results.clamp(MIN_RESULTS, MAX_RESULTS).to_string();

        info!("Searching recent tweets for {:?}", query);
        let response = match self
            .http_client
            .get(&endpoint)
            .bearer_auth(&self.bearer_token)
            .query(&[
                ("query", query),
                ("max_results", max_results.as_str()),
                ("tweet.fields", TWEET_FIELDS),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Network error while searching tweets: {}", e);
                if e.is_timeout() {
                    return Err(TwitterApiError::RequestTimeout.into());
                }
                return Err(CoreError::Network(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!("Twitter search failed with status: {}", status);
            let api_error = match status.as_u16() {
                401 => TwitterApiError::InvalidToken,
                403 => TwitterApiError::Forbidden {
                    resource: "/tweets/search/recent".to_string(),
                },
                429 => {
                    let retry_after = response
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(60);
                    TwitterApiError::RateLimitExceeded { retry_after }
                }
                code if status.is_server_error() => {
                    TwitterApiError::ServerError { status_code: code }
                }
                code => TwitterApiError::InvalidResponse {
                    details: format!("Unexpected status {}", code),
                },
            };
            return Err(api_error.into());
        }

        let payload: SearchResponse = response.json().await.map_err(|e| {
            error!("Failed to parse tweet search response: {}", e);
            TwitterApiError::InvalidResponse {
                details: "Failed to parse tweet search response".to_string(),
            }
        })?;

        info!("Retrieved {} tweets", payload.data.len());
        Ok(payload.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_succeeds() {
        assert!(TwitterClient::new("token".to_string(), "sentimeter-test/1.0").is_ok());
    }

    #[test]
    fn search_response_parses_full_payload() {
        let body = r#"{
            "data": [
                {
                    "id": "1450000000000000001",
                    "text": "rust is great",
                    "created_at": "2024-02-15T12:30:00.000Z",
                    "author_id": "12345",
                    "public_metrics": {
                        "retweet_count": 3,
                        "reply_count": 1,
                        "like_count": 9,
                        "quote_count": 0
                    }
                }
            ],
            "meta": {"result_count": 1, "newest_id": "1450000000000000001"}
        }"#;

        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.data.len(), 1);
        let tweet = &parsed.data[0];
        assert_eq!(tweet.id, "1450000000000000001");
        assert_eq!(tweet.public_metrics.retweet_count, 3);
        assert_eq!(tweet.public_metrics.like_count, 9);
        assert!(tweet.created_at.is_some());
        assert_eq!(parsed.meta.as_ref().unwrap().result_count, 1);
    }

    #[test]
    fn search_response_defaults_when_no_matches() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"meta": {"result_count": 0}}"#).unwrap();
        assert!(parsed.data.is_empty());
    }

    #[test]
    fn sparse_tweet_fields_default() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"data": [{"id": "7", "text": "hi"}]}"#).unwrap();
        let tweet = &parsed.data[0];
        assert_eq!(tweet.public_metrics.like_count, 0);
        assert!(tweet.created_at.is_none());
        assert!(tweet.author_id.is_empty());
    }
}
