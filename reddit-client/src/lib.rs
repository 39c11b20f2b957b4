use reqwest::{Client, StatusCode};
use sentimeter_core::{CoreError, RawRedditPost, RedditApiError};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const REDDIT_API_BASE: &str = "https://oauth.reddit.com";
const MAX_LIMIT: u32 = 100;

// Refresh tokens a minute before Reddit expires them.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Deserialize)]
pub struct RedditListing<T> {
    pub kind: String,
    pub data: RedditListingData<T>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct RedditListingData<T> {
    #[serde(default)]
    pub children: Vec<RedditListingChild<T>>,
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedditListingChild<T> {
    pub kind: String,
    pub data: T,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    expires_in: u64,
}

#[derive(Debug)]
struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Reddit search client using app-only (client credentials) OAuth2.
///
/// The access token is fetched lazily and cached until shortly before
/// expiry.
#[derive(Debug)]
pub struct RedditClient {
    http_client: Client,
    client_id: String,
    client_secret: String,
    user_agent: String,
    token: Mutex<Option<CachedToken>>,
}

impl RedditClient {
    pub fn new(
        client_id: String,
        client_secret: String,
        user_agent: String,
    ) -> Result<Self, CoreError> {
        let http_client = Client::builder()
            .user_agent(&user_agent)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http_client,
            client_id,
            client_secret,
            user_agent,
            token: Mutex::new(None),
        })
    }

    async fn access_token(&self) -> Result<String, CoreError> {
        let mut guard = self.token.lock().await;
        if let Some(cached) = guard.as_ref() {
            if cached.expires_at > Instant::now() {
                return Ok(cached.token.clone());
            }
        }

        debug!("Requesting new Reddit app-only token");
        let response = match self
            .http_client
            .post(TOKEN_URL)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Network error during Reddit authentication: {}", e);
                if e.is_timeout() {
                    return Err(RedditApiError::RequestTimeout.into());
                }
                return Err(CoreError::Network(e));
            }
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(RedditApiError::AuthenticationFailed {
                reason: format!("token endpoint returned {}", status),
            }
            .into());
        }
        if !status.is_success() {
            return Err(RedditApiError::ServerError {
                status_code: status.as_u16(),
            }
            .into());
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            error!("Failed to parse token response: {}", e);
            RedditApiError::InvalidResponse {
                details: "Failed to parse token response".to_string(),
            }
        })?;
        if token.access_token.is_empty() {
            return Err(RedditApiError::AuthenticationFailed {
                reason: "empty access token".to_string(),
            }
            .into());
        }

        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);
        *guard = Some(CachedToken {
            token: token.access_token.clone(),
            expires_at: Instant::now() + lifetime,
        });
        Ok(token.access_token)
    }

    /// Search `subreddit` (use "all" for site-wide) for posts matching
    /// `query`, up to `limit` results.
    pub async fn search_posts(
        &self,
        subreddit: &str,
        query: &str,
        limit: u32,
    ) -> Result<Vec<RawRedditPost>, CoreError> {
        let access_token = self.access_token().await?;
        let endpoint = format!("{}/r/{}/search", REDDIT_API_BASE, subreddit);
        let limit = limit.min(MAX_LIMIT).to_string();

        info!("Searching r/{} for {:?}", subreddit, query);
        let response = match self
            .http_client
            .get(&endpoint)
            .bearer_auth(&access_token)
            .header("User-Agent", &self.user_agent)
            .query(&[
                ("q", query),
                ("limit", limit.as_str()),
                ("restrict_sr", "on"),
                ("sort", "relevance"),
                ("raw_json", "1"),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Network error while searching r/{}: {}", subreddit, e);
                if e.is_timeout() {
                    return Err(RedditApiError::RequestTimeout.into());
                }
                return Err(CoreError::Network(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!("Reddit search failed with status: {}", status);
            let api_error = match status.as_u16() {
                401 => RedditApiError::InvalidToken,
                403 => RedditApiError::Forbidden {
                    resource: format!("r/{}", subreddit),
                },
                404 => RedditApiError::SubredditNotFound {
                    subreddit: subreddit.to_string(),
                },
                429 => {
                    let retry_after = response
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(60);
                    RedditApiError::RateLimitExceeded { retry_after }
                }
                code if status.is_server_error() => {
                    RedditApiError::ServerError { status_code: code }
                }
                code => RedditApiError::InvalidResponse {
                    details: format!("Unexpected status {}", code),
                },
            };
            return Err(api_error.into());
        }

        let listing: RedditListing<RawRedditPost> = response.json().await.map_err(|e| {
            error!("Failed to parse search results: {}", e);
            RedditApiError::InvalidResponse {
                details: format!("Failed to parse posts for r/{}", subreddit),
            }
        })?;

        let posts: Vec<RawRedditPost> = listing
            .data
            .children
            .into_iter()
            .map(|child| child.data)
            .collect();
        info!("Retrieved {} posts from r/{}", posts.len(), subreddit);
        Ok(posts)
    }
}
