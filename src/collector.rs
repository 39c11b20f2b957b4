use reddit_client::RedditClient;
use sentimeter_core::{config::DEFAULT_USER_AGENT, AppConfig, ErrorExt, RawRedditPost, RawTweet};
use tracing::{info, warn};
use twitter_client::TwitterClient;

/// Fetch boundary over both platform clients.
///
/// A client whose credentials are missing stays `None` and its fetches
/// are no-ops returning empty batches. A fetch error is logged and
/// degrades to an empty batch for that source only, so a Twitter
/// failure never affects Reddit processing and vice versa.
pub struct Collector {
    twitter: Option<TwitterClient>,
    reddit: Option<RedditClient>,
    max_tweets: u32,
    max_reddit_posts: u32,
}

impl Collector {
    pub fn new(config: &AppConfig) -> Self {
        let twitter = match &config.twitter_bearer_token {
            Some(token) => match TwitterClient::new(token.clone(), DEFAULT_USER_AGENT) {
                Ok(client) => {
                    info!("Twitter API client initialized");
                    Some(client)
                }
                Err(e) => {
                    warn!("Twitter API initialization failed: {}", e);
                    None
                }
            },
            None => {
                warn!("Twitter credentials not configured");
                None
            }
        };

        let reddit = match (&config.reddit_client_id, &config.reddit_client_secret) {
            (Some(id), Some(secret)) => {
                match RedditClient::new(
                    id.clone(),
                    secret.clone(),
                    config.reddit_user_agent.clone(),
                ) {
                    Ok(client) => {
                        info!("Reddit API client initialized");
                        Some(client)
                    }
                    Err(e) => {
                        warn!("Reddit API initialization failed: {}", e);
                        None
                    }
                }
            }
            _ => {
                warn!("Reddit credentials not configured");
                None
            }
        };

        Self {
            twitter,
            reddit,
            max_tweets: config.max_tweets,
            max_reddit_posts: config.max_reddit_posts,
        }
    }

    pub fn twitter_available(&self) -> bool {
        self.twitter.is_some()
    }

    pub fn reddit_available(&self) -> bool {
        self.reddit.is_some()
    }

    /// Fetch recent tweets matching `query`; empty batch on any failure.
    pub async fn collect_tweets(&self, query: &str) -> Vec<RawTweet> {
        let Some(client) = &self.twitter else {
            warn!("Twitter API not available");
            return Vec::new();
        };

        match client.search_recent(query, self.max_tweets).await {
            Ok(tweets) => tweets,
            Err(e) => {
                e.log_error();
                println!("Error collecting tweets: {}", e.user_friendly_message());
                Vec::new()
            }
        }
    }

    /// Fetch posts matching `query` from `subreddit`; empty batch on any
    /// failure.
    pub async fn collect_reddit_posts(&self, subreddit: &str, query: &str) -> Vec<RawRedditPost> {
        let Some(client) = &self.reddit else {
            warn!("Reddit API not available");
            return Vec::new();
        };

        match client
            .search_posts(subreddit, query, self.max_reddit_posts)
            .await
        {
            Ok(posts) => posts,
            Err(e) => {
                e.log_error();
                println!("Error collecting Reddit posts: {}", e.user_friendly_message());
                Vec::new()
            }
        }
    }
}
