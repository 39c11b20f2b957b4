use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source platform a post was fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Reddit,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Reddit => "reddit",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-way sentiment classification of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform-specific engagement metrics carried by a [`PostRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostMetrics {
    Twitter {
        author_id: String,
        retweet_count: u64,
        like_count: u64,
    },
    Reddit {
        title: String,
        score: i64,
        num_comments: u64,
        url: String,
    },
}

/// Uniform representation of one fetched post, regardless of source.
///
/// Polarity and label are assigned when the record is built from a raw
/// API record; the record is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub platform: Platform,
    pub text: String,
    pub cleaned_text: String,
    pub polarity: f64,
    pub sentiment: SentimentLabel,
    pub created_at: DateTime<Utc>,
    pub metrics: PostMetrics,
}

/// Aggregate sentiment statistics over a batch of [`PostRecord`]s.
///
/// Always recomputed wholesale from a batch; label counts sum to
/// `total_posts` and the percentages to 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub total_posts: usize,
    pub positive_count: usize,
    pub neutral_count: usize,
    pub negative_count: usize,
    pub positive_percentage: f64,
    pub neutral_percentage: f64,
    pub negative_percentage: f64,
    pub average_polarity: f64,
}

impl SentimentSummary {
    pub fn count_for(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive_count,
            SentimentLabel::Neutral => self.neutral_count,
            SentimentLabel::Negative => self.negative_count,
        }
    }

    pub fn percentage_for(&self, label: SentimentLabel) -> f64 {
        match label {
            SentimentLabel::Positive => self.positive_percentage,
            SentimentLabel::Neutral => self.neutral_percentage,
            SentimentLabel::Negative => self.negative_percentage,
        }
    }
}

/// Tweet engagement counters as returned under `public_metrics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TweetMetrics {
    #[serde(default)]
    pub retweet_count: u64,
    #[serde(default)]
    pub like_count: u64,
}

/// One tweet as returned by the Twitter v2 recent-search endpoint.
///
/// Every field is defaulted so that a sparse API response still
/// deserializes; required-field validation happens in the mapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTweet {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author_id: String,
    #[serde(default)]
    pub public_metrics: TweetMetrics,
}

/// One submission as returned by the Reddit search listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRedditPost {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub selftext: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: u64,
    #[serde(default)]
    pub created_utc: f64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub subreddit: String,
}
