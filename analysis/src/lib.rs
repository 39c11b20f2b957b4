pub mod aggregate;
pub mod mapper;
pub mod scorer;
pub mod text;

pub use aggregate::summarize;
pub use scorer::{PolarityScorer, SENTIMENT_THRESHOLD};
pub use text::TextNormalizer;

use sentimeter_core::{MappingError, PostRecord, RawRedditPost, RawTweet, SentimentSummary};
use tracing::debug;

/// Facade over normalization, scoring, mapping and aggregation.
///
/// Holds one scorer (with its compiled regexes and lexicon) for the
/// whole run.
pub struct SentimentAnalyzer {
    scorer: PolarityScorer,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            scorer: PolarityScorer::new(),
        }
    }

    /// Score a batch of raw tweets into analyzed records. Fails fast on
    /// the first record with a missing required field.
    pub fn analyze_tweets(&self, tweets: &[RawTweet]) -> Result<Vec<PostRecord>, MappingError> {
        let records = tweets
            .iter()
            .map(|tweet| mapper::map_tweet(&self.scorer, tweet))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Analyzed {} tweets", records.len());
        Ok(records)
    }

    /// Score a batch of raw Reddit submissions into analyzed records.
    pub fn analyze_reddit_posts(
        &self,
        posts: &[RawRedditPost],
    ) -> Result<Vec<PostRecord>, MappingError> {
        let records = posts
            .iter()
            .map(|post| mapper::map_reddit_post(&self.scorer, post))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Analyzed {} Reddit posts", records.len());
        Ok(records)
    }

    /// Summary statistics over a pooled batch; `None` when the batch is
    /// empty.
    pub fn summary(&self, records: &[PostRecord]) -> Option<SentimentSummary> {
        aggregate::summarize(records)
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
