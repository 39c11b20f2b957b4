use crate::scorer::PolarityScorer;
use chrono::{DateTime, Utc};
use sentimeter_core::{
    MappingError, Platform, PostMetrics, PostRecord, RawRedditPost, RawTweet,
};

/// Convert one raw tweet into an analyzed [`PostRecord`].
///
/// Optional fields arrive already defaulted from deserialization; an
/// empty `id` is the one fatal case.
pub fn map_tweet(scorer: &PolarityScorer, raw: &RawTweet) -> Result<PostRecord, MappingError> {
    if raw.id.is_empty() {
        return Err(MappingError::MissingField {
            platform: Platform::Twitter.to_string(),
            field: "id".to_string(),
        });
    }

    let (polarity, sentiment) = scorer.score(&raw.text);
    Ok(PostRecord {
        id: raw.id.clone(),
        platform: Platform::Twitter,
        text: raw.text.clone(),
        cleaned_text: scorer.clean(&raw.text),
        polarity,
        sentiment,
        created_at: raw.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        metrics: PostMetrics::Twitter {
            author_id: raw.author_id.clone(),
            retweet_count: raw.public_metrics.retweet_count,
            like_count: raw.public_metrics.like_count,
        },
    })
}

/// Convert one raw Reddit submission into an analyzed [`PostRecord`].
///
/// Title and selftext are joined with a space and scored as a whole.
pub fn map_reddit_post(
    scorer: &PolarityScorer,
    raw: &RawRedditPost,
) -> Result<PostRecord, MappingError> {
    if raw.id.is_empty() {
        return Err(MappingError::MissingField {
            platform: Platform::Reddit.to_string(),
            field: "id".to_string(),
        });
    }

    let full_text = format!("{} {}", raw.title, raw.selftext)
        .trim()
        .to_string();
    let (polarity, sentiment) = scorer.score(&full_text);
    Ok(PostRecord {
        id: raw.id.clone(),
        platform: Platform::Reddit,
        text: full_text.clone(),
        cleaned_text: scorer.clean(&full_text),
        polarity,
        sentiment,
        created_at: DateTime::from_timestamp(raw.created_utc as i64, 0)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        metrics: PostMetrics::Reddit {
            title: raw.title.clone(),
            score: raw.score,
            num_comments: raw.num_comments,
            url: raw.url.clone(),
        },
    })
}
