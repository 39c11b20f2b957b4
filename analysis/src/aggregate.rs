use sentimeter_core::{PostRecord, SentimentLabel, SentimentSummary};

/// Compute summary statistics over a batch of records.
///
/// Returns `None` for an empty batch so callers can tell "no data" apart
/// from a real batch that happens to be all neutral.
pub fn summarize(records: &[PostRecord]) -> Option<SentimentSummary> {
    if records.is_empty() {
        return None;
    }

    let total = records.len();
    let mut positive = 0;
    let mut neutral = 0;
    let mut negative = 0;
    let mut polarity_sum = 0.0;

    for record in records {
        match record.sentiment {
            SentimentLabel::Positive => positive += 1,
            SentimentLabel::Neutral => neutral += 1,
            SentimentLabel::Negative => negative += 1,
        }
        polarity_sum += record.polarity;
    }

    let percentage = |count: usize| 100.0 * count as f64 / total as f64;

    Some(SentimentSummary {
        total_posts: total,
        positive_count: positive,
        neutral_count: neutral,
        negative_count: negative,
        positive_percentage: percentage(positive),
        neutral_percentage: percentage(neutral),
        negative_percentage: percentage(negative),
        average_polarity: polarity_sum / total as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use sentimeter_core::{Platform, PostMetrics};

    fn record(sentiment: SentimentLabel, polarity: f64) -> PostRecord {
        PostRecord {
            id: "x".to_string(),
            platform: Platform::Twitter,
            text: String::new(),
            cleaned_text: String::new(),
            polarity,
            sentiment,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            metrics: PostMetrics::Twitter {
                author_id: String::new(),
                retweet_count: 0,
                like_count: 0,
            },
        }
    }

    #[test]
    fn empty_batch_yields_no_summary() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn seven_two_one_scenario() {
        let mut batch = Vec::new();
        batch.extend((0..7).map(|_| record(SentimentLabel::Positive, 0.5)));
        batch.extend((0..2).map(|_| record(SentimentLabel::Neutral, 0.0)));
        batch.push(record(SentimentLabel::Negative, -0.5));

        let summary = summarize(&batch).unwrap();
        assert_eq!(summary.total_posts, 10);
        assert_eq!(summary.positive_count, 7);
        assert_eq!(summary.neutral_count, 2);
        assert_eq!(summary.negative_count, 1);
        assert!((summary.positive_percentage - 70.0).abs() < 1e-9);
        assert!((summary.neutral_percentage - 20.0).abs() < 1e-9);
        assert!((summary.negative_percentage - 10.0).abs() < 1e-9);
    }

    #[test]
    fn counts_sum_to_total_and_percentages_to_hundred() {
        let batch = vec![
            record(SentimentLabel::Positive, 0.9),
            record(SentimentLabel::Positive, 0.2),
            record(SentimentLabel::Negative, -0.7),
            record(SentimentLabel::Neutral, 0.05),
            record(SentimentLabel::Neutral, -0.02),
            record(SentimentLabel::Negative, -0.3),
            record(SentimentLabel::Positive, 0.4),
        ];
        let summary = summarize(&batch).unwrap();

        assert_eq!(
            summary.positive_count + summary.neutral_count + summary.negative_count,
            summary.total_posts
        );
        let pct_sum = summary.positive_percentage
            + summary.neutral_percentage
            + summary.negative_percentage;
        assert!((pct_sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn mean_polarity_is_unweighted_arithmetic_mean() {
        let batch = vec![
            record(SentimentLabel::Positive, 0.8),
            record(SentimentLabel::Negative, -0.4),
            record(SentimentLabel::Neutral, 0.0),
        ];
        let summary = summarize(&batch).unwrap();
        let expected = (0.8 - 0.4 + 0.0) / 3.0;
        assert!((summary.average_polarity - expected).abs() < 1e-12);
    }

    #[test]
    fn all_neutral_batch_is_a_real_summary_not_absence() {
        let batch = vec![record(SentimentLabel::Neutral, 0.0)];
        let summary = summarize(&batch);
        assert!(summary.is_some());
        assert_eq!(summary.unwrap().neutral_count, 1);
    }
}
