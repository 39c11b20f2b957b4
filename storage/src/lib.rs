use sentimeter_core::{CoreError, ExportError, PostMetrics, PostRecord};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Columns of the analyzed-batch CSV: the superset of [`PostRecord`]
/// fields across both platforms. Platform-inapplicable cells stay empty.
const CSV_HEADER: [&str; 14] = [
    "id",
    "platform",
    "text",
    "cleaned_text",
    "polarity",
    "sentiment",
    "created_at",
    "author_id",
    "retweet_count",
    "like_count",
    "title",
    "score",
    "num_comments",
    "url",
];

/// Dump raw per-source API records as pretty-printed JSON.
pub fn save_raw_json<T: Serialize>(records: &[T], path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    serde_json::to_writer_pretty(file, records)?;
    info!("Saved {} raw records to {}", records.len(), path.display());
    Ok(())
}

/// Write the full analyzed batch as CSV.
pub fn save_records_csv(records: &[PostRecord], path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = csv::Writer::from_path(path).map_err(ExportError::Csv)?;
    writer.write_record(CSV_HEADER).map_err(ExportError::Csv)?;

    for record in records {
        writer
            .write_record(&record_row(record))
            .map_err(ExportError::Csv)?;
    }

    writer.flush().map_err(|e| ExportError::WriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    info!("Saved {} analyzed records to {}", records.len(), path.display());
    Ok(())
}

fn record_row(record: &PostRecord) -> Vec<String> {
    let (author_id, retweet_count, like_count, title, score, num_comments, url) =
        match &record.metrics {
            PostMetrics::Twitter {
                author_id,
                retweet_count,
                like_count,
            } => (
                author_id.clone(),
                retweet_count.to_string(),
                like_count.to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ),
            PostMetrics::Reddit {
                title,
                score,
                num_comments,
                url,
            } => (
                String::new(),
                String::new(),
                String::new(),
                title.clone(),
                score.to_string(),
                num_comments.to_string(),
                url.clone(),
            ),
        };

    vec![
        record.id.clone(),
        record.platform.to_string(),
        record.text.clone(),
        record.cleaned_text.clone(),
        record.polarity.to_string(),
        record.sentiment.to_string(),
        record.created_at.to_rfc3339(),
        author_id,
        retweet_count,
        like_count,
        title,
        score,
        num_comments,
        url,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use sentimeter_core::{Platform, RawTweet, SentimentLabel};

    fn twitter_record() -> PostRecord {
        PostRecord {
            id: "t1".to_string(),
            platform: Platform::Twitter,
            text: "great stuff".to_string(),
            cleaned_text: "great stuff".to_string(),
            polarity: 0.6,
            sentiment: SentimentLabel::Positive,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            metrics: PostMetrics::Twitter {
                author_id: "42".to_string(),
                retweet_count: 3,
                like_count: 9,
            },
        }
    }

    fn reddit_record() -> PostRecord {
        PostRecord {
            id: "r1".to_string(),
            platform: Platform::Reddit,
            text: "title body".to_string(),
            cleaned_text: "title body".to_string(),
            polarity: -0.2,
            sentiment: SentimentLabel::Negative,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            metrics: PostMetrics::Reddit {
                title: "title".to_string(),
                score: 5,
                num_comments: 2,
                url: "https://reddit.com/r1".to_string(),
            },
        }
    }

    #[test]
    fn csv_has_superset_header_and_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        save_records_csv(&[twitter_record(), reddit_record()], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), CSV_HEADER.join(","));
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn inapplicable_columns_stay_empty() {
        let twitter = record_row(&twitter_record());
        // title/score/num_comments/url empty for twitter
        assert_eq!(&twitter[10..14], ["", "", "", ""]);
        assert_eq!(twitter[8], "3");

        let reddit = record_row(&reddit_record());
        // author_id/retweet_count/like_count empty for reddit
        assert_eq!(&reddit[7..10], ["", "", ""]);
        assert_eq!(reddit[11], "5");
    }

    #[test]
    fn csv_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output").join("results.csv");
        save_records_csv(&[twitter_record()], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn raw_json_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("tweets.json");
        let tweets = vec![RawTweet {
            id: "1".to_string(),
            text: "hello".to_string(),
            ..Default::default()
        }];
        save_raw_json(&tweets, &path).unwrap();

        let restored: Vec<RawTweet> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(restored, tweets);
    }
}
