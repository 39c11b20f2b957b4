use crate::text::TextNormalizer;
use sentimeter_core::SentimentLabel;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Width of the neutral band around zero. Single source of truth for
/// classification; the boundaries themselves classify as neutral.
pub const SENTIMENT_THRESHOLD: f64 = 0.1;

/// Scores text polarity by delegating to the VADER lexicon and buckets
/// the compound score into a three-way label.
pub struct PolarityScorer {
    normalizer: TextNormalizer,
    analyzer: SentimentIntensityAnalyzer<'static>,
    threshold: f64,
}

impl PolarityScorer {
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            analyzer: SentimentIntensityAnalyzer::new(),
            threshold: SENTIMENT_THRESHOLD,
        }
    }

    /// Normalize `text` (see [`TextNormalizer::clean`]).
    pub fn clean(&self, text: &str) -> String {
        self.normalizer.clean(text)
    }

    /// Score raw text, returning the polarity in [-1, 1] and its label.
    ///
    /// Text that normalizes to empty is neutral with polarity 0.0 and
    /// never reaches the external scorer.
    pub fn score(&self, text: &str) -> (f64, SentimentLabel) {
        let cleaned = self.normalizer.clean(text);
        if cleaned.is_empty() {
            return (0.0, SentimentLabel::Neutral);
        }

        let scores = self.analyzer.polarity_scores(&cleaned);
        let polarity = scores.get("compound").copied().unwrap_or(0.0);
        (polarity, self.classify(polarity))
    }

    /// Bucket a polarity value. Strict inequalities: exactly ±threshold
    /// is neutral.
    pub fn classify(&self, polarity: f64) -> SentimentLabel {
        if polarity > self.threshold {
            SentimentLabel::Positive
        } else if polarity < -self.threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl Default for PolarityScorer {
    fn default() -> Self {
        Self::new()
    }
}
