//! Sentiment scoring.
//!
//! Polarity comes from an injected [`TextSentimentScorer`]; [`SentimentScorer`] owns the
//! bucketing policy that turns a polarity into a [`SentimentLabel`].

mod lexicon;

pub use lexicon::LexiconScorer;

use crate::config::SentimentThresholds;
use crate::models::SentimentLabel;

/// Source of text polarity in `[-1.0, 1.0]`. Must be deterministic and side-effect free.
pub trait TextSentimentScorer {
    fn polarity(&self, text: &str) -> f64;
}

impl<T: TextSentimentScorer + ?Sized> TextSentimentScorer for &T {
    fn polarity(&self, text: &str) -> f64 {
        (**self).polarity(text)
    }
}

#[derive(Debug, Clone)]
pub struct SentimentScorer<S> {
    scorer: S,
    thresholds: SentimentThresholds,
}

impl Default for SentimentScorer<LexiconScorer> {
    fn default() -> Self {
        SentimentScorer::new(LexiconScorer::new())
    }
}

impl<S: TextSentimentScorer> SentimentScorer<S> {
    pub fn new(scorer: S) -> Self {
        SentimentScorer {
            scorer,
            thresholds: SentimentThresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: SentimentThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn thresholds(&self) -> SentimentThresholds {
        self.thresholds
    }

    /// Polarity of `text`, always finite and within `[-1.0, 1.0]`.
    ///
    /// Blank text is 0.0 without consulting the underlying scorer.
    pub fn polarity(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let polarity = self.scorer.polarity(text);
        if polarity.is_nan() {
            0.0
        } else {
            polarity.clamp(-1.0, 1.0)
        }
    }

    pub fn label(&self, polarity: f64) -> SentimentLabel {
        if polarity > self.thresholds.positive {
            SentimentLabel::Positive
        } else if polarity < self.thresholds.negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn score(&self, text: &str) -> SentimentLabel {
        self.label(self.polarity(text))
    }

    /// Polarity and its label in one call.
    pub fn score_with_polarity(&self, text: &str) -> (f64, SentimentLabel) {
        let polarity = self.polarity(text);
        (polarity, self.label(polarity))
    }
}
