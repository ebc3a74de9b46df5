use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{FeedbackError, FeedbackResult};
use crate::models::{EnrichedRecord, FeedbackRecord, MonthBucket};
use crate::sentiment::{LexiconScorer, SentimentScorer, TextSentimentScorer};
use crate::topic::TopicClassifier;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a timestamp cell. RFC 3339 offsets are dropped, keeping the wall-clock time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Attaches topic, sentiment and month to every record.
#[derive(Debug, Clone)]
pub struct FeedbackEnricher<S> {
    classifier: TopicClassifier,
    sentiment: SentimentScorer<S>,
}

impl Default for FeedbackEnricher<LexiconScorer> {
    fn default() -> Self {
        FeedbackEnricher::new(SentimentScorer::default())
    }
}

impl<S: TextSentimentScorer> FeedbackEnricher<S> {
    pub fn new(sentiment: SentimentScorer<S>) -> Self {
        FeedbackEnricher {
            classifier: TopicClassifier::new(),
            sentiment,
        }
    }

    pub fn enrich_one(&self, index: usize, record: &FeedbackRecord) -> FeedbackResult<EnrichedRecord> {
        let timestamp = parse_timestamp(&record.timestamp).ok_or_else(|| {
            FeedbackError::MalformedTimestamp {
                index,
                value: record.timestamp.clone(),
            }
        })?;
        let (polarity, sentiment) = self.sentiment.score_with_polarity(&record.feedback_text);

        Ok(EnrichedRecord {
            timestamp,
            feedback_text: record.feedback_text.clone(),
            topic: self.classifier.classify(&record.feedback_text),
            sentiment,
            polarity,
            month: MonthBucket::from_datetime(&timestamp),
        })
    }

    /// Enrich all records in order. The first bad timestamp aborts the whole batch.
    pub fn enrich(&self, records: &[FeedbackRecord]) -> FeedbackResult<Vec<EnrichedRecord>> {
        let enriched = records
            .iter()
            .enumerate()
            .map(|(index, record)| self.enrich_one(index, record))
            .collect::<FeedbackResult<Vec<_>>>()?;

        tracing::info!(records = enriched.len(), "Enriched feedback records");
        Ok(enriched)
    }
}
