use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by loading, enrichment, aggregation and report output.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("feedback source '{path}' is unavailable: {source}", path = path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("feedback record {index} could not be decoded: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: csv::Error,
    },
    #[error("feedback record {index} has a malformed timestamp: '{value}'")]
    MalformedTimestamp { index: usize, value: String },
    #[error("cannot aggregate an empty feedback dataset")]
    EmptyDataset,
    #[error("failed to write chart data: {0}")]
    ChartWrite(#[source] std::io::Error),
    #[error("failed to write report: {0}")]
    ReportWrite(#[source] std::io::Error),
    #[error("failed to serialize: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type FeedbackResult<T> = std::result::Result<T, FeedbackError>;
