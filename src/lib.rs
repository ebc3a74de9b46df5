//! Rule-based digest of resident feedback.
//!
//! Comments are routed to a department by ordered keyword rules, labelled by sentiment,
//! aggregated by topic and month, and turned into findings and recommendation text.

pub mod aggregate;
pub mod charts;
pub mod config;
pub mod enrich;
pub mod error;
pub mod models;
pub mod narrative;
pub mod pipeline;
pub mod report;
pub mod sentiment;
pub mod source;
pub mod topic;

pub use aggregate::{AggregateReport, InsightAggregator, TopicCount};
pub use charts::{write_chart_data, ChartArtifact, ChartData};
pub use config::{ReportConfig, SentimentThresholds};
pub use enrich::FeedbackEnricher;
pub use error::{FeedbackError, FeedbackResult};
pub use models::{EnrichedRecord, FeedbackRecord, MonthBucket, SentimentLabel, TopicLabel};
pub use narrative::{NarrativeGenerator, NarrativeText};
pub use pipeline::{analyze_feedback, PipelineOutput};
pub use report::{assemble_report, render_markdown, write_report, ContentBlock};
pub use sentiment::{LexiconScorer, SentimentScorer, TextSentimentScorer};
pub use source::{load_feedback_csv, read_feedback_csv};
pub use topic::TopicClassifier;
