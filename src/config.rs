//! Run configuration.
//!
//! Everything here is resolved once by the caller (usually the CLI) and passed into the
//! pipeline and report functions. Nothing reads process-wide state after startup.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

pub const DEFAULT_REPORT_TITLE: &str = "Resident Feedback Analysis: Q1-Q2 2025";
pub const DEFAULT_CHART_DIR: &str = "reports/charts";
pub const DEFAULT_REPORT_PATH: &str = "reports/Executive_Summary.md";

/// Polarity cutoffs used to bucket a score into a sentiment label.
///
/// A polarity strictly above `positive` is positive, strictly below `negative` is negative,
/// anything else is neutral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentThresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for SentimentThresholds {
    fn default() -> Self {
        SentimentThresholds {
            positive: 0.1,
            negative: -0.1,
        }
    }
}

/// Presentation settings for the assembled report.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    title: String,
    generated_at: NaiveDateTime,
    chart_output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            title: DEFAULT_REPORT_TITLE.to_string(),
            generated_at: Local::now().naive_local(),
            chart_output_dir: PathBuf::from(DEFAULT_CHART_DIR),
        }
    }
}

impl ReportConfig {
    pub fn new(
        title: impl Into<String>,
        generated_at: NaiveDateTime,
        chart_output_dir: impl Into<PathBuf>,
    ) -> Self {
        ReportConfig {
            title: title.into(),
            generated_at,
            chart_output_dir: chart_output_dir.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_generated_at(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn with_chart_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.chart_output_dir = dir.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn generated_at(&self) -> NaiveDateTime {
        self.generated_at
    }

    /// Display form of the generation date, e.g. "March 04, 2025".
    pub fn generated_on(&self) -> String {
        self.generated_at.format("%B %d, %Y").to_string()
    }

    pub fn chart_output_dir(&self) -> &Path {
        &self.chart_output_dir
    }
}
