//! Chart datasets for the plotting collaborator.
//!
//! The plots themselves are drawn elsewhere. This module derives the three series the report
//! shows from the enriched records and writes each one as a small JSON chart spec.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use counter::Counter;
use serde::Serialize;

use crate::aggregate::{MonthCount, SentimentSplit, TopicCount};
use crate::error::{FeedbackError, FeedbackResult};
use crate::models::{EnrichedRecord, MonthBucket, TopicLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    VolumeByTopic,
    SentimentBreakdown,
    VolumeTimeseries,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::VolumeByTopic,
        ChartKind::SentimentBreakdown,
        ChartKind::VolumeTimeseries,
    ];

    pub fn file_stem(&self) -> &'static str {
        match self {
            ChartKind::VolumeByTopic => "volume_by_topic",
            ChartKind::SentimentBreakdown => "sentiment_breakdown",
            ChartKind::VolumeTimeseries => "volume_timeseries",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::VolumeByTopic => "Total Feedback Volume by Department",
            ChartKind::SentimentBreakdown => "Sentiment Breakdown by Department",
            ChartKind::VolumeTimeseries => "Monthly Feedback Volume (All Topics)",
        }
    }

    fn axis_labels(&self) -> (&'static str, &'static str) {
        match self {
            ChartKind::VolumeByTopic => ("Number of Comments", ""),
            ChartKind::SentimentBreakdown => ("Proportion of Comments", ""),
            ChartKind::VolumeTimeseries => ("Month", "Number of Comments"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicSentimentShare {
    pub topic: TopicLabel,
    pub shares: SentimentSplit<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub volume_by_topic: Vec<TopicCount>,
    pub sentiment_by_topic: Vec<TopicSentimentShare>,
    /// Every month from the first to the last record, zero-filled.
    pub monthly_volume: Vec<MonthCount>,
}

impl ChartData {
    pub fn from_records(records: &[EnrichedRecord]) -> Self {
        let mut topic_counts: Counter<TopicLabel> = Counter::new();
        let mut by_topic: BTreeMap<TopicLabel, SentimentSplit<usize>> = BTreeMap::new();
        let mut by_month: BTreeMap<MonthBucket, usize> = BTreeMap::new();

        for record in records {
            topic_counts[&record.topic] += 1;
            *by_topic.entry(record.topic).or_default().get_mut(record.sentiment) += 1;
            *by_month.entry(record.month).or_insert(0) += 1;
        }

        let volume_by_topic = topic_counts
            .most_common_ordered()
            .into_iter()
            .map(|(topic, count)| TopicCount { topic, count })
            .collect();

        let sentiment_by_topic = by_topic
            .into_iter()
            .map(|(topic, counts)| {
                let total = counts.positive + counts.neutral + counts.negative;
                TopicSentimentShare {
                    topic,
                    shares: counts.proportions(total),
                }
            })
            .collect();

        ChartData {
            volume_by_topic,
            sentiment_by_topic,
            monthly_volume: fill_months(&by_month),
        }
    }
}

fn fill_months(by_month: &BTreeMap<MonthBucket, usize>) -> Vec<MonthCount> {
    let (Some(&first), Some(&last)) = (by_month.keys().next(), by_month.keys().next_back()) else {
        return Vec::new();
    };

    let mut series = Vec::new();
    let mut month = first;
    while month <= last {
        series.push(MonthCount {
            month,
            count: by_month.get(&month).copied().unwrap_or(0),
        });
        month = month.next();
    }
    series
}

/// Where one chart's data was written and where its rendered image is expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartArtifact {
    pub kind: ChartKind,
    pub data_path: PathBuf,
    pub image_path: PathBuf,
}

#[derive(Serialize)]
struct ChartSpec<'a, T: Serialize> {
    title: &'static str,
    x_label: &'static str,
    y_label: &'static str,
    data: &'a [T],
}

fn write_spec<T: Serialize>(dir: &Path, kind: ChartKind, data: &[T]) -> FeedbackResult<ChartArtifact> {
    let (x_label, y_label) = kind.axis_labels();
    let spec = ChartSpec {
        title: kind.title(),
        x_label,
        y_label,
        data,
    };
    let data_path = dir.join(format!("{}.json", kind.file_stem()));
    fs::write(&data_path, serde_json::to_vec_pretty(&spec)?).map_err(FeedbackError::ChartWrite)?;

    Ok(ChartArtifact {
        kind,
        data_path,
        image_path: dir.join(format!("{}.png", kind.file_stem())),
    })
}

/// Write all chart specs into `dir`, creating it if needed.
pub fn write_chart_data(data: &ChartData, dir: &Path) -> FeedbackResult<Vec<ChartArtifact>> {
    fs::create_dir_all(dir).map_err(FeedbackError::ChartWrite)?;

    let artifacts = ChartKind::ALL
        .iter()
        .map(|&kind| match kind {
            ChartKind::VolumeByTopic => write_spec(dir, kind, &data.volume_by_topic),
            ChartKind::SentimentBreakdown => write_spec(dir, kind, &data.sentiment_by_topic),
            ChartKind::VolumeTimeseries => write_spec(dir, kind, &data.monthly_volume),
        })
        .collect::<FeedbackResult<Vec<_>>>()?;

    tracing::info!(dir = %dir.display(), charts = artifacts.len(), "Wrote chart data");
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentimentLabel;
    use chrono::NaiveDate;

    fn record(m: u32, topic: TopicLabel, sentiment: SentimentLabel) -> EnrichedRecord {
        let timestamp = NaiveDate::from_ymd_opt(2025, m, 10)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        EnrichedRecord {
            timestamp,
            feedback_text: String::new(),
            topic,
            sentiment,
            polarity: 0.0,
            month: MonthBucket::from_datetime(&timestamp),
        }
    }

    #[test]
    fn monthly_series_fills_gaps() {
        let records = vec![
            record(1, TopicLabel::Sanitation, SentimentLabel::Negative),
            record(4, TopicLabel::Sanitation, SentimentLabel::Negative),
            record(1, TopicLabel::Sanitation, SentimentLabel::Positive),
        ];
        let data = ChartData::from_records(&records);
        let counts: Vec<usize> = data.monthly_volume.iter().map(|m| m.count).collect();
        assert_eq!(counts, vec![2, 0, 0, 1]);
        assert_eq!(data.monthly_volume[1].month, MonthBucket::new(2025, 2).unwrap());
    }

    #[test]
    fn sentiment_shares_are_per_topic() {
        let records = vec![
            record(1, TopicLabel::PublicSafety, SentimentLabel::Positive),
            record(1, TopicLabel::PublicSafety, SentimentLabel::Negative),
            record(1, TopicLabel::ParksRecLibrary, SentimentLabel::Neutral),
        ];
        let data = ChartData::from_records(&records);

        assert_eq!(data.sentiment_by_topic.len(), 2);
        assert_eq!(data.sentiment_by_topic[0].topic, TopicLabel::ParksRecLibrary);
        assert_eq!(data.sentiment_by_topic[0].shares.neutral, 1.0);
        let safety = &data.sentiment_by_topic[1].shares;
        assert_eq!((safety.positive, safety.neutral, safety.negative), (0.5, 0.0, 0.5));
        assert_eq!(data.volume_by_topic[0].topic, TopicLabel::PublicSafety);
    }

    #[test]
    fn empty_records_give_empty_series() {
        let data = ChartData::from_records(&[]);
        assert!(data.volume_by_topic.is_empty());
        assert!(data.monthly_volume.is_empty());
    }

    #[test]
    fn writes_one_spec_per_chart() {
        let dir = tempfile::tempdir().unwrap();
        let charts_dir = dir.path().join("charts");
        let data = ChartData::from_records(&[record(
            2,
            TopicLabel::WaterResources,
            SentimentLabel::Neutral,
        )]);

        let artifacts = write_chart_data(&data, &charts_dir).unwrap();

        assert_eq!(artifacts.len(), 3);
        for artifact in &artifacts {
            assert!(artifact.data_path.is_file());
            assert_eq!(artifact.image_path.extension().unwrap(), "png");
        }
        let spec = fs::read_to_string(charts_dir.join("volume_timeseries.json")).unwrap();
        assert!(spec.contains("Monthly Feedback Volume (All Topics)"));
        assert!(spec.contains("\"2025-02\""));
    }

    #[test]
    fn unwritable_dir_is_a_chart_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("charts");
        fs::write(&blocker, "").unwrap();

        let err = write_chart_data(&ChartData::from_records(&[]), &blocker).unwrap_err();

        assert!(matches!(err, FeedbackError::ChartWrite(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
