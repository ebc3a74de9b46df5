use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use counter::Counter;
use serde::Serialize;

use crate::error::{FeedbackError, FeedbackResult};
use crate::models::{EnrichedRecord, MonthBucket, SentimentLabel, TopicLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopicCount {
    pub topic: TopicLabel,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub month: MonthBucket,
    pub count: usize,
}

/// One value per sentiment label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentSplit<T> {
    pub positive: T,
    pub neutral: T,
    pub negative: T,
}

impl<T: Copy> SentimentSplit<T> {
    pub fn get(&self, label: SentimentLabel) -> T {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    pub fn get_mut(&mut self, label: SentimentLabel) -> &mut T {
        match label {
            SentimentLabel::Positive => &mut self.positive,
            SentimentLabel::Neutral => &mut self.neutral,
            SentimentLabel::Negative => &mut self.negative,
        }
    }
}

impl SentimentSplit<usize> {
    /// Fractions of `total`. All zero when `total` is zero.
    pub fn proportions(&self, total: usize) -> SentimentSplit<f64> {
        let share = |count: usize| {
            if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            }
        };
        SentimentSplit {
            positive: share(self.positive),
            neutral: share(self.neutral),
            negative: share(self.negative),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportPeriod {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Statistics behind the narrative, computed once per run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub total_count: usize,
    /// Descending by count; ties follow the topic rule order.
    pub topic_ranking: Vec<TopicCount>,
    pub sentiment_counts: SentimentSplit<usize>,
    pub sentiment_proportions: SentimentSplit<f64>,
    /// Negative records only. Empty when nothing was negative.
    pub negative_by_topic: Vec<TopicCount>,
    /// Busiest month; ties go to the earliest.
    pub peak_month: MonthCount,
    pub distinct_months: usize,
    pub period: ReportPeriod,
}

impl AggregateReport {
    pub fn most_common_topic(&self) -> Option<&TopicCount> {
        self.topic_ranking.first()
    }

    pub fn worst_topic(&self) -> Option<&TopicCount> {
        self.negative_by_topic.first()
    }

    pub fn positive_percentage(&self) -> f64 {
        self.sentiment_proportions.positive * 100.0
    }

    pub fn is_single_topic(&self) -> bool {
        self.topic_ranking.len() == 1
    }

    pub fn is_single_month(&self) -> bool {
        self.distinct_months == 1
    }

    pub fn to_json(&self) -> FeedbackResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as pretty JSON at `path`, creating parent directories.
    pub fn write_json(&self, path: &Path) -> FeedbackResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(FeedbackError::ReportWrite)?;
        }
        fs::write(path, self.to_json()?).map_err(FeedbackError::ReportWrite)?;
        tracing::info!(path = %path.display(), "Wrote aggregate report JSON");
        Ok(())
    }
}

fn ranking(counts: &Counter<TopicLabel>) -> Vec<TopicCount> {
    counts
        .most_common_ordered()
        .into_iter()
        .map(|(topic, count)| TopicCount { topic, count })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InsightAggregator;

impl InsightAggregator {
    pub fn new() -> Self {
        InsightAggregator
    }

    pub fn aggregate(&self, records: &[EnrichedRecord]) -> FeedbackResult<AggregateReport> {
        let first = records.first().ok_or(FeedbackError::EmptyDataset)?;

        let mut topic_counts: Counter<TopicLabel> = Counter::new();
        let mut negative_counts: Counter<TopicLabel> = Counter::new();
        let mut month_counts: Counter<MonthBucket> = Counter::new();
        let mut sentiment_counts = SentimentSplit::<usize>::default();
        let mut period = ReportPeriod {
            start: first.timestamp,
            end: first.timestamp,
        };

        for record in records {
            topic_counts[&record.topic] += 1;
            month_counts[&record.month] += 1;
            *sentiment_counts.get_mut(record.sentiment) += 1;
            if record.sentiment == SentimentLabel::Negative {
                negative_counts[&record.topic] += 1;
            }
            period.start = period.start.min(record.timestamp);
            period.end = period.end.max(record.timestamp);
        }

        let (month, count) = month_counts
            .most_common_ordered()
            .into_iter()
            .next()
            .ok_or(FeedbackError::EmptyDataset)?;

        let report = AggregateReport {
            total_count: records.len(),
            topic_ranking: ranking(&topic_counts),
            sentiment_proportions: sentiment_counts.proportions(records.len()),
            sentiment_counts,
            negative_by_topic: ranking(&negative_counts),
            peak_month: MonthCount { month, count },
            distinct_months: month_counts.len(),
            period,
        };

        tracing::info!(
            total = report.total_count,
            topics = report.topic_ranking.len(),
            negative = report.sentiment_counts.negative,
            peak_month = %report.peak_month.month,
            "Aggregated feedback"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(y: i32, m: u32, d: u32, topic: TopicLabel, sentiment: SentimentLabel) -> EnrichedRecord {
        let timestamp = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
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
    fn empty_input_is_an_error() {
        assert!(matches!(
            InsightAggregator::new().aggregate(&[]),
            Err(FeedbackError::EmptyDataset)
        ));
    }

    #[test]
    fn topic_ties_follow_rule_order() {
        use SentimentLabel::*;
        use TopicLabel::*;
        let records = vec![
            record(2025, 1, 1, CodeEnforcement, Neutral),
            record(2025, 1, 2, WaterResources, Neutral),
            record(2025, 1, 3, CodeEnforcement, Neutral),
            record(2025, 1, 4, WaterResources, Neutral),
            record(2025, 1, 5, GeneralInquiry, Neutral),
            record(2025, 1, 6, GeneralInquiry, Neutral),
            record(2025, 1, 7, GeneralInquiry, Neutral),
        ];

        let report = InsightAggregator::new().aggregate(&records).unwrap();
        let order: Vec<(TopicLabel, usize)> =
            report.topic_ranking.iter().map(|t| (t.topic, t.count)).collect();
        assert_eq!(
            order,
            vec![(GeneralInquiry, 3), (WaterResources, 2), (CodeEnforcement, 2)]
        );
    }

    #[test]
    fn peak_month_ties_go_to_earliest() {
        use SentimentLabel::*;
        use TopicLabel::*;
        let records = vec![
            record(2025, 3, 1, PublicSafety, Neutral),
            record(2025, 3, 9, PublicSafety, Neutral),
            record(2024, 11, 2, PublicSafety, Neutral),
            record(2024, 11, 3, PublicSafety, Neutral),
            record(2025, 1, 3, PublicSafety, Neutral),
        ];

        let report = InsightAggregator::new().aggregate(&records).unwrap();
        assert_eq!(report.peak_month.month, MonthBucket::new(2024, 11).unwrap());
        assert_eq!(report.peak_month.count, 2);
        assert_eq!(report.distinct_months, 3);
        assert_eq!(report.period.start.date(), NaiveDate::from_ymd_opt(2024, 11, 2).unwrap());
        assert_eq!(report.period.end.date(), NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
    }

    #[test]
    fn proportions_sum_to_one() {
        use SentimentLabel::*;
        use TopicLabel::*;
        let sentiments = [Positive, Negative, Neutral, Negative, Negative, Positive, Neutral];
        let records: Vec<_> = sentiments
            .iter()
            .enumerate()
            .map(|(i, s)| record(2025, 2, 1 + i as u32, Sanitation, *s))
            .collect();

        let report = InsightAggregator::new().aggregate(&records).unwrap();
        let p = report.sentiment_proportions;
        assert!((p.positive + p.neutral + p.negative - 1.0).abs() < 1e-9);
        assert_eq!(report.sentiment_counts.negative, 3);
        assert!((report.positive_percentage() - 200.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn negative_ranking_counts_only_negative_records() {
        use SentimentLabel::*;
        use TopicLabel::*;
        let records = vec![
            record(2025, 1, 1, ParksRecLibrary, Positive),
            record(2025, 1, 2, ParksRecLibrary, Positive),
            record(2025, 1, 3, Sanitation, Negative),
            record(2025, 1, 4, Transportation, Negative),
            record(2025, 1, 5, Transportation, Negative),
        ];

        let report = InsightAggregator::new().aggregate(&records).unwrap();
        assert_eq!(
            report.negative_by_topic,
            vec![
                TopicCount { topic: Transportation, count: 2 },
                TopicCount { topic: Sanitation, count: 1 },
            ]
        );
        assert_eq!(report.most_common_topic().map(|t| t.topic), Some(ParksRecLibrary));
    }

    #[test]
    fn no_negatives_leaves_ranking_empty() {
        let records = vec![record(
            2025,
            4,
            1,
            TopicLabel::PublicSafety,
            SentimentLabel::Positive,
        )];

        let report = InsightAggregator::new().aggregate(&records).unwrap();
        assert!(report.negative_by_topic.is_empty());
        assert!(report.worst_topic().is_none());
        assert!(report.is_single_topic());
        assert!(report.is_single_month());
    }

    #[test]
    fn report_serializes_to_json() {
        let records = vec![record(
            2025,
            5,
            20,
            TopicLabel::WaterResources,
            SentimentLabel::Negative,
        )];
        let json = InsightAggregator::new().aggregate(&records).unwrap().to_json().unwrap();
        assert!(json.contains("\"peak_month\""));
        assert!(json.contains("\"2025-05\""));
        assert!(json.contains("\"Water Resources\""));
    }

    #[test]
    fn write_json_creates_parent_dirs() {
        let records = vec![record(
            2025,
            5,
            20,
            TopicLabel::WaterResources,
            SentimentLabel::Negative,
        )];
        let report = InsightAggregator::new().aggregate(&records).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/nested/report.json");

        report.write_json(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, report.to_json().unwrap());
    }

    #[test]
    fn write_json_failure_is_a_report_write_error() {
        let records = vec![record(
            2025,
            5,
            20,
            TopicLabel::WaterResources,
            SentimentLabel::Negative,
        )];
        let report = InsightAggregator::new().aggregate(&records).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        fs::write(&blocker, "").unwrap();

        let err = report.write_json(&blocker.join("report.json")).unwrap_err();

        assert!(matches!(err, FeedbackError::ReportWrite(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
