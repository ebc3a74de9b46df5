use std::fmt;

use chrono::{Datelike, Month, NaiveDateTime};
use serde::{Deserialize, Serialize, Serializer};

/// A feedback row as ingested. Records are identified by their position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub timestamp: String,
    #[serde(default)]
    pub feedback_text: String,
}

impl FeedbackRecord {
    pub fn new(timestamp: impl Into<String>, feedback_text: impl Into<String>) -> Self {
        FeedbackRecord {
            timestamp: timestamp.into(),
            feedback_text: feedback_text.into(),
        }
    }
}

/// Department a comment is routed to.
///
/// Variants are declared in the same order as the classifier's rule table, so the derived
/// `Ord` doubles as the tie-break order for rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TopicLabel {
    #[serde(rename = "Parks, Rec & Library")]
    ParksRecLibrary,
    #[serde(rename = "Public Works - Sanitation")]
    Sanitation,
    #[serde(rename = "Public Works - Transportation")]
    Transportation,
    #[serde(rename = "Community Development")]
    CommunityDevelopment,
    #[serde(rename = "Water Resources")]
    WaterResources,
    #[serde(rename = "Public Safety")]
    PublicSafety,
    #[serde(rename = "Code Enforcement")]
    CodeEnforcement,
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
}

impl TopicLabel {
    pub const ALL: [TopicLabel; 8] = [
        TopicLabel::ParksRecLibrary,
        TopicLabel::Sanitation,
        TopicLabel::Transportation,
        TopicLabel::CommunityDevelopment,
        TopicLabel::WaterResources,
        TopicLabel::PublicSafety,
        TopicLabel::CodeEnforcement,
        TopicLabel::GeneralInquiry,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TopicLabel::ParksRecLibrary => "Parks, Rec & Library",
            TopicLabel::Sanitation => "Public Works - Sanitation",
            TopicLabel::Transportation => "Public Works - Transportation",
            TopicLabel::CommunityDevelopment => "Community Development",
            TopicLabel::WaterResources => "Water Resources",
            TopicLabel::PublicSafety => "Public Safety",
            TopicLabel::CodeEnforcement => "Code Enforcement",
            TopicLabel::GeneralInquiry => "General Inquiry",
        }
    }
}

impl fmt::Display for TopicLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Calendar year-month grouping key. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthBucket {
    year: i32,
    month: u32,
}

impl MonthBucket {
    /// Returns `None` unless `month` is in `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(MonthBucket { year, month })
    }

    pub fn from_datetime(timestamp: &NaiveDateTime) -> Self {
        MonthBucket {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Full English month name, e.g. "January".
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            MonthBucket {
                year: self.year + 1,
                month: 1,
            }
        } else {
            MonthBucket {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for MonthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

impl Serialize for MonthBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:04}-{:02}", self.year, self.month))
    }
}

/// A feedback row after classification, scoring and month bucketing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    pub timestamp: NaiveDateTime,
    pub feedback_text: String,
    pub topic: TopicLabel,
    pub sentiment: SentimentLabel,
    pub polarity: f64,
    pub month: MonthBucket,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn month_bucket_orders_chronologically_and_rolls_over() {
        let dec = MonthBucket::new(2024, 12).unwrap();
        let jan = MonthBucket::new(2025, 1).unwrap();
        assert!(dec < jan);
        assert_eq!(dec.next(), jan);
        assert_eq!(jan.to_string(), "January 2025");
        assert!(MonthBucket::new(2025, 13).is_none());
    }

    #[test]
    fn month_bucket_ignores_day_and_time() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(MonthBucket::from_datetime(&ts), MonthBucket::new(2025, 3).unwrap());
        assert_eq!(
            serde_json::to_string(&MonthBucket::from_datetime(&ts)).unwrap(),
            "\"2025-03\""
        );
    }

    #[test]
    fn topic_labels_serialize_as_department_names() {
        let json = serde_json::to_string(&TopicLabel::ParksRecLibrary).unwrap();
        assert_eq!(json, "\"Parks, Rec & Library\"");
        for topic in TopicLabel::ALL {
            assert_eq!(
                serde_json::to_string(&topic).unwrap(),
                format!("\"{}\"", topic.name())
            );
        }
    }
}
