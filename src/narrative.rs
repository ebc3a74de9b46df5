use serde::Serialize;

use crate::aggregate::AggregateReport;

/// Fallback wording used wherever a "worst topic" would otherwise be named.
pub const NO_NEGATIVE_CONCENTRATION: &str = "No significant negative-sentiment concentration found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrativeText {
    pub findings: String,
    pub recommendations: String,
}

fn comments(count: usize) -> String {
    if count == 1 {
        "1 comment".to_string()
    } else {
        format!("{count} comments")
    }
}

/// Fills fixed prose templates from an [`AggregateReport`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NarrativeGenerator;

impl NarrativeGenerator {
    pub fn new() -> Self {
        NarrativeGenerator
    }

    pub fn generate(&self, report: &AggregateReport) -> NarrativeText {
        NarrativeText {
            findings: self.findings(report),
            recommendations: self.recommendations(report),
        }
    }

    fn findings(&self, report: &AggregateReport) -> String {
        let summary = format!(
            "This report analyzes {} from residents received between {} and {}. \
             The overall sentiment was {:.1}% positive.",
            comments(report.total_count),
            report.period.start.format("%b %-d, %Y"),
            report.period.end.format("%b %-d, %Y"),
            report.positive_percentage(),
        );

        let volume = match report.most_common_topic() {
            Some(top) if report.is_single_topic() => format!(
                "All {} concerned '{}'; no other topic was raised.",
                comments(top.count),
                top.topic
            ),
            Some(top) => format!(
                "'{}' was the most frequently discussed topic ({}), indicating it is a \
                 primary area of resident interaction.",
                top.topic,
                comments(top.count)
            ),
            None => "No topic data was available.".to_string(),
        };

        let concern = match report.worst_topic() {
            Some(worst) => format!(
                "'{}' received the highest number of negative comments ({}), suggesting a \
                 need for operational review and intervention.",
                worst.topic, worst.count
            ),
            None => format!(
                "{NO_NEGATIVE_CONCENTRATION}; no topic received negative comments in this period."
            ),
        };

        let peak = &report.peak_month;
        let seasonal = if report.is_single_month() {
            format!(
                "All feedback was received in {}; no month-over-month trend can be identified.",
                peak.month
            )
        } else {
            format!(
                "Feedback volume peaked in {} ({}). This predictability offers an \
                 opportunity for proactive resource allocation.",
                peak.month,
                comments(peak.count)
            )
        };

        format!(
            "{summary}\n\n\
             - **Highest Feedback Volume:** {volume}\n\n\
             - **Primary Area of Concern:** {concern}\n\n\
             - **Seasonal Trends:** {seasonal}\n"
        )
    }

    fn recommendations(&self, report: &AggregateReport) -> String {
        let concern = match report.worst_topic() {
            Some(worst) => format!(
                "1.  **For the '{}' Department:**\n\
                 \x20   - Conduct a root-cause analysis to understand the drivers of the {} negative {}.\n\
                 \x20   - Develop a targeted action plan to address the most common complaints within this topic.\n\
                 \x20   - Launch a communications initiative to inform the public of planned improvements.",
                worst.topic,
                worst.count,
                if worst.count == 1 { "comment" } else { "comments" }
            ),
            None => format!(
                "1.  **Sustaining Resident Satisfaction:**\n\
                 \x20   - {NO_NEGATIVE_CONCENTRATION}, so no department requires targeted intervention.\n\
                 \x20   - Keep monitoring incoming feedback so emerging complaints are caught early."
            ),
        };

        let volume = match report.most_common_topic() {
            Some(top) => format!(
                "2.  **For the '{}' Department:**\n\
                 \x20   - Since this is a high-volume area, review communication channels and processes to ensure they are efficient and user-friendly.\n\
                 \x20   - Leverage the high interaction rate to gather more detailed feedback through targeted surveys.",
                top.topic
            ),
            None => "2.  **Feedback Volume:**\n\
                     \x20   - No topic data was available; review how feedback is being collected."
                .to_string(),
        };

        let seasonal = if report.is_single_month() {
            format!(
                "3.  **Proactive Seasonal Planning:**\n\
                 \x20   - Only {} of data is available, so no seasonal peak can be planned for yet.\n\
                 \x20   - Continue collecting feedback across several months before setting seasonal staffing goals.",
                report.peak_month.month
            )
        } else {
            format!(
                "3.  **Proactive Seasonal Planning:**\n\
                 \x20   - Allocate additional resources ahead of predictable peaks such as {}, when volume reached {}.\n\
                 \x20   - Use historical data to anticipate needs for the next quarter and set proactive performance goals.",
                report.peak_month.month,
                comments(report.peak_month.count)
            )
        };

        format!(
            "Based on the analysis, the following actions are recommended:\n\n\
             {concern}\n\n{volume}\n\n{seasonal}\n"
        )
    }
}
