use serde::Serialize;

use crate::aggregate::{AggregateReport, InsightAggregator};
use crate::enrich::FeedbackEnricher;
use crate::error::FeedbackResult;
use crate::models::{EnrichedRecord, FeedbackRecord};
use crate::narrative::{NarrativeGenerator, NarrativeText};
use crate::sentiment::{SentimentScorer, TextSentimentScorer};

/// Everything one run derives from its input records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutput {
    pub records: Vec<EnrichedRecord>,
    pub report: AggregateReport,
    pub narrative: NarrativeText,
}

/// Enrich, aggregate and narrate `records` in one pass.
pub fn analyze_feedback<S: TextSentimentScorer>(
    records: &[FeedbackRecord],
    sentiment: SentimentScorer<S>,
) -> FeedbackResult<PipelineOutput> {
    let enriched = FeedbackEnricher::new(sentiment).enrich(records)?;
    let report = InsightAggregator::new().aggregate(&enriched)?;
    let narrative = NarrativeGenerator::new().generate(&report);

    Ok(PipelineOutput {
        records: enriched,
        report,
        narrative,
    })
}
