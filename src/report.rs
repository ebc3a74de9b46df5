//! Report layout as plain content blocks.
//!
//! A document renderer (PDF or otherwise) consumes [`ContentBlock`]s in order. The markdown
//! rendering here is the built-in consumer used by the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use crate::charts::ChartArtifact;
use crate::config::ReportConfig;
use crate::error::{FeedbackError, FeedbackResult};
use crate::narrative::NarrativeText;

/// Fraction of the page width each chart image spans.
pub const CHART_WIDTH_FRACTION: f64 = 0.9;

#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Title { heading: String, subtitle: String },
    Section(String),
    Paragraph(String),
    Image { path: PathBuf, caption: String, width_fraction: f64 },
    PageBreak,
}

pub fn assemble_report(
    config: &ReportConfig,
    narrative: &NarrativeText,
    charts: &[ChartArtifact],
) -> Vec<ContentBlock> {
    let mut blocks = vec![
        ContentBlock::Title {
            heading: config.title().to_string(),
            subtitle: format!("Report Generated: {}", config.generated_on()),
        },
        ContentBlock::Section("1. Executive Summary & Key Findings".to_string()),
        ContentBlock::Paragraph(narrative.findings.clone()),
        ContentBlock::Section("2. Data-Driven Recommendations".to_string()),
        ContentBlock::Paragraph(narrative.recommendations.clone()),
        ContentBlock::PageBreak,
        ContentBlock::Section("3. Visual Analysis".to_string()),
        ContentBlock::Paragraph(
            "The following charts provide a visual breakdown of the feedback data.".to_string(),
        ),
    ];

    blocks.extend(charts.iter().map(|chart| ContentBlock::Image {
        path: chart.image_path.clone(),
        caption: chart.kind.title().to_string(),
        width_fraction: CHART_WIDTH_FRACTION,
    }));
    blocks
}

pub fn render_markdown(blocks: &[ContentBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            ContentBlock::Title { heading, subtitle } => {
                out.push_str(&format!("# {heading}\n\n_{subtitle}_\n\n"));
            }
            ContentBlock::Section(title) => out.push_str(&format!("## {title}\n\n")),
            ContentBlock::Paragraph(text) => {
                out.push_str(text.trim_end());
                out.push_str("\n\n");
            }
            ContentBlock::Image { path, caption, .. } => {
                out.push_str(&format!("![{caption}]({})\n\n", path.display()));
            }
            ContentBlock::PageBreak => out.push_str("---\n\n"),
        }
    }
    out
}

/// Render `blocks` as markdown at `path`, creating parent directories.
pub fn write_report(blocks: &[ContentBlock], path: &Path) -> FeedbackResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(FeedbackError::ReportWrite)?;
    }
    fs::write(path, render_markdown(blocks)).map_err(FeedbackError::ReportWrite)?;
    tracing::info!(path = %path.display(), "Wrote report");
    Ok(())
}
