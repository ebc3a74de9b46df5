use std::path::PathBuf;

use clap::Parser;
use feedback_digest::config::{DEFAULT_CHART_DIR, DEFAULT_REPORT_PATH};
use feedback_digest::{
    analyze_feedback, assemble_report, load_feedback_csv, write_chart_data, write_report,
    ChartData, ReportConfig, SentimentScorer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file with `timestamp` and `feedback_text` columns
    path: PathBuf,
    #[clap(short, long, help = "Report heading (defaults to the Q1-Q2 2025 title)")]
    title: Option<String>,
    #[clap(short, long, default_value = DEFAULT_CHART_DIR, help = "Directory for chart data and images")]
    chart_dir: PathBuf,
    #[clap(short, long, default_value = DEFAULT_REPORT_PATH, help = "Where to write the markdown report")]
    output: PathBuf,
    #[clap(short, long, help = "Also write the aggregate statistics as JSON to this file")]
    json: Option<PathBuf>,
    #[clap(short, long, help = "Print findings and recommendations only; write no files")]
    summary_only: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("feedback_digest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    tracing::info!(path = %args.path.display(), "Starting resident feedback analysis");

    let records = load_feedback_csv(&args.path)?;
    let output = analyze_feedback(&records, SentimentScorer::default())?;
    tracing::info!("Insights and recommendations generated");

    if args.summary_only {
        println!("{}", output.narrative.findings);
        println!("{}", output.narrative.recommendations);
        return Ok(());
    }

    let mut config = ReportConfig::default().with_chart_output_dir(&args.chart_dir);
    if let Some(title) = args.title {
        config = config.with_title(title);
    }

    if let Some(json_path) = &args.json {
        output.report.write_json(json_path)?;
    }

    let charts = write_chart_data(&ChartData::from_records(&output.records), config.chart_output_dir())?;
    let blocks = assemble_report(&config, &output.narrative, &charts);
    write_report(&blocks, &args.output)?;

    println!("Pipeline complete. Open '{}' to view the summary.", args.output.display());
    Ok(())
}
