use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{FeedbackError, FeedbackResult};
use crate::models::FeedbackRecord;

/// Read records from CSV with a header row naming `timestamp` and `feedback_text`.
/// Other columns are ignored.
pub fn read_feedback_csv<R: Read>(reader: R) -> FeedbackResult<Vec<FeedbackRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    reader
        .deserialize::<FeedbackRecord>()
        .enumerate()
        .map(|(index, row)| row.map_err(|source| FeedbackError::InvalidRecord { index, source }))
        .collect()
}

pub fn load_feedback_csv(path: impl AsRef<Path>) -> FeedbackResult<Vec<FeedbackRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FeedbackError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_feedback_csv(file)?;
    tracing::info!(path = %path.display(), records = records.len(), "Loaded feedback records");
    Ok(records)
}
