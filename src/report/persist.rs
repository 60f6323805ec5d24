//! Writes an [`AnalysisResult`] to disk as compact JSON.

use crate::report::builder::AnalysisResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Default file name of the persisted record.
pub const DEFAULT_OUTPUT_FILE: &str = "analysis_result.json";

/// Errors that can occur while persisting a report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

type Result<T> = core::result::Result<T, ReportError>;

/// Writes the record to `path`, replacing anything already there.
///
/// # Arguments
/// * `result` - The merged analysis of all groups.
/// * `path` - Destination file. Its parent directory must already exist.
///
/// # Returns
/// * `Ok(())` - If the file was fully written and flushed
/// * `Err(ReportError)` - If the file could not be created or written
pub fn write_report(result: &AnalysisResult, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, result)?;
    writer.flush()?;

    info!(
        path = %path.display(),
        groups = result.mutable_indices.len(),
        allowed_chars = result.allowed_chars.len(),
        "wrote analysis report"
    );
    Ok(())
}
