use std::fs;
use std::path::Path;

use tracing::info;

use crate::model::{JobListing, SinkError};

/// Serializes the accepted records as a pretty-printed JSON array,
/// written once at the end of the run. A failure here leaves the
/// in-memory sequence untouched; the caller may retry or pick another
/// path.
pub fn write_records(path: &str, records: &[JobListing]) -> Result<(), SinkError> {
    let json = serde_json::to_string_pretty(records)?;

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, json)?;

    info!("Wrote {} record(s) to {}", records.len(), path);
    Ok(())
}
