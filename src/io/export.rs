//! Export the shaped timeline to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts: one row per day, counts cumulative as fetched.

use std::path::Path;

use crate::domain::Timeline;
use crate::error::AppError;

/// Write the timeline to a CSV file (`date,cases,deaths,recovered`).
pub fn write_timeline_csv(path: &Path, timeline: &Timeline) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        AppError::Io(format!(
            "Failed to create export CSV '{}': {e}",
            path.display()
        ))
    })?;

    writer
        .write_record(["date", "cases", "deaths", "recovered"])
        .map_err(|e| AppError::Io(format!("Failed to write export CSV header: {e}")))?;

    for i in 0..timeline.len() {
        let record = [
            timeline.dates[i].clone(),
            timeline.cases[i].to_string(),
            timeline.deaths[i].to_string(),
            timeline.recovered[i].to_string(),
        ];
        writer
            .write_record(&record)
            .map_err(|e| AppError::Io(format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::Io(format!("Failed to flush export CSV: {e}")))?;

    Ok(())
}
