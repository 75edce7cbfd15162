//! Read/write timeline JSON files.
//!
//! Timeline JSON is the "portable" representation of one fetch:
//! - the shaped, date-aligned timeline
//! - run metadata (tool, source endpoint, window size)
//!
//! The schema is defined by `domain::TimelineFile`. `covid plot` re-renders
//! these files without touching the network.

use std::fs::File;
use std::path::Path;

use crate::data::disease_sh::LAST_DAYS;
use crate::domain::{Timeline, TimelineFile};
use crate::error::AppError;

/// Write a timeline JSON file.
pub fn write_timeline_json(path: &Path, timeline: &Timeline, source: &str) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::Io(format!(
            "Failed to create timeline JSON '{}': {e}",
            path.display()
        ))
    })?;

    let doc = TimelineFile {
        tool: "covid".to_string(),
        source: source.to_string(),
        last_days: LAST_DAYS,
        timeline: timeline.clone(),
    };

    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::Io(format!("Failed to write timeline JSON: {e}")))?;

    Ok(())
}

/// Read a timeline JSON file.
pub fn read_timeline_json(path: &Path) -> Result<TimelineFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::Io(format!(
            "Failed to open timeline JSON '{}': {e}",
            path.display()
        ))
    })?;
    let doc: TimelineFile = serde_json::from_reader(file)
        .map_err(|e| AppError::Io(format!("Invalid timeline JSON: {e}")))?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline() -> Timeline {
        Timeline {
            country: "Indonesia".to_string(),
            dates: vec!["3/1/21".to_string(), "3/2/21".to_string()],
            cases: vec![100, 120],
            deaths: vec![5, 6],
            recovered: vec![50, 60],
        }
    }

    #[test]
    fn timeline_json_round_trips() {
        let path = std::env::temp_dir().join(format!(
            "covid-curves-timeline-{}.json",
            std::process::id()
        ));

        let original = timeline();
        write_timeline_json(&path, &original, "https://disease.sh/test").unwrap();
        let doc = read_timeline_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(doc.tool, "covid");
        assert_eq!(doc.source, "https://disease.sh/test");
        assert_eq!(doc.last_days, LAST_DAYS);
        assert_eq!(doc.timeline, original);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_timeline_json(Path::new("/nonexistent/covid-curves.json")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)), "got {err:?}");
    }
}
