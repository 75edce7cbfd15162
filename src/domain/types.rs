//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - constructed once from a fetched document and consumed in-memory
//! - exported to JSON/CSV
//! - reloaded later for plotting without a network round trip

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The shaped, date-aligned 30-day timeline for one country.
///
/// Invariant: `dates`, `cases`, `deaths`, and `recovered` all have the same
/// length, and index *i* across the four vectors refers to the same calendar
/// day. The shaper (`crate::shape`) is the only constructor and guarantees
/// this by re-keying every input series by its parsed date.
///
/// Counts are cumulative, as reported upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub country: String,
    /// `M/D/YY` date labels, chronological.
    pub dates: Vec<String>,
    pub cases: Vec<u64>,
    pub deaths: Vec<u64>,
    pub recovered: Vec<u64>,
}

impl Timeline {
    /// Number of days covered.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Summary stats for reporting and the TUI header.
    pub fn stats(&self) -> TimelineStats {
        let last = self.len().checked_sub(1);
        let latest = |series: &[u64]| last.and_then(|i| series.get(i).copied()).unwrap_or(0);

        // Day-over-day increase on the latest day (cumulative series, so a
        // saturating diff guards against upstream corrections going backwards).
        let new_cases = match self.len() {
            0 => 0,
            1 => self.cases[0],
            n => self.cases[n - 1].saturating_sub(self.cases[n - 2]),
        };

        TimelineStats {
            n_days: self.len(),
            first_date: self.dates.first().cloned(),
            last_date: self.dates.last().cloned(),
            latest_cases: latest(&self.cases),
            latest_deaths: latest(&self.deaths),
            latest_recovered: latest(&self.recovered),
            new_cases,
        }
    }
}

/// Summary stats about a shaped timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineStats {
    pub n_days: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub latest_cases: u64,
    pub latest_deaths: u64,
    pub latest_recovered: u64,
    /// Increase in cumulative cases on the most recent day.
    pub new_cases: u64,
}

/// The three tracked count series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Cases,
    Deaths,
    Recovered,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 3] = [SeriesKind::Cases, SeriesKind::Deaths, SeriesKind::Recovered];

    /// Human-readable label used for chart datasets and table headers.
    pub fn display_name(self) -> &'static str {
        match self {
            SeriesKind::Cases => "Cases",
            SeriesKind::Deaths => "Deaths",
            SeriesKind::Recovered => "Recovered",
        }
    }

    /// Series line color, shared by every renderer.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            SeriesKind::Cases => (255, 99, 132),
            SeriesKind::Deaths => (153, 102, 255),
            SeriesKind::Recovered => (75, 192, 192),
        }
    }

    /// Single-character mark for the ASCII plot.
    pub fn mark(self) -> char {
        match self {
            SeriesKind::Cases => '*',
            SeriesKind::Deaths => 'x',
            SeriesKind::Recovered => 'o',
        }
    }

    /// The values of this series within a timeline.
    pub fn values(self, timeline: &Timeline) -> &[u64] {
        match self {
            SeriesKind::Cases => &timeline.cases,
            SeriesKind::Deaths => &timeline.deaths,
            SeriesKind::Recovered => &timeline.recovered,
        }
    }
}

/// A saved timeline file (JSON).
///
/// The "portable" representation of one fetch: enough metadata to know where
/// the data came from, plus the shaped timeline for re-plotting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineFile {
    pub tool: String,
    /// Endpoint the document was fetched from.
    pub source: String,
    /// Size of the historical window requested.
    pub last_days: u32,
    pub timeline: Timeline,
}

/// A full run's configuration as understood by the CLI front-end.
///
/// Presentation-only: the endpoint, country, and window are fixed constants
/// of the data layer and deliberately absent here.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_json: Option<PathBuf>,
    pub export_csv: Option<PathBuf>,
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
    fn stats_reports_latest_counts_and_daily_increase() {
        let stats = timeline().stats();
        assert_eq!(stats.n_days, 2);
        assert_eq!(stats.first_date.as_deref(), Some("3/1/21"));
        assert_eq!(stats.last_date.as_deref(), Some("3/2/21"));
        assert_eq!(stats.latest_cases, 120);
        assert_eq!(stats.latest_deaths, 6);
        assert_eq!(stats.latest_recovered, 60);
        assert_eq!(stats.new_cases, 20);
    }

    #[test]
    fn stats_on_empty_timeline_is_all_zero() {
        let empty = Timeline {
            country: "Indonesia".to_string(),
            dates: vec![],
            cases: vec![],
            deaths: vec![],
            recovered: vec![],
        };
        let stats = empty.stats();
        assert_eq!(stats.n_days, 0);
        assert_eq!(stats.first_date, None);
        assert_eq!(stats.latest_cases, 0);
        assert_eq!(stats.new_cases, 0);
    }

    #[test]
    fn series_kind_selects_matching_values() {
        let t = timeline();
        assert_eq!(SeriesKind::Cases.values(&t), &[100, 120]);
        assert_eq!(SeriesKind::Deaths.values(&t), &[5, 6]);
        assert_eq!(SeriesKind::Recovered.values(&t), &[50, 60]);
    }
}
