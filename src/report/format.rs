//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the fetch/shape code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{SeriesKind, Timeline, TimelineStats};

/// Format the run summary (window + latest counts).
pub fn format_run_summary(timeline: &Timeline, stats: &TimelineStats) -> String {
    let mut out = String::new();

    out.push_str("=== covid - 30-day historical timeline (disease.sh) ===\n");
    out.push_str(&format!("Country: {}\n", timeline.country));
    out.push_str(&format!(
        "Window: {} -> {} ({} days)\n",
        stats.first_date.as_deref().unwrap_or("-"),
        stats.last_date.as_deref().unwrap_or("-"),
        stats.n_days,
    ));
    out.push_str(&format!(
        "Latest: cases={} | deaths={} | recovered={}\n",
        stats.latest_cases, stats.latest_deaths, stats.latest_recovered,
    ));
    out.push_str(&format!("New cases (last day): {}\n", stats.new_cases));

    out
}

/// Format the trailing days of the timeline as a table.
pub fn format_latest_table(timeline: &Timeline, last_n: usize) -> String {
    let mut out = String::new();

    let start = timeline.len().saturating_sub(last_n);
    out.push_str(&format!("Last {} days:\n", timeline.len() - start));
    out.push_str(&format!(
        "{:<10} {:>12} {:>12} {:>12}\n",
        "date",
        SeriesKind::Cases.display_name(),
        SeriesKind::Deaths.display_name(),
        SeriesKind::Recovered.display_name(),
    ));

    for i in start..timeline.len() {
        out.push_str(&format!(
            "{:<10} {:>12} {:>12} {:>12}\n",
            timeline.dates[i], timeline.cases[i], timeline.deaths[i], timeline.recovered[i],
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline() -> Timeline {
        Timeline {
            country: "Indonesia".to_string(),
            dates: vec!["3/1/21".to_string(), "3/2/21".to_string(), "3/3/21".to_string()],
            cases: vec![100, 120, 150],
            deaths: vec![5, 6, 6],
            recovered: vec![50, 60, 70],
        }
    }

    #[test]
    fn summary_lists_window_and_latest_counts() {
        let t = timeline();
        let txt = format_run_summary(&t, &t.stats());

        assert!(txt.contains("Country: Indonesia"));
        assert!(txt.contains("Window: 3/1/21 -> 3/3/21 (3 days)"));
        assert!(txt.contains("Latest: cases=150 | deaths=6 | recovered=70"));
        assert!(txt.contains("New cases (last day): 30"));
    }

    #[test]
    fn latest_table_shows_trailing_days_only() {
        let t = timeline();
        let txt = format_latest_table(&t, 2);

        assert!(txt.contains("Last 2 days:"));
        assert!(!txt.contains("3/1/21"));
        assert!(txt.contains("3/2/21"));
        assert!(txt.contains("3/3/21"));
    }

    #[test]
    fn latest_table_handles_short_timelines() {
        let t = timeline();
        let txt = format_latest_table(&t, 10);
        assert!(txt.contains("Last 3 days:"));
        assert!(txt.contains("3/1/21"));
    }
}
