//! Explicit chart configuration.
//!
//! Renderers (the ASCII plot and the Plotters/Ratatui widget) are passed a
//! `ChartSpec` value rather than reaching for any ambient state. The shape
//! mirrors the classic line-chart config: a shared label axis, a list of
//! datasets with `label`/`data`/color/`fill`, and axis + chart titles.

use crate::domain::{SeriesKind, Timeline};

/// One dataset of the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    pub label: String,
    /// Line color as RGB; renderers translate to their own color type.
    pub color: (u8, u8, u8),
    /// Whether the area under the line is filled. Always `false` for these
    /// charts; kept explicit to mirror the upstream dataset config.
    pub fill: bool,
    /// Mark character used by the ASCII renderer.
    pub mark: char,
    pub data: Vec<u64>,
}

/// A render-ready line-chart description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Shared x-axis labels; every dataset aligns to this axis by index.
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    /// Build the three-series chart configuration for a shaped timeline.
    pub fn from_timeline(timeline: &Timeline) -> Self {
        let series = SeriesKind::ALL
            .iter()
            .map(|&kind| ChartSeries {
                label: kind.display_name().to_string(),
                color: kind.color(),
                fill: false,
                mark: kind.mark(),
                data: kind.values(timeline).to_vec(),
            })
            .collect();

        Self {
            title: format!("Coronavirus Cases in {} for 30 Days", timeline.country),
            x_label: "Date(MM/DD/YY)".to_string(),
            y_label: "Number of Cases".to_string(),
            labels: timeline.dates.clone(),
            series,
        }
    }

    /// Number of points on the shared axis.
    pub fn n_points(&self) -> usize {
        self.labels.len()
    }

    /// Range of y values across all datasets, if any data is present.
    pub fn y_range(&self) -> Option<(u64, u64)> {
        let mut min = u64::MAX;
        let mut max = 0u64;
        let mut seen = false;
        for series in &self.series {
            for &v in &series.data {
                min = min.min(v);
                max = max.max(v);
                seen = true;
            }
        }
        if seen { Some((min, max)) } else { None }
    }
}
