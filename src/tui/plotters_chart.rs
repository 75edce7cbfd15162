//! Plotters-powered timeline chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart` widget?
//! - nicer axis + mesh rendering
//! - less manual work for ticks/labels
//! - easy to extend later (legend, annotations, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::ChartSpec;

/// A lightweight, render-only chart description.
///
/// The widget is intentionally data-driven: the datasets, labels, and bounds
/// are computed outside the render call. This keeps `render()` focused on
/// drawing and makes it easy to test the data prep separately.
pub struct TimelineChart<'a> {
    /// The chart configuration (shared label axis + one line per dataset).
    pub spec: &'a ChartSpec,
    /// X bounds (label indices).
    pub x_bounds: [f64; 2],
    /// Y bounds (counts).
    pub y_bounds: [f64; 2],
}

impl<'a> Widget for TimelineChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a
        // chart. In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let x0 = self.x_bounds[0];
        let x1 = self.x_bounds[1];
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite())
            || x1 <= x0
            || y1 <= y0
        {
            return;
        }

        // `plotters-ratatui-backend` draws Plotters primitives via Ratatui's
        // `Canvas` widget, which ultimately writes to the terminal buffer.
        //
        // We delegate rendering to the crate-provided widget helper to avoid
        // coupling our code to its internal backend types.
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                // Small margins keep the chart readable without wasting space.
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                // The left area is wider than usual because cumulative counts
                // run into seven digits.
                .set_label_area_size(LabelAreaPosition::Left, 9)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            // Axes + tick labels.
            //
            // We disable the mesh lines to reduce visual clutter in
            // low-resolution terminal rendering; the axes + labels are enough
            // for reading trends.
            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.spec.x_label.as_str())
                .y_desc(self.spec.y_label.as_str())
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| date_label(&self.spec.labels, *v))
                .y_label_formatter(&|v| format!("{v:.0}"))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            // One unfilled line per dataset; colors come from the chart spec
            // so the header legend matches the chart.
            for series in &self.spec.series {
                let (r, g, b) = series.color;
                chart.draw_series(LineSeries::new(
                    series
                        .data
                        .iter()
                        .enumerate()
                        .map(|(i, &v)| (i as f64, v as f64)),
                    &RGBColor(r, g, b),
                ))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}

/// Map an x tick position back to its date label.
fn date_label(labels: &[String], v: f64) -> String {
    if labels.is_empty() {
        return String::new();
    }
    let i = (v.round().max(0.0) as usize).min(labels.len() - 1);
    labels[i].clone()
}
