//! Ratatui-based terminal UI.
//!
//! The TUI fetches the 30-day timeline on startup and renders the three
//! count series as an overlaid line chart, with a header summarizing the
//! latest counts and a status line reporting fetch outcomes.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Terminal,
};

use crate::app::pipeline::{self, RunOutput};
use crate::data::DiseaseShClient;
use crate::domain::{ChartSpec, SeriesKind};
use crate::error::AppError;

mod plotters_chart;

use plotters_chart::TimelineChart;

/// Start the TUI.
pub fn run() -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::Render(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new();
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::Render(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::Render(format!(
                "Failed to enter alternate screen: {e}"
            )));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    client: DiseaseShClient,
    run: Option<RunOutput>,
    status: String,
}

impl App {
    fn new() -> Self {
        let mut app = Self {
            client: DiseaseShClient::new(),
            run: None,
            status: String::new(),
        };
        app.refresh();
        app
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::Render(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::Render(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::Render(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match key.code {
                        KeyCode::Char('q') => break,
                        KeyCode::Char('r') => self.refresh(),
                        _ => {}
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// One independent network call per invocation. A failure keeps any
    /// previously rendered data; it only shows in the status line.
    fn refresh(&mut self) {
        self.status = "Fetching disease.sh data...".to_string();
        match pipeline::run_fetch(&self.client) {
            Ok(run) => {
                self.status = format!(
                    "Fetched {} days for {}.",
                    run.stats.n_days, run.timeline.country
                );
                self.run = Some(run);
            }
            Err(err) => {
                self.status = format!("Fetch failed: {err}");
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_chart(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("covid", Style::default().fg(Color::Cyan)),
            Span::raw(" - disease.sh 30-day historical timeline"),
        ]));

        if let Some(run) = &self.run {
            lines.push(Line::from(Span::styled(
                format!(
                    "country: {} | window: {} -> {} | days: {}",
                    run.timeline.country,
                    run.stats.first_date.as_deref().unwrap_or("-"),
                    run.stats.last_date.as_deref().unwrap_or("-"),
                    run.stats.n_days,
                ),
                Style::default().fg(Color::Gray),
            )));

            // Legend doubles as the latest-count readout, tinted per series.
            let latest = [
                run.stats.latest_cases,
                run.stats.latest_deaths,
                run.stats.latest_recovered,
            ];
            let mut spans: Vec<Span> = Vec::new();
            for (kind, count) in SeriesKind::ALL.iter().zip(latest) {
                if !spans.is_empty() {
                    spans.push(Span::raw("  "));
                }
                let (r, g, b) = kind.color();
                spans.push(Span::styled(
                    format!("{}: {count}", kind.display_name()),
                    Style::default().fg(Color::Rgb(r, g, b)),
                ));
            }
            lines.push(Line::from(spans));
        } else {
            lines.push(Line::from(Span::styled(
                "no data",
                Style::default().fg(Color::Gray),
            )));
        }

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("COVID-19 Timeline").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(run) = &self.run else {
            let msg = Paragraph::new("Waiting for data...")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        };

        let spec = ChartSpec::from_timeline(&run.timeline);
        let (x_bounds, y_bounds) = chart_bounds(&spec);

        let widget = TimelineChart {
            spec: &spec,
            x_bounds,
            y_bounds,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "r refresh  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Compute chart bounds for the spec: x spans the label indices, y spans the
/// padded value range across all datasets.
fn chart_bounds(spec: &ChartSpec) -> ([f64; 2], [f64; 2]) {
    let n = spec.n_points();
    let x1 = if n > 1 { (n - 1) as f64 } else { 1.0 };

    let (mut y0, mut y1) = spec
        .y_range()
        .map(|(lo, hi)| (lo as f64, hi as f64))
        .unwrap_or((0.0, 1.0));
    if y1 <= y0 {
        y0 = 0.0;
        y1 = 1.0;
    }
    let pad = ((y1 - y0).abs() * 0.05).max(1e-12);

    ([0.0, x1], [y0 - pad, y1 + pad])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timeline;

    #[test]
    fn chart_bounds_cover_all_series_with_padding() {
        let timeline = Timeline {
            country: "Indonesia".to_string(),
            dates: vec!["3/1/21".to_string(), "3/2/21".to_string(), "3/3/21".to_string()],
            cases: vec![100, 120, 150],
            deaths: vec![5, 6, 6],
            recovered: vec![50, 60, 70],
        };
        let spec = ChartSpec::from_timeline(&timeline);

        let (x_bounds, y_bounds) = chart_bounds(&spec);
        assert_eq!(x_bounds, [0.0, 2.0]);
        assert!(y_bounds[0] < 5.0);
        assert!(y_bounds[1] > 150.0);
    }

    #[test]
    fn chart_bounds_degenerate_input_is_finite() {
        let empty = Timeline {
            country: "Indonesia".to_string(),
            dates: vec![],
            cases: vec![],
            deaths: vec![],
            recovered: vec![],
        };
        let spec = ChartSpec::from_timeline(&empty);

        let (x_bounds, y_bounds) = chart_bounds(&spec);
        assert!(x_bounds[1] > x_bounds[0]);
        assert!(y_bounds[1] > y_bounds[0]);
    }
}
