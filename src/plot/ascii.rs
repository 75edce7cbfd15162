//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Each dataset draws as a connected polyline using its own mark character.
//! Cells are written once; when series overlap, the earliest dataset in the
//! chart spec wins the contested cell.

use crate::domain::ChartSpec;

/// Render a chart spec onto a fixed character grid.
pub fn render_ascii_plot(spec: &ChartSpec, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let n = spec.n_points();
    let (y_min, y_max) = spec
        .y_range()
        .map(|(lo, hi)| (lo as f64, hi as f64))
        .filter(|(lo, hi)| hi > lo)
        .unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    for series in &spec.series {
        draw_series(&mut grid, &series.data, n, y_min, y_max, series.mark);
    }

    // Header + legend, then the grid.
    let mut out = String::new();
    out.push_str(&format!(
        "Plot: {} | days={n} | y=[{y_min:.1}, {y_max:.1}]\n",
        spec.title
    ));
    let legend: Vec<String> = spec
        .series
        .iter()
        .map(|s| format!("{} {}", s.mark, s.label))
        .collect();
    out.push_str(&legend.join("  "));
    out.push('\n');

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn draw_series(grid: &mut [Vec<char>], data: &[u64], n: usize, y_min: f64, y_max: f64, mark: char) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for (i, &value) in data.iter().enumerate() {
        let x = map_x(i, n, width);
        let y = map_y(value as f64, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, y, mark);
        } else {
            set_cell(grid, x, y, mark);
        }
        prev = Some((x, y));
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(i: usize, n: usize, width: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    let u = (i as f64 / (n as f64 - 1.0)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn set_cell(grid: &mut [Vec<char>], x: usize, y: usize, ch: char) {
    if y < grid.len() && x < grid[0].len() && grid[y][x] == ' ' {
        grid[y][x] = ch;
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if x0 >= 0 && y0 >= 0 {
            set_cell(grid, x0 as usize, y0 as usize, ch);
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChartSeries, Timeline};

    #[test]
    fn plot_golden_snapshot_small() {
        let spec = ChartSpec {
            title: "t".to_string(),
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            labels: vec!["3/1/21".to_string(), "3/2/21".to_string()],
            series: vec![ChartSeries {
                label: "Cases".to_string(),
                color: (255, 99, 132),
                fill: false,
                mark: '*',
                data: vec![0, 10],
            }],
        };

        let txt = render_ascii_plot(&spec, 10, 5);
        let expected = concat!(
            "Plot: t | days=2 | y=[-0.5, 10.5]\n",
            "* Cases\n",
            "        **\n",
            "      **  \n",
            "    **    \n",
            "  **      \n",
            "**        \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn three_series_draw_with_distinct_marks() {
        let timeline = Timeline {
            country: "Indonesia".to_string(),
            dates: (1..=5).map(|d| format!("3/{d}/21")).collect(),
            cases: vec![100, 120, 150, 180, 200],
            deaths: vec![5, 6, 6, 7, 8],
            recovered: vec![50, 60, 70, 85, 90],
        };
        let spec = ChartSpec::from_timeline(&timeline);

        let txt = render_ascii_plot(&spec, 40, 12);

        assert!(txt.contains("Plot: Coronavirus Cases in Indonesia for 30 Days"));
        assert!(txt.contains("* Cases  x Deaths  o Recovered"));
        assert!(txt.contains('*'));
        assert!(txt.contains('x'));
        assert!(txt.contains('o'));
    }

    #[test]
    fn render_is_deterministic() {
        let timeline = Timeline {
            country: "Indonesia".to_string(),
            dates: vec!["3/1/21".to_string(), "3/2/21".to_string()],
            cases: vec![100, 120],
            deaths: vec![5, 6],
            recovered: vec![50, 60],
        };
        let spec = ChartSpec::from_timeline(&timeline);

        assert_eq!(
            render_ascii_plot(&spec, 30, 10),
            render_ascii_plot(&spec, 30, 10)
        );
    }
}
