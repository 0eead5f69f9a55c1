//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - monthly inflation history: `-` line
//! - forecast values: `F`
//! - forecast band bounds: `:`
//!
//! The x-axis is the period index (history, then forecast months).

use crate::domain::{ForecastPoint, Observation};

/// Render the inflation history followed by the forecast.
pub fn render_inflation_plot(
    history: &[Observation],
    forecast: &[ForecastPoint],
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let n = history.len();
    let total = n + forecast.len();
    let x_min = 0.0;
    let x_max = if total > 1 { (total - 1) as f64 } else { 1.0 };

    let series: Vec<(f64, f64)> = history
        .iter()
        .enumerate()
        .filter_map(|(i, o)| o.inflation_monthly_pct.map(|v| (i as f64, v)))
        .collect();

    let (y_min, y_max) = y_range(&series, forecast).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];

    draw_curve(&mut grid, &series, x_min, x_max, y_min, y_max);

    for p in forecast {
        // Forecast month h sits h periods after the last observation.
        let t = (n + p.horizon - 1) as f64;
        let x = map_x(t, x_min, x_max, width);
        for bound in [p.lower, p.upper] {
            let y = map_y(bound, y_min, y_max, height);
            grid[y][x] = ':';
        }
        let y = map_y(p.predicted, y_min, y_max, height);
        grid[y][x] = 'F';
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: periods=[1, {total}] | inflation=[{y_min:.2}, {y_max:.2}]% | horizon={}\n",
        forecast.len()
    ));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn y_range(series: &[(f64, f64)], forecast: &[ForecastPoint]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    let forecast_values = forecast.iter().flat_map(|p| [p.lower, p.predicted, p.upper]);
    for y in series.iter().map(|&(_, y)| y).chain(forecast_values) {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[(f64, f64)], t_min: f64, t_max: f64, y_min: f64, y_max: f64) {
    let Some(first_row) = grid.first() else {
        return;
    };
    let width = first_row.len();
    let height = grid.len();

    let mut prev = None;
    for &(t, y) in curve {
        let x = map_x(t, t_min, t_max, width);
        let yy = map_y(y, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, yy, '-');
        } else {
            grid[yy][x] = '-';
        }
        prev = Some((x, yy));
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
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
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
