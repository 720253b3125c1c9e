//! SVG Rendering
//!
//! Draws a [`Histogram`] with fixed axes so consecutive frames line up when
//! flipped through as an animation.

use plotters::prelude::*;
use std::path::Path;
use tracing::debug;
use yard_events::WealthSnapshot;

use crate::{Histogram, PlotError};

/// Chart layout
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub title: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    /// Width and height in pixels
    pub size: (u32, u32),
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Histogram".to_string(),
            x_range: (0.0, 100.0),
            y_range: (0.0, 100.0),
            // 4in x 4in at 96 dpi
            size: (384, 384),
        }
    }
}

fn draw_err<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Draw(e.to_string())
}

/// Render `hist` as an SVG file at `path`.
pub fn render_histogram(
    path: &Path,
    hist: &Histogram,
    style: &ChartStyle,
) -> Result<(), PlotError> {
    let root = SVGBackend::new(path, style.size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&style.title, ("sans-serif", 16))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(
            style.x_range.0..style.x_range.1,
            style.y_range.0..style.y_range.1,
        )
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("wealth")
        .y_desc("agents")
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(hist.bins().iter().map(|bin| {
            Rectangle::new(
                [(bin.min, 0.0), (bin.max, bin.count as f64)],
                BLUE.mix(0.6).filled(),
            )
        }))
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    debug!(
        path = %path.display(),
        bins = hist.bins().len(),
        peak = hist.peak(),
        "rendered histogram"
    );
    Ok(())
}

/// Bin a snapshot's wealth values and render them to `path`.
pub fn render_snapshot(
    path: &Path,
    snapshot: &WealthSnapshot,
    bins: usize,
    style: &ChartStyle,
) -> Result<(), PlotError> {
    let hist = Histogram::from_values(&snapshot.values_f64(), bins)?;
    render_histogram(path, &hist, style)
}
