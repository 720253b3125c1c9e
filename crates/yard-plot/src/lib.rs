//! Histogram rendering for yard-sale wealth snapshots.
//!
//! Bins a frame's wealth values and draws them as an SVG bar chart.

pub mod histogram;
pub mod render;

pub use histogram::{Bin, Histogram};
pub use render::{render_histogram, render_snapshot, ChartStyle};

/// Errors from binning or drawing a histogram.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// There were no values to bin.
    #[error("no values to plot")]
    EmptyValues,

    /// A histogram needs at least one bin.
    #[error("bin count must be at least 1")]
    ZeroBins,

    /// The drawing backend failed.
    #[error("drawing failed: {0}")]
    Draw(String),
}
