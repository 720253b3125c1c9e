//! Output Generation
//!
//! Distribution statistics, snapshot files, histograms and the run summary.

pub mod stats;
pub mod writer;

pub use stats::*;
pub use writer::*;
