//! Shared snapshot types and serialization for the yard-sale simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod frame;
pub mod snapshot;
pub mod summary;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

// Re-export frame naming helpers
pub use frame::{
    frame_digits, frame_file_name, FINAL_FRAME_FILE, SNAPSHOTS_FILE, SUMMARY_FILE,
};

// Re-export snapshot types
pub use snapshot::{generate_snapshot_id, DistributionStats, RoundReport, WealthSnapshot};

// Re-export summary types
pub use summary::{ConfigSnapshot, RunSummary};
