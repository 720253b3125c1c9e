//! Run Output
//!
//! Writes each frame's snapshot as a JSON line, optionally renders its
//! histogram, and writes the summary when the run finishes.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use yard_events::{
    frame_digits, frame_file_name, RunSummary, WealthSnapshot, FINAL_FRAME_FILE, SNAPSHOTS_FILE,
    SUMMARY_FILE,
};
use yard_plot::{render_snapshot, ChartStyle};

use crate::config::SimConfig;
use crate::error::OutputError;

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> OutputError + '_ {
    move |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Writes the artifacts of a single run into its output directory
pub struct RunWriter {
    output_dir: PathBuf,
    digits: usize,
    bins: usize,
    render: bool,
    style: ChartStyle,
    snapshots: BufWriter<File>,
    frames_written: u64,
}

impl RunWriter {
    /// Create the output directory and start a fresh snapshots file.
    pub fn create(config: &SimConfig) -> Result<Self, OutputError> {
        let output_dir = config.output_dir.clone();
        fs::create_dir_all(&output_dir).map_err(io_err(&output_dir))?;

        let snapshots_path = output_dir.join(SNAPSHOTS_FILE);
        let file = File::create(&snapshots_path).map_err(io_err(&snapshots_path))?;

        info!(dir = %output_dir.display(), render = config.render, "writing run output");

        Ok(Self {
            output_dir,
            digits: frame_digits(config.steps),
            bins: config.bins,
            render: config.render,
            style: ChartStyle::default(),
            snapshots: BufWriter::new(file),
            frames_written: 0,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Path of the histogram for `frame`.
    pub fn frame_path(&self, frame: u64) -> PathBuf {
        self.output_dir.join(frame_file_name(frame, self.digits))
    }

    /// Append the snapshot and render its histogram.
    pub fn write_frame(&mut self, snapshot: &WealthSnapshot) -> Result<(), OutputError> {
        let line = snapshot.to_jsonl()?;
        let snapshots_path = self.output_dir.join(SNAPSHOTS_FILE);
        writeln!(self.snapshots, "{}", line).map_err(io_err(&snapshots_path))?;

        if self.render {
            let path = self.frame_path(snapshot.frame);
            render_snapshot(&path, snapshot, self.bins, &self.style)?;
        }

        self.frames_written += 1;
        debug!(frame = snapshot.frame, "wrote frame");
        Ok(())
    }

    /// Render the final state, flush snapshots and write the summary.
    ///
    /// Returns the summary path.
    pub fn finish(
        mut self,
        last: &WealthSnapshot,
        summary: &RunSummary,
    ) -> Result<PathBuf, OutputError> {
        if self.render {
            let path = self.output_dir.join(FINAL_FRAME_FILE);
            render_snapshot(&path, last, self.bins, &self.style)?;
        }

        let snapshots_path = self.output_dir.join(SNAPSHOTS_FILE);
        self.snapshots.flush().map_err(io_err(&snapshots_path))?;

        let summary_path = self.output_dir.join(SUMMARY_FILE);
        let json = summary.to_json_pretty()?;
        fs::write(&summary_path, json).map_err(io_err(&summary_path))?;

        info!(
            frames = self.frames_written,
            summary = %summary_path.display(),
            "run output complete"
        );
        Ok(summary_path)
    }
}
