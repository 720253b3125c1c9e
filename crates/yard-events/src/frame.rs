//! Frame Naming
//!
//! File names for the per-frame artifacts written by a run.

/// Histogram of the final population state, written once at the end of a run.
pub const FINAL_FRAME_FILE: &str = "hist.svg";

/// JSON-lines file holding one snapshot per frame.
pub const SNAPSHOTS_FILE: &str = "snapshots.jsonl";

/// Pretty-printed end-of-run summary.
pub const SUMMARY_FILE: &str = "summary.json";

/// Zero-padding width for frame numbers in a run of `steps` frames.
///
/// This is `floor(log10(steps))`, so a 100-frame run numbers its files
/// `00` through `99` and a 1000-frame run `000` through `999`.
pub fn frame_digits(steps: u64) -> usize {
    steps.checked_ilog10().unwrap_or(0) as usize
}

/// Histogram file name for a single frame.
pub fn frame_file_name(frame: u64, digits: usize) -> String {
    format!("hist.{:0width$}.svg", frame, width = digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_digits() {
        assert_eq!(frame_digits(0), 0);
        assert_eq!(frame_digits(1), 0);
        assert_eq!(frame_digits(9), 0);
        assert_eq!(frame_digits(10), 1);
        assert_eq!(frame_digits(100), 2);
        assert_eq!(frame_digits(999), 2);
        assert_eq!(frame_digits(1000), 3);
    }

    #[test]
    fn test_frame_file_name() {
        assert_eq!(frame_file_name(0, 2), "hist.00.svg");
        assert_eq!(frame_file_name(7, 2), "hist.07.svg");
        assert_eq!(frame_file_name(99, 2), "hist.99.svg");
        assert_eq!(frame_file_name(5, 0), "hist.5.svg");
    }

    #[test]
    fn test_frame_names_sort_lexically() {
        let digits = frame_digits(100);
        let mut names: Vec<String> = (0..100).map(|f| frame_file_name(f, digits)).collect();
        let ordered = names.clone();
        names.sort();
        assert_eq!(names, ordered);
    }
}
