//! Per-item batch results.

use lutforge_lut::RangeStats;
use std::path::PathBuf;

/// Outcome of a single batch item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    /// The item completed and its output was written.
    Ok,
    /// The item failed; `message` carries the reason.
    Error,
}

/// The result of one batch WorkItem.
///
/// A batch returns one record per item regardless of how many failed.
/// Completion order under parallel execution is nondeterministic, so each
/// record carries its own identifying name; consumers must not assume any
/// ordering.
#[derive(Debug, Clone)]
pub struct ResultRecord {
    /// Identifying name (derived from the input file stems).
    pub name: String,
    /// Ok or Error.
    pub status: ItemStatus,
    /// Smallest component value of the combined table.
    pub min: f32,
    /// Largest component value of the combined table.
    pub max: f32,
    /// Fraction of components outside [0, 1].
    pub clipped_ratio: f32,
    /// Where the output was written (None on failure).
    pub output_path: Option<PathBuf>,
    /// Failure reason, empty on success.
    pub message: String,
}

impl ResultRecord {
    /// Builds a success record from the item's range stats.
    pub fn success(name: impl Into<String>, stats: RangeStats, output_path: PathBuf) -> Self {
        Self {
            name: name.into(),
            status: ItemStatus::Ok,
            min: stats.min,
            max: stats.max,
            clipped_ratio: stats.clipped_ratio,
            output_path: Some(output_path),
            message: String::new(),
        }
    }

    /// Builds an error record.
    pub fn failure(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ItemStatus::Error,
            min: 0.0,
            max: 0.0,
            clipped_ratio: 0.0,
            output_path: None,
            message: message.into(),
        }
    }

    /// True if the item completed.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status == ItemStatus::Ok
    }

    /// True if the combined table had components outside [0, 1].
    #[inline]
    pub fn is_clipped(&self) -> bool {
        self.clipped_ratio > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_record() {
        let stats = RangeStats {
            min: -0.1,
            max: 1.2,
            clipped_ratio: 0.05,
        };
        let r = ResultRecord::success("a_PLUS_b", stats, PathBuf::from("out.cube"));
        assert!(r.is_ok());
        assert!(r.is_clipped());
        assert!(r.message.is_empty());
    }

    #[test]
    fn test_failure_record() {
        let r = ResultRecord::failure("broken", "parse error: bad line");
        assert!(!r.is_ok());
        assert!(r.output_path.is_none());
        assert!(r.message.contains("parse error"));
    }
}
