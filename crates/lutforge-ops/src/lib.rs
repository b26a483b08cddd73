//! # lutforge-ops
//!
//! The operation layer: everything a front end (CLI, GUI) calls.
//!
//! - [`process`] - concatenate two LUT inputs, batching over a directory
//!   when one side is a directory, under a bounded worker pool with
//!   per-item failure isolation
//! - [`generate`] / [`generate_many`] - synthesize log-to-log conversion
//!   LUTs from the format registry
//! - [`resize`] - resample an existing LUT to a new resolution
//!
//! # Failure policy
//!
//! Structural errors (both inputs are directories, a file path where a
//! directory is required, an unknown format name) fail the whole call
//! before any I/O. Per-item errors inside a batch (malformed file,
//! unreadable path) are caught at the item boundary and reported as
//! error-status [`ResultRecord`]s; sibling items always run to completion.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lutforge_ops::process;
//!
//! // Pair every LUT in a directory against one grade, 8 workers.
//! let records = process("./camera_luts".as_ref(), "grade.cube".as_ref(),
//!                       "./out".as_ref(), 8)?;
//! for r in &records {
//!     println!("{}: {:?}", r.name, r.status);
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod batch;
mod error;
mod generate;
mod report;
mod resize;

pub use batch::{combine_pair, load_as_3d, process};
pub use error::{OpsError, OpsResult};
pub use generate::{generate, generate_many};
pub use report::{ItemStatus, ResultRecord};
pub use resize::resize;
