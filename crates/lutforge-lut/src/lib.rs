//! # lutforge-lut
//!
//! Look-Up Table types and operations for camera log LUT workflows.
//!
//! This crate provides the 1D and 3D LUT data structures plus the table
//! operations the rest of the workspace builds on: trilinear sampling,
//! LUT concatenation, resolution change, range analysis, sanitization,
//! and `.cube` file I/O.
//!
//! # LUT Types
//!
//! - [`Lut1D`] - per-channel curves
//! - [`Lut3D`] - full RGB cube
//!
//! # Usage
//!
//! ```rust
//! use lutforge_lut::Lut3D;
//!
//! let grade = Lut3D::identity(33);
//! let look = Lut3D::identity(17);
//!
//! // Apply to a pixel
//! let rgb = grade.apply([0.5, 0.3, 0.2]);
//!
//! // Concatenate: grade first, then look
//! let combined = grade.compose(&look);
//! assert_eq!(combined.size, 33);
//! ```
//!
//! # Table order
//!
//! 3D tables are stored red-fastest (index = r + g*N + b*N^2), matching the
//! `.cube` file line order, so serialization round-trips the table verbatim.
//!
//! # Used By
//!
//! - `lutforge-color` - LUT synthesis from log/gamut pipelines
//! - `lutforge-ops` - batch concatenation and resizing

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod analyze;
mod error;
mod lut1d;
mod lut3d;
pub mod cube;

pub use analyze::RangeStats;
pub use error::{LutError, LutResult};
pub use lut1d::Lut1D;
pub use lut3d::{DEFAULT_GRID_SIZE, Lut3D};
pub use cube::{read_1d as read_cube_1d, read_3d as read_cube_3d, write_3d as write_cube_3d};
