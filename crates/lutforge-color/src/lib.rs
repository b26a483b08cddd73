//! # lutforge-color
//!
//! Log-to-log LUT synthesis: the registry of supported camera log formats
//! and the pipeline that turns a (source, target) pair into a 3D LUT.
//!
//! # Pipeline
//!
//! For every lattice point of a fresh identity grid:
//!
//! ```text
//! decode source log -> linear | gamut matrix (with CAT) | linear -> encode target log
//! ```
//!
//! followed by a mandatory sanitize pass (NaN/Inf replacement + unit clamp)
//! whose magnitude is reported via range statistics.
//!
//! # Usage
//!
//! ```rust
//! use lutforge_color::{synthesize, AdaptationMethod, LogFormat};
//!
//! let source: LogFormat = "logc4".parse().unwrap();
//! let target: LogFormat = "s-log3".parse().unwrap();
//! let (lut, stats) = synthesize(source, target, 17, AdaptationMethod::Cat02).unwrap();
//! assert_eq!(lut.size, 17);
//! assert!(stats.max.is_finite());
//! ```
//!
//! # Dependencies
//!
//! - [`lutforge-transfer`] - the curve implementations
//! - [`lutforge-primaries`] - gamut matrices
//! - [`lutforge-lut`] - the output grid
//!
//! # Used By
//!
//! - `lutforge-ops` - generation entry points

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod registry;
mod synth;

pub use error::{ColorError, ColorResult};
pub use registry::{AdaptationMethod, LogFormat};
pub use synth::{gamut_matrix, synthesize};
