//! # lutforge-math
//!
//! Math primitives for LUT generation and color space conversion.
//!
//! - [`Vec3`] - RGB/XYZ triplets
//! - [`Mat3`] - 3x3 matrices for gamut conversion and adaptation
//! - Chromatic adaptation transforms (Bradford, CAT02, Von Kries)
//!
//! # Convention
//!
//! Matrices are stored **row-major** and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use lutforge_math::{Mat3, Vec3};
//!
//! let m = Mat3::diagonal(2.0, 1.0, 0.5);
//! let rgb = Vec3::new(0.18, 0.18, 0.18);
//! let scaled = m * rgb;
//! ```
//!
//! # Used By
//!
//! - `lutforge-primaries` - RGB/XYZ matrix generation
//! - `lutforge-color` - Gamut conversion matrices

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;
mod adapt;

pub use mat3::*;
pub use vec3::*;
pub use adapt::*;
