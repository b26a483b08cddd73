//! # lutforge-transfer
//!
//! Camera log transfer functions for LUT generation.
//!
//! Each module implements one manufacturer curve as a pair of pure scalar
//! functions: `encode` (scene-linear to log signal) and `decode` (log signal
//! to scene-linear), plus RGB helpers. All curves are scene-referred.
//!
//! # Supported Curves
//!
//! | Module | Curve | Camera system |
//! |--------|-------|---------------|
//! | [`s_log3`] | S-Log3 | Sony |
//! | [`f_log`] | F-Log | Fujifilm |
//! | [`f_log2`] | F-Log2 | Fujifilm |
//! | [`canon_log`] | Canon Log 2 / Canon Log 3 | Canon Cinema EOS |
//! | [`log_c`] | LogC3 (EI 800) | ARRI ALEXA |
//! | [`log_c4`] | LogC4 | ARRI ALEXA 35 |
//! | [`v_log`] | V-Log | Panasonic |
//! | [`n_log`] | N-Log | Nikon |
//! | [`l_log`] | L-Log | Leica |
//! | [`davinci_intermediate`] | DaVinci Intermediate | Blackmagic Resolve |
//! | [`log3g10`] | Log3G10 | RED |
//!
//! # Numeric domain
//!
//! The encode side of several curves is undefined for sufficiently negative
//! linear input (logarithm or odd root of a negative number) and returns NaN
//! there. That input shows up routinely when a gamut conversion pushes a
//! value out of range; callers sanitize the synthesized table afterwards
//! rather than suppressing the values here.
//!
//! # Usage
//!
//! ```rust
//! use lutforge_transfer::s_log3;
//!
//! let linear = s_log3::decode(0.41);
//! let back = s_log3::encode(linear);
//! assert!((back - 0.41).abs() < 1e-5);
//! ```
//!
//! # Used By
//!
//! - `lutforge-color` - the log format registry

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod canon_log;
pub mod davinci_intermediate;
pub mod f_log;
pub mod f_log2;
pub mod l_log;
pub mod log3g10;
pub mod log_c;
pub mod log_c4;
pub mod n_log;
pub mod s_log3;
pub mod v_log;

pub use canon_log::{clog2_decode, clog2_encode, clog3_decode, clog3_encode};
pub use davinci_intermediate::{decode as davinci_decode, encode as davinci_encode};
pub use f_log::{decode as f_log_decode, encode as f_log_encode};
pub use f_log2::{decode as f_log2_decode, encode as f_log2_encode};
pub use l_log::{decode as l_log_decode, encode as l_log_encode};
pub use log3g10::{decode as log3g10_decode, encode as log3g10_encode};
pub use log_c::{decode as log_c_decode, encode as log_c_encode};
pub use log_c4::{decode as log_c4_decode, encode as log_c4_encode};
pub use n_log::{decode as n_log_decode, encode as n_log_encode};
pub use s_log3::{decode as s_log3_decode, encode as s_log3_encode};
pub use v_log::{decode as v_log_decode, encode as v_log_encode};
