//! Chromatic Adaptation Transforms (CAT).
//!
//! When two color spaces reference different white points, converting between
//! them needs a white point adaptation in XYZ. The transform maps XYZ to a
//! cone-response space, scales by the white point ratio, and maps back.
//!
//! # Supported Methods
//!
//! - [`BRADFORD`] - the usual default for gamut conversion
//! - [`CAT02`] - from the CIECAM02 appearance model
//! - [`VON_KRIES`] - classic Hunt-Pointer-Estevez cone response
//! - [`XYZ_SCALING`] - plain diagonal scaling in XYZ
//!
//! # Usage
//!
//! ```rust
//! use lutforge_math::{adapt_matrix, BRADFORD, D65, D60};
//!
//! let d65_to_d60 = adapt_matrix(BRADFORD, D65, D60);
//! let adapted = d65_to_d60 * D65;
//! assert!((adapted.x - D60.x).abs() < 0.001);
//! ```

use crate::{Mat3, Vec3};

// ============================================================================
// Standard Illuminants (XYZ white points, Y = 1)
// ============================================================================

/// CIE Standard Illuminant D65 (daylight, ~6500K).
///
/// Reference white for Rec.709/Rec.2020 and most camera wide gamuts.
pub const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// CIE Standard Illuminant D50 (horizon light, ~5000K).
pub const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

/// CIE Standard Illuminant D60 (~6000K).
pub const D60: Vec3 = Vec3::new(0.95265, 1.0, 1.00883);

/// DCI theatrical projection white point.
pub const DCI_WHITE: Vec3 = Vec3::new(0.89459, 1.0, 0.95441);

// ============================================================================
// Chromatic Adaptation Matrices
// ============================================================================

/// Bradford chromatic adaptation matrix.
///
/// Transforms XYZ to a sharpened cone response space.
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Von Kries chromatic adaptation matrix (Hunt-Pointer-Estevez).
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// CAT02 chromatic adaptation matrix, from CIECAM02.
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// XYZ scaling: the cone space is XYZ itself, so [`adapt_matrix`]
/// degenerates to a diagonal white point ratio.
pub const XYZ_SCALING: Mat3 = Mat3::IDENTITY;

// ============================================================================
// Adaptation Functions
// ============================================================================

/// Computes a chromatic adaptation matrix between two white points.
///
/// The result transforms XYZ values under the source illuminant to XYZ
/// values under the destination illuminant: `M^-1 * diag(dst/src) * M`
/// with the white points expressed in the method's cone space.
///
/// # Arguments
///
/// * `method` - The CAT matrix ([`BRADFORD`], [`CAT02`], ...)
/// * `src_white` - Source white point in XYZ
/// * `dst_white` - Destination white point in XYZ
///
/// # Example
///
/// ```rust
/// use lutforge_math::{adapt_matrix, CAT02, D65, D50};
///
/// let d65_to_d50 = adapt_matrix(CAT02, D65, D50);
/// let result = d65_to_d50 * D65;
/// assert!((result.x - D50.x).abs() < 0.001);
/// assert!((result.z - D50.z).abs() < 0.001);
/// ```
pub fn adapt_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    let method_inv = method.inverse().unwrap_or(Mat3::IDENTITY);

    let src_cone = method * src_white;
    let dst_cone = method * dst_white;

    let scale = Mat3::diagonal(
        dst_cone.x / src_cone.x,
        dst_cone.y / src_cone.y,
        dst_cone.z / src_cone.z,
    );

    method_inv * scale * method
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_maps_to_white() {
        for method in [BRADFORD, VON_KRIES, CAT02, XYZ_SCALING] {
            let m = adapt_matrix(method, D65, D60);
            let result = m * D65;
            assert!((result.x - D60.x).abs() < 1e-4);
            assert!((result.y - D60.y).abs() < 1e-4);
            assert!((result.z - D60.z).abs() < 1e-4);
        }
    }

    #[test]
    fn test_same_white_is_identity() {
        let same = adapt_matrix(BRADFORD, D65, D65);

        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((same.m[i][j] - expected).abs() < 0.001);
            }
        }
    }

    #[test]
    fn test_roundtrip() {
        let fwd = adapt_matrix(CAT02, D65, D50);
        let back = adapt_matrix(CAT02, D50, D65);
        let roundtrip = back * fwd;

        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (roundtrip.m[i][j] - expected).abs() < 0.001,
                    "roundtrip[{}][{}] = {}",
                    i,
                    j,
                    roundtrip.m[i][j]
                );
            }
        }
    }

    #[test]
    fn test_xyz_scaling_is_diagonal() {
        let m = adapt_matrix(XYZ_SCALING, D65, D50);
        assert!((m.m[0][1]).abs() < 1e-6);
        assert!((m.m[1][2]).abs() < 1e-6);
        assert!((m.m[0][0] - D50.x / D65.x).abs() < 1e-6);
    }

    #[test]
    fn test_illuminants_normalized() {
        assert_eq!(D65.y, 1.0);
        assert_eq!(D50.y, 1.0);
        assert_eq!(D60.y, 1.0);
    }
}
