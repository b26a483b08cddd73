//! LUT synthesis: decode -> gamut matrix -> encode over a full grid.

use crate::{AdaptationMethod, ColorResult, LogFormat};
use lutforge_lut::{Lut3D, LutError, RangeStats};
use lutforge_math::{Mat3, adapt_matrix};
use lutforge_primaries::{Primaries, rgb_to_xyz_matrix, xyz_to_rgb_matrix};
use rayon::prelude::*;
use tracing::debug;

/// Builds the linear-light matrix converting `src` RGB to `dst` RGB.
///
/// The conversion goes through XYZ. When the white points differ, the
/// chosen chromatic adaptation is inserted between the two halves; when
/// they match (the common case for camera gamuts, which are all D65) the
/// adaptation step drops out entirely.
pub fn gamut_matrix(src: &Primaries, dst: &Primaries, adaptation: AdaptationMethod) -> Mat3 {
    if src == dst {
        return Mat3::IDENTITY;
    }

    let to_xyz = rgb_to_xyz_matrix(src);
    let from_xyz = xyz_to_rgb_matrix(dst);

    if src.w != dst.w {
        let cat = adapt_matrix(adaptation.matrix(), src.white_xyz(), dst.white_xyz());
        from_xyz * cat * to_xyz
    } else {
        from_xyz * to_xyz
    }
}

/// Synthesizes a log-to-log conversion LUT.
///
/// Allocates an identity grid of `size` points per axis, then pushes every
/// lattice point through the three-stage pipeline in parallel:
///
/// 1. decode the source log curve to scene-linear,
/// 2. convert gamuts with a single 3x3 matrix (built once, including the
///    chromatic adaptation when white points differ),
/// 3. encode to the target log curve.
///
/// Decoding or encoding outside a curve's valid domain (negative linear
/// light from the matrix, for instance) can produce NaN or infinities;
/// those appear in the returned [`RangeStats`] as clipped components and
/// are then removed by the mandatory sanitize pass (NaN -> 0, +Inf -> 1,
/// -Inf -> 0, clamp to [0, 1]). The stats are taken **before** the clamp
/// so callers can see how destructive it was.
///
/// `source == target` is allowed and yields an approximate identity.
///
/// # Errors
///
/// Fails with [`LutError::InvalidSize`] for `size < 2` before any
/// allocation.
///
/// # Example
///
/// ```rust
/// use lutforge_color::{synthesize, AdaptationMethod, LogFormat};
///
/// let (lut, stats) = synthesize(
///     LogFormat::LogC4,
///     LogFormat::SLog3,
///     33,
///     AdaptationMethod::Cat02,
/// ).unwrap();
/// assert_eq!(lut.size, 33);
/// assert_eq!(lut.name, "LogC4_to_S-Log3");
/// // Sanitized output is always unit-range.
/// assert!(lut.data.iter().flatten().all(|v| (0.0..=1.0).contains(v)));
/// let _ = stats.clipped_ratio;
/// ```
pub fn synthesize(
    source: LogFormat,
    target: LogFormat,
    size: usize,
    adaptation: AdaptationMethod,
) -> ColorResult<(Lut3D, RangeStats)> {
    if size < 2 {
        return Err(LutError::InvalidSize(format!(
            "LUT size must be at least 2, got {}",
            size
        ))
        .into());
    }

    let decode = source.decode_fn();
    let encode = target.encode_fn();
    let matrix = gamut_matrix(source.primaries(), target.primaries(), adaptation);

    debug!(
        source = %source,
        target = %target,
        size,
        adaptation = %adaptation,
        "synthesizing LUT"
    );

    let mut lut =
        Lut3D::identity(size).with_name(format!("{}_to_{}", source.name(), target.name()));

    lut.data.par_iter_mut().for_each(|rgb| {
        let linear = [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])];
        let converted = matrix.transform_rgb(linear);
        *rgb = [
            encode(converted[0]),
            encode(converted[1]),
            encode(converted[2]),
        ];
    });

    let stats = lut.analyze();
    lut.sanitize();

    if stats.is_clipped() {
        debug!(
            clipped_ratio = stats.clipped_ratio,
            min = stats.min,
            max = stats.max,
            "sanitize clamped out-of-range samples"
        );
    }

    Ok((lut, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lutforge_math::Vec3;

    #[test]
    fn test_same_format_is_identity_matrix() {
        let m = gamut_matrix(
            LogFormat::LogC4.primaries(),
            LogFormat::LogC4.primaries(),
            AdaptationMethod::Cat02,
        );
        assert_eq!(m, Mat3::IDENTITY);
    }

    #[test]
    fn test_gamut_matrix_maps_white_to_white() {
        // Same white point on both sides: (1,1,1) must survive unchanged.
        let m = gamut_matrix(
            LogFormat::SLog3.primaries(),
            LogFormat::VLog.primaries(),
            AdaptationMethod::Bradford,
        );
        let white = m * Vec3::ONE;
        assert_abs_diff_eq!(white.x, 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(white.y, 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(white.z, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_synthesize_rejects_degenerate_size() {
        assert!(synthesize(
            LogFormat::SLog3,
            LogFormat::VLog,
            1,
            AdaptationMethod::Cat02
        )
        .is_err());
    }

    #[test]
    fn test_same_source_and_target_is_near_identity() {
        let (lut, _) = synthesize(
            LogFormat::SLog3,
            LogFormat::SLog3,
            17,
            AdaptationMethod::Cat02,
        )
        .unwrap();

        let n = (lut.size - 1) as f32;
        for b in 0..lut.size {
            for g in 0..lut.size {
                for r in 0..lut.size {
                    let coord = [r as f32 / n, g as f32 / n, b as f32 / n];
                    let out = lut.apply(coord);
                    for i in 0..3 {
                        assert!(
                            (out[i] - coord[i]).abs() < 2e-3,
                            "({},{},{}) ch{}: {} vs {}",
                            r, g, b, i, out[i], coord[i]
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_synthesized_output_is_sanitized() {
        // LogC4 zero decodes below N-Log's encode domain, so the raw table
        // contains NaN; none of it may survive.
        let (lut, stats) = synthesize(
            LogFormat::LogC4,
            LogFormat::NLog,
            9,
            AdaptationMethod::Cat02,
        )
        .unwrap();

        assert!(stats.clipped_ratio > 0.0);
        for rgb in &lut.data {
            for &v in rgb {
                assert!(v.is_finite());
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_stats_measure_pre_sanitize_range() {
        // S-Log3 white decodes to ~38x scene white, past the top of
        // F-Log's encodable range, so the raw table exceeds 1.0.
        let (_, stats) = synthesize(
            LogFormat::SLog3,
            LogFormat::FLog,
            9,
            AdaptationMethod::Cat02,
        )
        .unwrap();
        assert!(stats.max > 1.0);
    }

    #[test]
    fn test_name_records_conversion() {
        let (lut, _) = synthesize(
            LogFormat::VLog,
            LogFormat::FLog2,
            5,
            AdaptationMethod::Cat02,
        )
        .unwrap();
        assert_eq!(lut.name, "V-Log_to_F-Log2");
    }
}
