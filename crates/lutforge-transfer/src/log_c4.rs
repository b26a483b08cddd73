//! ARRI LogC4 transfer function.
//!
//! LogC4 is the log encoding introduced with the ALEXA 35, paired with
//! ARRI Wide Gamut 4. Unlike LogC3 it uses a base-2 logarithm, a single
//! curve for all Exposure Index settings, and an extended range: encoded
//! zero corresponds to a negative linear value.
//!
//! # Reference
//!
//! ARRI LogC4 Specification

// LogC4 constants
const BASE: f64 = 2.0;
const LIN_SIDE_SLOPE: f64 = 2231.82630906769;
const LIN_SIDE_OFFSET: f64 = 64.0;
const LOG_SIDE_SLOPE: f64 = 0.0647954196341293;
const LOG_SIDE_OFFSET: f64 = -0.295908392682586;
const LIN_SIDE_BREAK: f64 = -0.0180569961199113;

use std::sync::OnceLock;

/// Linear shadow segment parameters (slope, offset, encoded break point),
/// derived once so the segment stays C1-continuous with the log curve.
fn linear_params() -> (f64, f64, f64) {
    static PARAMS: OnceLock<(f64, f64, f64)> = OnceLock::new();
    *PARAMS.get_or_init(|| {
        let lin_at_break = LIN_SIDE_SLOPE * LIN_SIDE_BREAK + LIN_SIDE_OFFSET;
        let log_break = LOG_SIDE_SLOPE * lin_at_break.log2() + LOG_SIDE_OFFSET;
        let linear_slope = LOG_SIDE_SLOPE * LIN_SIDE_SLOPE / (lin_at_break * BASE.ln());
        let linear_offset = log_break - linear_slope * LIN_SIDE_BREAK;
        (linear_slope, linear_offset, log_break)
    })
}

/// LogC4 encode: linear to LogC4.
///
/// # Example
///
/// ```rust
/// use lutforge_transfer::log_c4;
///
/// // 18% gray sits at approximately 0.278
/// let log = log_c4::encode(0.18);
/// assert!((log - 0.278).abs() < 0.001);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    encode_f64(linear as f64) as f32
}

/// LogC4 encode with f64 precision.
#[inline]
pub fn encode_f64(linear: f64) -> f64 {
    let (linear_slope, linear_offset, _) = linear_params();

    if linear >= LIN_SIDE_BREAK {
        let x = LIN_SIDE_SLOPE * linear + LIN_SIDE_OFFSET;
        LOG_SIDE_SLOPE * x.log2() + LOG_SIDE_OFFSET
    } else {
        linear_slope * linear + linear_offset
    }
}

/// LogC4 decode: LogC4 to linear.
///
/// # Example
///
/// ```rust
/// use lutforge_transfer::log_c4;
///
/// let linear = log_c4::decode(0.278);
/// assert!((linear - 0.18).abs() < 0.001);
/// ```
#[inline]
pub fn decode(log: f32) -> f32 {
    decode_f64(log as f64) as f32
}

/// LogC4 decode with f64 precision.
#[inline]
pub fn decode_f64(log: f64) -> f64 {
    let (linear_slope, linear_offset, log_break) = linear_params();

    if log >= log_break {
        let exp = (log - LOG_SIDE_OFFSET) / LOG_SIDE_SLOPE;
        (2.0_f64.powf(exp) - LIN_SIDE_OFFSET) / LIN_SIDE_SLOPE
    } else {
        (log - linear_offset) / linear_slope
    }
}

/// Applies LogC4 encoding to RGB.
#[inline]
pub fn encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Applies LogC4 decoding to RGB.
#[inline]
pub fn decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}

/// Returns the LogC4 value for 18% gray.
#[inline]
pub fn middle_gray() -> f32 {
    encode(0.18)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        // 18% gray
        assert!((encode_f64(0.18) - 0.278).abs() < 0.001);
        // Scene black is lifted to ~0.092
        assert!((encode_f64(0.0) - 0.092).abs() < 0.002);
    }

    #[test]
    fn test_roundtrip() {
        let test_values = [
            -0.02, -0.01, 0.0, 0.001, 0.01, 0.05, 0.18, 0.38, 1.0, 2.0, 5.0, 10.0, 50.0, 100.0,
        ];
        for &linear in &test_values {
            let decoded = decode_f64(encode_f64(linear));
            let tolerance = f64::abs(linear) * 1e-12 + 1e-14;
            assert!(
                (linear - decoded).abs() < tolerance,
                "roundtrip failed: {} -> {}",
                linear,
                decoded
            );
        }
    }

    #[test]
    fn test_monotonic() {
        let mut prev = encode_f64(-0.05);
        for i in 1..1000 {
            let linear = -0.05 + i as f64 * 0.001;
            let encoded = encode_f64(linear);
            assert!(encoded > prev, "not monotonic at {}", linear);
            prev = encoded;
        }
    }

    #[test]
    fn test_continuity_at_break() {
        let eps = 1e-10;
        let below = encode_f64(LIN_SIDE_BREAK - eps);
        let at = encode_f64(LIN_SIDE_BREAK);
        let above = encode_f64(LIN_SIDE_BREAK + eps);

        assert!((at - below).abs() < 1e-8);
        assert!((above - at).abs() < 1e-8);
    }
}
