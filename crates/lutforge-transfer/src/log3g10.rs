//! RED Log3G10 transfer function.
//!
//! Log3G10 is RED's log encoding, paired with RED Wide Gamut RGB. 18% gray
//! encodes to exactly 1/3 and ten stops above gray reaches 1.0. Negative
//! linear input is handled by a linear extension below the break point.
//!
//! # Reference
//!
//! RED Digital Cinema white papers; OCIO RedCameras.cpp

// Log3G10 constants
const LIN_SIDE_SLOPE: f64 = 155.975327;
const LIN_SIDE_OFFSET: f64 = 0.01 * LIN_SIDE_SLOPE + 1.0;
const LOG_SIDE_SLOPE: f64 = 0.224282;
const LIN_SIDE_BREAK: f64 = -0.01;

/// Mirror slope for input below the break point.
fn mirror_slope() -> f64 {
    // Derivative of the log segment at the break point
    LOG_SIDE_SLOPE * LIN_SIDE_SLOPE / (10.0_f64.ln() * (LIN_SIDE_SLOPE * LIN_SIDE_BREAK + LIN_SIDE_OFFSET))
}

/// Log3G10 encode: linear to Log3G10.
///
/// # Example
///
/// ```rust
/// use lutforge_transfer::log3g10::encode;
///
/// // 18% gray encodes to 1/3
/// let log = encode(0.18);
/// assert!((log - 1.0 / 3.0).abs() < 0.001);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    let x = linear as f64;

    let out = if x >= LIN_SIDE_BREAK {
        LOG_SIDE_SLOPE * (LIN_SIDE_SLOPE * x + LIN_SIDE_OFFSET).log10()
    } else {
        // Linear extension below the break
        mirror_slope() * (x - LIN_SIDE_BREAK)
    };
    out as f32
}

/// Log3G10 decode: Log3G10 to linear.
///
/// # Example
///
/// ```rust
/// use lutforge_transfer::log3g10::decode;
///
/// let linear = decode(1.0 / 3.0);
/// assert!((linear - 0.18).abs() < 0.001);
/// ```
#[inline]
pub fn decode(log: f32) -> f32 {
    let y = log as f64;

    let out = if y >= 0.0 {
        (10.0_f64.powf(y / LOG_SIDE_SLOPE) - LIN_SIDE_OFFSET) / LIN_SIDE_SLOPE
    } else {
        y / mirror_slope() + LIN_SIDE_BREAK
    };
    out as f32
}

/// Applies Log3G10 encoding to RGB.
#[inline]
pub fn encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Applies Log3G10 decoding to RGB.
#[inline]
pub fn decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}

/// Returns the Log3G10 value for 18% gray.
#[inline]
pub fn middle_gray() -> f32 {
    encode(0.18)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let test_values = [-0.02, -0.01, 0.0, 0.01, 0.18, 0.5, 1.0, 10.0];
        for &l in &test_values {
            let decoded = decode(encode(l));
            assert!(
                (l - decoded).abs() < l.abs() * 0.001 + 1e-5,
                "l={}, decoded={}",
                l,
                decoded
            );
        }
    }

    #[test]
    fn test_middle_gray_is_one_third() {
        let log = encode(0.18);
        assert!((log - 1.0 / 3.0).abs() < 0.001, "log={}", log);
    }

    #[test]
    fn test_break_encodes_to_zero() {
        assert!(encode(LIN_SIDE_BREAK as f32).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic_through_break() {
        let mut prev = encode(-0.05);
        for i in 1..200 {
            let l = -0.05 + i as f32 * 0.001;
            let e = encode(l);
            assert!(e > prev, "not monotonic at {}", l);
            prev = e;
        }
    }
}
