//! Sony S-Log3 transfer function.
//!
//! S-Log3 is Sony's log encoding for their digital cinema cameras, paired
//! with S-Gamut3 or S-Gamut3.Cine primaries.
//!
//! # Reference
//!
//! Sony S-Log3 Technical Summary

// S-Log3 constants
const CUT: f32 = 0.01125;
const SIGNAL_BREAK: f32 = 171.2102946929;

/// S-Log3 encode: linear to S-Log3.
///
/// # Example
///
/// ```rust
/// use lutforge_transfer::s_log3::encode;
///
/// // 18% gray sits at approximately 0.41
/// let log = encode(0.18);
/// assert!((log - 0.41).abs() < 0.02);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    if linear >= CUT {
        // 18% gray maps to code value 420/1023
        (420.0 + 261.5 * ((linear + 0.01) / 0.19).log10()) / 1023.0
    } else {
        (linear * (SIGNAL_BREAK - 95.0) / 0.01125 + 95.0) / 1023.0
    }
}

/// S-Log3 decode: S-Log3 to linear.
///
/// # Example
///
/// ```rust
/// use lutforge_transfer::s_log3::decode;
///
/// let linear = decode(0.41);
/// assert!((linear - 0.18).abs() < 0.02);
/// ```
#[inline]
pub fn decode(log: f32) -> f32 {
    let x = log * 1023.0;
    if x >= SIGNAL_BREAK {
        10.0_f32.powf((x - 420.0) / 261.5) * 0.19 - 0.01
    } else {
        (x - 95.0) * 0.01125 / (SIGNAL_BREAK - 95.0)
    }
}

/// Applies S-Log3 encoding to RGB.
#[inline]
pub fn encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Applies S-Log3 decoding to RGB.
#[inline]
pub fn decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}

/// Returns the S-Log3 value for 18% gray.
#[inline]
pub fn middle_gray() -> f32 {
    encode(0.18)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let test_values = [0.001, 0.01, 0.18, 0.5, 1.0, 2.0];
        for &l in &test_values {
            let decoded = decode(encode(l));
            assert!(
                (l - decoded).abs() < l * 0.02 + 0.001,
                "l={}, decoded={}",
                l,
                decoded
            );
        }
    }

    #[test]
    fn test_middle_gray() {
        let log = encode(0.18);
        assert!((log - 0.41).abs() < 0.02, "log={}", log);
    }

    #[test]
    fn test_negative_linear_stays_finite() {
        // The toe is linear, so moderately negative input decodes/encodes
        // without producing NaN.
        assert!(encode(-0.01).is_finite());
    }
}
