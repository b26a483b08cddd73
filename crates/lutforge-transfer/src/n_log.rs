//! Nikon N-Log transfer function.
//!
//! N-Log is Nikon's log encoding for Z-series cameras, paired with N-Gamut
//! (Rec.2020 primaries). The toe is a cube-root segment rather than a
//! linear one.
//!
//! # Numeric domain
//!
//! `encode` takes the cube root of `linear + 0.0075`; for linear input
//! below -0.0075 the result is NaN. Out-of-gamut values produced by a
//! preceding gamut conversion can land there, which is why synthesized
//! tables are sanitized after encoding.
//!
//! # Reference
//!
//! Nikon N-Log Specification Ver. 1.0

// N-Log constants (10-bit code values over 1023)
const CUT_LIN: f32 = 0.328;
const CUT_LOG: f32 = 452.0 / 1023.0;

/// N-Log encode: linear to N-Log.
///
/// # Example
///
/// ```rust
/// use lutforge_transfer::n_log::encode;
///
/// // 18% gray sits at approximately 0.364
/// let log = encode(0.18);
/// assert!((log - 0.364).abs() < 0.01);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    if linear < CUT_LIN {
        650.0 * (linear + 0.0075).powf(1.0 / 3.0) / 1023.0
    } else {
        (150.0 * linear.ln() + 619.0) / 1023.0
    }
}

/// N-Log decode: N-Log to linear.
///
/// # Example
///
/// ```rust
/// use lutforge_transfer::n_log::decode;
///
/// let linear = decode(0.364);
/// assert!((linear - 0.18).abs() < 0.01);
/// ```
#[inline]
pub fn decode(log: f32) -> f32 {
    if log < CUT_LOG {
        let t = log * 1023.0 / 650.0;
        t * t * t - 0.0075
    } else {
        ((log * 1023.0 - 619.0) / 150.0).exp()
    }
}

/// Applies N-Log encoding to RGB.
#[inline]
pub fn encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Applies N-Log decoding to RGB.
#[inline]
pub fn decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}

/// Returns the N-Log value for 18% gray.
#[inline]
pub fn middle_gray() -> f32 {
    encode(0.18)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let test_values = [0.0, 0.01, 0.18, 0.3, 0.5, 1.0, 4.0];
        for &l in &test_values {
            let decoded = decode(encode(l));
            assert!(
                (l - decoded).abs() < l * 0.005 + 0.001,
                "l={}, decoded={}",
                l,
                decoded
            );
        }
    }

    #[test]
    fn test_middle_gray() {
        let log = encode(0.18);
        assert!((log - 0.364).abs() < 0.01, "log={}", log);
    }

    #[test]
    fn test_continuity_at_cut() {
        let below = encode(CUT_LIN - 1e-5);
        let above = encode(CUT_LIN + 1e-5);
        assert!((below - above).abs() < 1e-3);
    }

    #[test]
    fn test_encode_nan_below_domain() {
        // Documented hazard: cube root of a negative number.
        assert!(encode(-0.1).is_nan());
    }
}
