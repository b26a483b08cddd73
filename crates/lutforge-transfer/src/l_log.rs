//! Leica L-Log transfer function.
//!
//! L-Log is Leica's log encoding for SL-series cameras, paired with
//! Rec.2020 primaries.
//!
//! # Reference
//!
//! Leica L-Log Reference Manual

// L-Log constants
const A: f32 = 8.0;
const B: f32 = 0.09;
const C: f32 = 0.27;
const D: f32 = 1.3;
const E: f32 = 0.0115;
const F: f32 = 0.6;
const CUT_LIN: f32 = 0.006;
const CUT_LOG: f32 = 0.138;

/// L-Log encode: linear to L-Log.
///
/// # Example
///
/// ```rust
/// use lutforge_transfer::l_log::encode;
///
/// // 18% gray sits at approximately 0.435
/// let log = encode(0.18);
/// assert!((log - 0.435).abs() < 0.01);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    if linear < CUT_LIN {
        A * linear + B
    } else {
        C * (D * linear + E).log10() + F
    }
}

/// L-Log decode: L-Log to linear.
///
/// # Example
///
/// ```rust
/// use lutforge_transfer::l_log::decode;
///
/// let linear = decode(0.435);
/// assert!((linear - 0.18).abs() < 0.01);
/// ```
#[inline]
pub fn decode(log: f32) -> f32 {
    if log < CUT_LOG {
        (log - B) / A
    } else {
        (10.0_f32.powf((log - F) / C) - E) / D
    }
}

/// Applies L-Log encoding to RGB.
#[inline]
pub fn encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Applies L-Log decoding to RGB.
#[inline]
pub fn decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}

/// Returns the L-Log value for 18% gray.
#[inline]
pub fn middle_gray() -> f32 {
    encode(0.18)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let test_values = [0.001, 0.005, 0.18, 0.5, 1.0, 4.0];
        for &l in &test_values {
            let decoded = decode(encode(l));
            assert!(
                (l - decoded).abs() < l * 0.01 + 0.001,
                "l={}, decoded={}",
                l,
                decoded
            );
        }
    }

    #[test]
    fn test_middle_gray() {
        let log = encode(0.18);
        assert!((log - 0.435).abs() < 0.01, "log={}", log);
    }

    #[test]
    fn test_continuity_at_cut() {
        let below = encode(CUT_LIN - 1e-6);
        let above = encode(CUT_LIN + 1e-6);
        assert!((below - above).abs() < 1e-3);
    }
}
