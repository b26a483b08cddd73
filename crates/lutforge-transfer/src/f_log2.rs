//! Fujifilm F-Log2 transfer function.
//!
//! F-Log2 extends F-Log's dynamic range (about 14 stops) and ships with
//! F-Gamut (Rec.2020) or the wider F-Gamut C primaries.
//!
//! # Reference
//!
//! Fujifilm F-Log2 Data Sheet Ver. 1.0

// F-Log2 constants from the data sheet
const A: f32 = 5.555556;
const B: f32 = 0.064829;
const C: f32 = 0.245281;
const D: f32 = 0.384316;
const E: f32 = 8.799461;
const F: f32 = 0.092864;
const CUT_LIN: f32 = 0.000889;
const CUT_LOG: f32 = 0.100_686_685;

/// F-Log2 encode: linear to F-Log2.
///
/// # Example
///
/// ```rust
/// use lutforge_transfer::f_log2::encode;
///
/// // 18% gray sits at approximately 0.391
/// let log = encode(0.18);
/// assert!((log - 0.391).abs() < 0.01);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    if linear >= CUT_LIN {
        C * (A * linear + B).log10() + D
    } else {
        E * linear + F
    }
}

/// F-Log2 decode: F-Log2 to linear.
///
/// # Example
///
/// ```rust
/// use lutforge_transfer::f_log2::decode;
///
/// let linear = decode(0.391);
/// assert!((linear - 0.18).abs() < 0.01);
/// ```
#[inline]
pub fn decode(log: f32) -> f32 {
    if log >= CUT_LOG {
        (10.0_f32.powf((log - D) / C)) / A - B / A
    } else {
        (log - F) / E
    }
}

/// Applies F-Log2 encoding to RGB.
#[inline]
pub fn encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Applies F-Log2 decoding to RGB.
#[inline]
pub fn decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}

/// Returns the F-Log2 value for 18% gray.
#[inline]
pub fn middle_gray() -> f32 {
    encode(0.18)
}
