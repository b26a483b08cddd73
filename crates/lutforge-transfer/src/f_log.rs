//! Fujifilm F-Log transfer function.
//!
//! F-Log is Fujifilm's log encoding for X and GFX series cameras, paired
//! with F-Gamut (Rec.2020 primaries).
//!
//! # Reference
//!
//! Fujifilm F-Log Data Sheet Ver. 1.0

// F-Log constants from the data sheet
const A: f32 = 0.555556;
const B: f32 = 0.009468;
const C: f32 = 0.344676;
const D: f32 = 0.790453;
const E: f32 = 8.735631;
const F: f32 = 0.092864;
const CUT_LIN: f32 = 0.00089;
const CUT_LOG: f32 = 0.100_537_775;

/// F-Log encode: linear to F-Log.
///
/// # Example
///
/// ```rust
/// use lutforge_transfer::f_log::encode;
///
/// // 18% gray sits at approximately 0.459
/// let log = encode(0.18);
/// assert!((log - 0.459).abs() < 0.01);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    if linear >= CUT_LIN {
        C * (A * linear + B).log10() + D
    } else {
        E * linear + F
    }
}

/// F-Log decode: F-Log to linear.
///
/// # Example
///
/// ```rust
/// use lutforge_transfer::f_log::decode;
///
/// let linear = decode(0.459);
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

/// Applies F-Log encoding to RGB.
#[inline]
pub fn encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Applies F-Log decoding to RGB.
#[inline]
pub fn decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}

/// Returns the F-Log value for 18% gray.
#[inline]
pub fn middle_gray() -> f32 {
    encode(0.18)
}
