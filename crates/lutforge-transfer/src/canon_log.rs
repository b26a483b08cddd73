//! Canon Log 2 and Canon Log 3 transfer functions.
//!
//! Both curves pair with Canon's Cinema Gamut primaries. Canon Log 2 is a
//! pure log curve mirrored around zero; Canon Log 3 adds a linear segment
//! near black.
//!
//! # Reference
//!
//! Canon Cinema EOS white papers; OCIO CanonCameras.cpp

/// Canon Log 2 constants
mod clog2 {
    pub const CUT: f64 = 0.092864125;
    pub const LOG_SLOPE: f64 = 0.24136077;
    pub const LIN_SCALE: f64 = 87.099375;
    /// IRE normalization factor
    pub const NORM: f64 = 0.9;
}

/// Canon Log 3 constants
mod clog3 {
    pub const CUT_LOW: f64 = 0.097465473;
    pub const CUT_HIGH: f64 = 0.15277891;

    pub const LOG_OFFSET_NEG: f64 = 0.12783901;
    pub const LOG_OFFSET_POS: f64 = 0.12240537;
    pub const LOG_SLOPE: f64 = 0.36726845;
    pub const LIN_SCALE: f64 = 14.98325;

    pub const LIN_SLOPE: f64 = 1.9754798;
    pub const LIN_OFFSET: f64 = 0.12512219;

    /// Linear-domain break points for the middle segment
    pub const LIN_BREAK: f64 = 0.014;

    /// IRE normalization factor
    pub const NORM: f64 = 0.9;
}

// ============================================================================
// Canon Log 2
// ============================================================================

/// Canon Log 2 encode: linear to Canon Log 2.
///
/// # Example
///
/// ```rust
/// use lutforge_transfer::canon_log::clog2_encode;
///
/// // 18% gray sits at approximately 0.398
/// let log = clog2_encode(0.18);
/// assert!((log - 0.398).abs() < 0.005);
/// ```
#[inline]
pub fn clog2_encode(linear: f32) -> f32 {
    use clog2::*;

    let x = linear as f64 / NORM;
    let out = if x < 0.0 {
        CUT - LOG_SLOPE * (-x * LIN_SCALE + 1.0).log10()
    } else {
        CUT + LOG_SLOPE * (x * LIN_SCALE + 1.0).log10()
    };
    out as f32
}

/// Canon Log 2 decode: Canon Log 2 to linear.
#[inline]
pub fn clog2_decode(log: f32) -> f32 {
    use clog2::*;

    let y = log as f64;
    let out = if y < CUT {
        -(10.0_f64.powf((CUT - y) / LOG_SLOPE) - 1.0) / LIN_SCALE
    } else {
        (10.0_f64.powf((y - CUT) / LOG_SLOPE) - 1.0) / LIN_SCALE
    };
    (out * NORM) as f32
}

/// Applies Canon Log 2 encoding to RGB.
#[inline]
pub fn clog2_encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [clog2_encode(rgb[0]), clog2_encode(rgb[1]), clog2_encode(rgb[2])]
}

/// Applies Canon Log 2 decoding to RGB.
#[inline]
pub fn clog2_decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [clog2_decode(rgb[0]), clog2_decode(rgb[1]), clog2_decode(rgb[2])]
}

// ============================================================================
// Canon Log 3
// ============================================================================

/// Canon Log 3 encode: linear to Canon Log 3.
///
/// Three segments: mirrored log below the linear region, linear through
/// black, log above.
///
/// # Example
///
/// ```rust
/// use lutforge_transfer::canon_log::clog3_encode;
///
/// // 18% gray sits at approximately 0.343
/// let log = clog3_encode(0.18);
/// assert!((log - 0.343).abs() < 0.005);
/// ```
#[inline]
pub fn clog3_encode(linear: f32) -> f32 {
    use clog3::*;

    let x = linear as f64 / NORM;
    let out = if x < -LIN_BREAK {
        LOG_OFFSET_NEG - LOG_SLOPE * (-x * LIN_SCALE + 1.0).log10()
    } else if x <= LIN_BREAK {
        x * LIN_SLOPE + LIN_OFFSET
    } else {
        LOG_OFFSET_POS + LOG_SLOPE * (x * LIN_SCALE + 1.0).log10()
    };
    out as f32
}

/// Canon Log 3 decode: Canon Log 3 to linear.
#[inline]
pub fn clog3_decode(log: f32) -> f32 {
    use clog3::*;

    let y = log as f64;
    let out = if y < CUT_LOW {
        -(10.0_f64.powf((LOG_OFFSET_NEG - y) / LOG_SLOPE) - 1.0) / LIN_SCALE
    } else if y <= CUT_HIGH {
        (y - LIN_OFFSET) / LIN_SLOPE
    } else {
        (10.0_f64.powf((y - LOG_OFFSET_POS) / LOG_SLOPE) - 1.0) / LIN_SCALE
    };
    (out * NORM) as f32
}

/// Applies Canon Log 3 encoding to RGB.
#[inline]
pub fn clog3_encode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [clog3_encode(rgb[0]), clog3_encode(rgb[1]), clog3_encode(rgb[2])]
}

/// Applies Canon Log 3 decoding to RGB.
#[inline]
pub fn clog3_decode_rgb(rgb: [f32; 3]) -> [f32; 3] {
    [clog3_decode(rgb[0]), clog3_decode(rgb[1]), clog3_decode(rgb[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clog2_roundtrip() {
        let test_values = [-0.05, 0.0, 0.01, 0.18, 0.5, 1.0, 4.0];
        for &l in &test_values {
            let decoded = clog2_decode(clog2_encode(l));
            assert!(
                (l - decoded).abs() < l.abs() * 0.001 + 1e-4,
                "l={}, decoded={}",
                l,
                decoded
            );
        }
    }

    #[test]
    fn test_clog3_roundtrip() {
        let test_values = [-0.05, -0.01, 0.0, 0.01, 0.18, 0.5, 1.0, 4.0];
        for &l in &test_values {
            let decoded = clog3_decode(clog3_encode(l));
            assert!(
                (l - decoded).abs() < l.abs() * 0.001 + 1e-4,
                "l={}, decoded={}",
                l,
                decoded
            );
        }
    }

    #[test]
    fn test_clog2_middle_gray() {
        let log = clog2_encode(0.18);
        assert!((log - 0.398).abs() < 0.005, "log={}", log);
    }

    #[test]
    fn test_clog3_middle_gray() {
        let log = clog3_encode(0.18);
        assert!((log - 0.343).abs() < 0.005, "log={}", log);
    }

    #[test]
    fn test_clog3_continuity() {
        use super::clog3::{LIN_BREAK, NORM};
        let break_lin = (LIN_BREAK * NORM) as f32;
        for b in [-break_lin, break_lin] {
            let below = clog3_encode(b - 1e-5);
            let above = clog3_encode(b + 1e-5);
            assert!((below - above).abs() < 1e-3, "jump at {}", b);
        }
    }
}
