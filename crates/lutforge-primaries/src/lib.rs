//! # lutforge-primaries
//!
//! Camera gamut primaries, white points, and RGB-XYZ matrix generation.
//!
//! Every camera log curve ships with a native wide-gamut color space. This
//! crate defines those spaces by their CIE xy chromaticities and derives the
//! 3x3 matrices that move linear RGB between them (through XYZ).
//!
//! # Included Gamuts
//!
//! | Gamut | Camera system |
//! |-------|---------------|
//! | [`S_GAMUT3`], [`S_GAMUT3_CINE`] | Sony |
//! | [`F_GAMUT`], [`F_GAMUT_C`] | Fujifilm |
//! | [`CINEMA_GAMUT`] | Canon |
//! | [`ARRI_WIDE_GAMUT_3`], [`ARRI_WIDE_GAMUT_4`] | ARRI |
//! | [`V_GAMUT`] | Panasonic |
//! | [`N_GAMUT`] | Nikon |
//! | [`REC2020`] | Broadcast / Leica L-Log |
//! | [`DAVINCI_WIDE_GAMUT`] | Blackmagic Resolve |
//! | [`RED_WIDE_GAMUT`] | RED |
//!
//! # Usage
//!
//! ```rust
//! use lutforge_primaries::{rgb_to_rgb_matrix, S_GAMUT3, ARRI_WIDE_GAMUT_3};
//! use lutforge_math::Vec3;
//!
//! let m = rgb_to_rgb_matrix(&S_GAMUT3, &ARRI_WIDE_GAMUT_3);
//! let converted = m * Vec3::new(0.18, 0.18, 0.18);
//! ```
//!
//! # Dependencies
//!
//! - [`lutforge-math`] - matrix operations
//!
//! # Used By
//!
//! - `lutforge-color` - gamut conversion for LUT synthesis

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use lutforge_math::{Mat3, Vec3};

/// RGB color space primaries definition.
///
/// Defines a color space by its red, green, and blue primaries and its
/// white point, all as CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f32, f32),
    /// Green primary (x, y) chromaticity
    pub g: (f32, f32),
    /// Blue primary (x, y) chromaticity
    pub b: (f32, f32),
    /// White point (x, y) chromaticity
    pub w: (f32, f32),
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y = 1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }
}

// ============================================================================
// Standard White Points
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
///
/// The reference white of every camera gamut in this crate.
pub const D65_XY: (f32, f32) = (0.31270, 0.32900);

/// D60 white point chromaticity (~6000K, ACES).
pub const D60_XY: (f32, f32) = (0.32168, 0.33767);

// ============================================================================
// Camera Gamut Primaries
// ============================================================================

/// Rec.2020 primaries (D65 white point).
///
/// UHD broadcast gamut; also the container gamut Fujifilm, Nikon, and Leica
/// reuse for their log curves.
pub const REC2020: Primaries = Primaries {
    r: (0.7080, 0.2920),
    g: (0.1700, 0.7970),
    b: (0.1310, 0.0460),
    w: D65_XY,
    name: "Rec.2020",
};

/// Sony S-Gamut3 primaries.
pub const S_GAMUT3: Primaries = Primaries {
    r: (0.7300, 0.2800),
    g: (0.1400, 0.8550),
    b: (0.1000, -0.0500),
    w: D65_XY,
    name: "S-Gamut3",
};

/// Sony S-Gamut3.Cine primaries.
///
/// A slightly smaller, grading-friendly variant of S-Gamut3.
pub const S_GAMUT3_CINE: Primaries = Primaries {
    r: (0.7660, 0.2750),
    g: (0.2250, 0.8000),
    b: (0.0890, -0.0870),
    w: D65_XY,
    name: "S-Gamut3.Cine",
};

/// Fujifilm F-Gamut (identical primaries to Rec.2020).
pub const F_GAMUT: Primaries = Primaries {
    r: REC2020.r,
    g: REC2020.g,
    b: REC2020.b,
    w: D65_XY,
    name: "F-Gamut",
};

/// Fujifilm F-Gamut C primaries.
///
/// The wider gamut introduced alongside F-Log2 C.
pub const F_GAMUT_C: Primaries = Primaries {
    r: (0.7347, 0.2653),
    g: (0.0263, 0.9737),
    b: (0.1173, -0.0224),
    w: D65_XY,
    name: "F-Gamut C",
};

/// Canon Cinema Gamut primaries.
pub const CINEMA_GAMUT: Primaries = Primaries {
    r: (0.7400, 0.2700),
    g: (0.1700, 1.1400),
    b: (0.0800, -0.1000),
    w: D65_XY,
    name: "Cinema Gamut",
};

/// ARRI Wide Gamut 3 primaries (ALEXA / LogC3).
pub const ARRI_WIDE_GAMUT_3: Primaries = Primaries {
    r: (0.6840, 0.3130),
    g: (0.2210, 0.8480),
    b: (0.0861, -0.1020),
    w: D65_XY,
    name: "ARRI Wide Gamut 3",
};

/// ARRI Wide Gamut 4 primaries (ALEXA 35 / LogC4).
pub const ARRI_WIDE_GAMUT_4: Primaries = Primaries {
    r: (0.7347, 0.2653),
    g: (0.1424, 0.8576),
    b: (0.0991, -0.0308),
    w: D65_XY,
    name: "ARRI Wide Gamut 4",
};

/// Panasonic V-Gamut primaries.
pub const V_GAMUT: Primaries = Primaries {
    r: (0.7300, 0.2800),
    g: (0.1650, 0.8400),
    b: (0.1000, -0.0300),
    w: D65_XY,
    name: "V-Gamut",
};

/// Nikon N-Gamut (identical primaries to Rec.2020).
pub const N_GAMUT: Primaries = Primaries {
    r: REC2020.r,
    g: REC2020.g,
    b: REC2020.b,
    w: D65_XY,
    name: "N-Gamut",
};

/// Blackmagic DaVinci Wide Gamut primaries.
pub const DAVINCI_WIDE_GAMUT: Primaries = Primaries {
    r: (0.8000, 0.3130),
    g: (0.1682, 0.9877),
    b: (0.0790, -0.1155),
    w: D65_XY,
    name: "DaVinci Wide Gamut",
};

/// RED Wide Gamut RGB primaries.
pub const RED_WIDE_GAMUT: Primaries = Primaries {
    r: (0.780308, 0.304253),
    g: (0.121595, 1.493994),
    b: (0.095612, -0.084589),
    w: D65_XY,
    name: "RED Wide Gamut RGB",
};

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts xy chromaticity to XYZ (with Y = 1).
fn xy_to_xyz(x: f32, y: f32) -> Vec3 {
    if y.abs() < 1e-10 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// Standard derivation: primaries as XYZ columns, scaled so that RGB
/// (1, 1, 1) lands on the white point.
///
/// # Example
///
/// ```rust
/// use lutforge_primaries::{S_GAMUT3, rgb_to_xyz_matrix};
/// use lutforge_math::Vec3;
///
/// let m = rgb_to_xyz_matrix(&S_GAMUT3);
/// let white = m * Vec3::ONE;
/// assert!((white.y - 1.0).abs() < 0.001);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = xy_to_xyz(primaries.w.0, primaries.w.1);

    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);

    // Solve M * s = W for the per-primary scale factors
    let m_inv = m.inverse().unwrap_or(Mat3::IDENTITY);
    let s = m_inv * w_xyz;

    Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z)
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// Inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries)
        .inverse()
        .unwrap_or(Mat3::IDENTITY)
}

/// Computes the matrix converting one RGB space to another, through XYZ.
///
/// Does not include chromatic adaptation; when the white points differ,
/// insert `lutforge_math::adapt_matrix` between the two halves.
pub fn rgb_to_rgb_matrix(src: &Primaries, dst: &Primaries) -> Mat3 {
    xyz_to_rgb_matrix(dst) * rgb_to_xyz_matrix(src)
}
