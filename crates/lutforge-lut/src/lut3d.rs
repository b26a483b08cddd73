//! 3-dimensional lookup table.
//!
//! A 3D LUT maps input RGB to output RGB through a dense cube of samples.
//! This is the unit every pipeline stage here produces or consumes: camera
//! log conversions, creative grades, concatenated looks.

use crate::{LutError, LutResult, RangeStats};
use rayon::prelude::*;

/// Default grid resolution used when a 1D curve is promoted to a cube.
pub const DEFAULT_GRID_SIZE: usize = 33;

/// A 3-dimensional lookup table.
///
/// Stores `size^3` RGB samples over the unit cube. Lattice point `(r, g, b)`
/// represents the input `(r, g, b) / (size - 1)`; values are stored
/// red-fastest (`index = r + g*size + b*size^2`), matching `.cube` line
/// order. Sample values may lie outside [0, 1] (out-of-gamut, super-white)
/// until [`Lut3D::sanitize`] is applied.
///
/// # Example
///
/// ```rust
/// use lutforge_lut::Lut3D;
///
/// let lut = Lut3D::identity(33);
/// let out = lut.apply([0.5, 0.3, 0.2]);
/// assert!((out[0] - 0.5).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct Lut3D {
    /// LUT samples, red index varying fastest.
    pub data: Vec<[f32; 3]>,
    /// Lattice points per axis (at least 2).
    pub size: usize,
    /// Provenance label, round-tripped through the `.cube` TITLE line.
    /// Not semantically load-bearing.
    pub name: String,
    /// Input domain minimum (per channel).
    pub domain_min: [f32; 3],
    /// Input domain maximum (per channel).
    pub domain_max: [f32; 3],
}

impl Lut3D {
    /// Creates an identity (pass-through) LUT.
    ///
    /// `table[r, g, b] = (r, g, b) / (size - 1)`
    ///
    /// # Panics
    ///
    /// Panics if `size < 2`; use [`Lut3D::from_data`] for fallible
    /// construction.
    pub fn identity(size: usize) -> Self {
        assert!(size >= 2, "identity LUT needs at least 2 points per axis");
        let n = (size - 1) as f32;
        let mut data = Vec::with_capacity(size * size * size);

        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    data.push([r as f32 / n, g as f32 / n, b as f32 / n]);
                }
            }
        }

        Self {
            data,
            size,
            name: String::new(),
            domain_min: [0.0; 3],
            domain_max: [1.0; 3],
        }
    }

    /// Creates a 3D LUT from raw data in red-fastest order.
    ///
    /// Fails unless `data.len() == size^3` and `size >= 2`.
    pub fn from_data(data: Vec<[f32; 3]>, size: usize) -> LutResult<Self> {
        if size < 2 {
            return Err(LutError::InvalidSize(format!(
                "3D LUT needs at least 2 points per axis, got {}",
                size
            )));
        }
        let expected = size * size * size;
        if data.len() != expected {
            return Err(LutError::InvalidSize(format!(
                "expected {} entries for size {}, got {}",
                expected,
                size,
                data.len()
            )));
        }
        Ok(Self {
            data,
            size,
            name: String::new(),
            domain_min: [0.0; 3],
            domain_max: [1.0; 3],
        })
    }

    /// Sets the provenance name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the input domain.
    pub fn with_domain(mut self, min: [f32; 3], max: [f32; 3]) -> Self {
        self.domain_min = min;
        self.domain_max = max;
        self
    }

    /// Returns the total number of entries in the LUT.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.size * self.size * self.size
    }

    /// Returns the index for a given (r, g, b) grid position.
    #[inline]
    fn index(&self, r: usize, g: usize, b: usize) -> usize {
        r + self.size * (g + self.size * b)
    }

    /// Gets the value at grid position (r, g, b).
    #[inline]
    fn get(&self, r: usize, g: usize, b: usize) -> [f32; 3] {
        self.data[self.index(r, g, b)]
    }

    /// Normalizes input RGB to [0, 1] based on the domain.
    ///
    /// Out-of-range inputs are clamped, never rejected.
    #[inline]
    fn normalize(&self, rgb: [f32; 3]) -> (f32, f32, f32) {
        let r = (rgb[0] - self.domain_min[0]) / (self.domain_max[0] - self.domain_min[0]);
        let g = (rgb[1] - self.domain_min[1]) / (self.domain_max[1] - self.domain_min[1]);
        let b = (rgb[2] - self.domain_min[2]) / (self.domain_max[2] - self.domain_min[2]);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Applies the LUT to an RGB value via trilinear interpolation.
    ///
    /// Exact at lattice points, C0-continuous between them: the standard
    /// `.cube` interchange semantics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lutforge_lut::Lut3D;
    ///
    /// let lut = Lut3D::identity(17);
    /// let out = lut.apply([0.25, 0.5, 0.75]);
    /// assert!((out[1] - 0.5).abs() < 1e-5);
    /// ```
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let (r, g, b) = self.normalize(rgb);
        let n = (self.size - 1) as f32;

        // Lower corner, clamped so the upper corner stays in bounds
        let ri = ((r * n).floor() as usize).min(self.size - 2);
        let gi = ((g * n).floor() as usize).min(self.size - 2);
        let bi = ((b * n).floor() as usize).min(self.size - 2);

        // Fractional parts
        let rf = r * n - ri as f32;
        let gf = g * n - gi as f32;
        let bf = b * n - bi as f32;

        // The 8 cell corners
        let c000 = self.get(ri, gi, bi);
        let c100 = self.get(ri + 1, gi, bi);
        let c010 = self.get(ri, gi + 1, bi);
        let c110 = self.get(ri + 1, gi + 1, bi);
        let c001 = self.get(ri, gi, bi + 1);
        let c101 = self.get(ri + 1, gi, bi + 1);
        let c011 = self.get(ri, gi + 1, bi + 1);
        let c111 = self.get(ri + 1, gi + 1, bi + 1);

        let mut result = [0.0f32; 3];
        for i in 0..3 {
            let c00 = c000[i] * (1.0 - rf) + c100[i] * rf;
            let c01 = c001[i] * (1.0 - rf) + c101[i] * rf;
            let c10 = c010[i] * (1.0 - rf) + c110[i] * rf;
            let c11 = c011[i] * (1.0 - rf) + c111[i] * rf;

            let c0 = c00 * (1.0 - gf) + c10 * gf;
            let c1 = c01 * (1.0 - gf) + c11 * gf;

            result[i] = c0 * (1.0 - bf) + c1 * bf;
        }

        result
    }

    /// Applies the LUT to a batch of RGB values in parallel.
    ///
    /// Order-preserving; each evaluation is independent and read-only over
    /// the table, so the batch splits across available cores.
    pub fn apply_batch(&self, pixels: &[[f32; 3]]) -> Vec<[f32; 3]> {
        pixels.par_iter().map(|&rgb| self.apply(rgb)).collect()
    }

    /// Concatenates this LUT with a second one.
    ///
    /// Every sample of `self` is pushed through `second`:
    /// `out.data[p] = second.apply(self.data[p])`. The result keeps the
    /// resolution of `self` (the first LUT in apply order) and is named
    /// `"{self.name}_PLUS_{second.name}"`.
    ///
    /// Concatenation is not commutative: `a.compose(&b)` and `b.compose(&a)`
    /// differ for non-identity inputs.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lutforge_lut::Lut3D;
    ///
    /// let a = Lut3D::identity(33).with_name("grade");
    /// let b = Lut3D::identity(17).with_name("look");
    /// let combined = a.compose(&b);
    /// assert_eq!(combined.size, 33);
    /// assert_eq!(combined.name, "grade_PLUS_look");
    /// ```
    pub fn compose(&self, second: &Lut3D) -> Lut3D {
        let data: Vec<[f32; 3]> = self
            .data
            .par_iter()
            .map(|&rgb| second.apply(rgb))
            .collect();

        Lut3D {
            data,
            size: self.size,
            name: format!("{}_PLUS_{}", self.name, second.name),
            domain_min: self.domain_min,
            domain_max: self.domain_max,
        }
    }

    /// Resamples the LUT to a different resolution.
    ///
    /// Every lattice point of the new grid samples this LUT at its own
    /// normalized coordinate. Downsampling discards detail between the
    /// surviving lattice points; upsampling only interpolates, it cannot
    /// invent detail the source never had.
    pub fn resized(&self, new_size: usize) -> LutResult<Lut3D> {
        if new_size < 2 {
            return Err(LutError::InvalidSize(format!(
                "target size must be at least 2, got {}",
                new_size
            )));
        }

        let n = (new_size - 1) as f32;
        let data: Vec<[f32; 3]> = (0..new_size * new_size * new_size)
            .into_par_iter()
            .map(|idx| {
                let r = idx % new_size;
                let g = (idx / new_size) % new_size;
                let b = idx / (new_size * new_size);
                self.apply([r as f32 / n, g as f32 / n, b as f32 / n])
            })
            .collect();

        Ok(Lut3D {
            data,
            size: new_size,
            name: self.name.clone(),
            domain_min: [0.0; 3],
            domain_max: [1.0; 3],
        })
    }

    /// Replaces non-finite samples and clamps the table to [0, 1].
    ///
    /// NaN becomes 0.0, +Inf becomes 1.0, -Inf becomes 0.0, then every
    /// component is clamped to the unit range. Deliberately lossy: `.cube`
    /// consumers expect unit-range tables. Run [`Lut3D::analyze`] first if
    /// the clipping magnitude matters. Idempotent.
    pub fn sanitize(&mut self) {
        for rgb in &mut self.data {
            for v in rgb.iter_mut() {
                if v.is_nan() {
                    *v = 0.0;
                } else if *v == f32::INFINITY {
                    *v = 1.0;
                } else if *v == f32::NEG_INFINITY {
                    *v = 0.0;
                }
                *v = v.clamp(0.0, 1.0);
            }
        }
    }

    /// Scans the table and reports min/max and the clipped component ratio.
    ///
    /// See [`RangeStats`] for what counts as clipped.
    pub fn analyze(&self) -> RangeStats {
        RangeStats::of_table(&self.data)
    }
}
