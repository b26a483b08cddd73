//! 1-dimensional lookup table.
//!
//! A 1D LUT applies an independent curve per color channel. They show up as
//! inputs to concatenation (a `.cube` file can hold one); the engine promotes
//! them to an equivalent 3D cube before composing.

use crate::{Lut3D, LutError, LutResult};

/// A 1-dimensional lookup table.
///
/// Holds one curve shared by all channels (mono) or three separate channel
/// curves, with linear interpolation between entries.
///
/// # Example
///
/// ```rust
/// use lutforge_lut::Lut1D;
///
/// let curve = Lut1D::gamma(256, 2.2);
/// let out = curve.apply(0.5);
/// assert!((out - 0.5f32.powf(2.2)).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct Lut1D {
    /// Entries for the red channel (or all channels if mono).
    pub r: Vec<f32>,
    /// Entries for the green channel (None if mono).
    pub g: Option<Vec<f32>>,
    /// Entries for the blue channel (None if mono).
    pub b: Option<Vec<f32>>,
    /// Provenance label.
    pub name: String,
    /// Input domain minimum.
    pub domain_min: f32,
    /// Input domain maximum.
    pub domain_max: f32,
}

impl Lut1D {
    /// Creates an identity (pass-through) 1D LUT.
    pub fn identity(size: usize) -> Self {
        let entries: Vec<f32> = (0..size)
            .map(|i| i as f32 / (size - 1) as f32)
            .collect();
        Self {
            r: entries,
            g: None,
            b: None,
            name: String::new(),
            domain_min: 0.0,
            domain_max: 1.0,
        }
    }

    /// Creates a gamma curve LUT.
    pub fn gamma(size: usize, gamma: f32) -> Self {
        let entries: Vec<f32> = (0..size)
            .map(|i| {
                let t = i as f32 / (size - 1) as f32;
                t.powf(gamma)
            })
            .collect();
        Self {
            r: entries,
            g: None,
            b: None,
            name: String::new(),
            domain_min: 0.0,
            domain_max: 1.0,
        }
    }

    /// Creates a 3-channel LUT from separate RGB data.
    pub fn from_rgb(
        r: Vec<f32>,
        g: Vec<f32>,
        b: Vec<f32>,
        domain_min: f32,
        domain_max: f32,
    ) -> LutResult<Self> {
        if r.is_empty() {
            return Err(LutError::InvalidSize("1D LUT size must be > 0".into()));
        }
        if r.len() != g.len() || r.len() != b.len() {
            return Err(LutError::InvalidSize(
                "RGB channels must have the same size".into(),
            ));
        }
        Ok(Self {
            r,
            g: Some(g),
            b: Some(b),
            name: String::new(),
            domain_min,
            domain_max,
        })
    }

    /// Sets the provenance name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the number of entries per channel.
    #[inline]
    pub fn size(&self) -> usize {
        self.r.len()
    }

    /// Applies the LUT to a single value using linear interpolation.
    pub fn apply(&self, value: f32) -> f32 {
        self.interpolate(&self.r, value)
    }

    /// Applies the LUT to RGB values.
    ///
    /// A mono LUT applies the same curve to all channels.
    pub fn apply_rgb(&self, rgb: [f32; 3]) -> [f32; 3] {
        [
            self.interpolate(&self.r, rgb[0]),
            self.interpolate(self.g.as_ref().unwrap_or(&self.r), rgb[1]),
            self.interpolate(self.b.as_ref().unwrap_or(&self.r), rgb[2]),
        ]
    }

    /// Linear interpolation in one channel's table.
    fn interpolate(&self, data: &[f32], value: f32) -> f32 {
        let size = data.len();
        if size == 0 {
            return value;
        }

        let range = self.domain_max - self.domain_min;
        let t = if range.abs() < 1e-10 {
            0.0
        } else {
            (value - self.domain_min) / range
        };

        let idx_f = t.clamp(0.0, 1.0) * (size - 1) as f32;
        let idx0 = (idx_f.floor() as usize).min(size - 1);
        let idx1 = (idx0 + 1).min(size - 1);
        let frac = idx_f - idx0 as f32;

        data[idx0] * (1.0 - frac) + data[idx1] * frac
    }

    /// Promotes the per-channel curves to an equivalent 3D cube.
    ///
    /// A 1D LUT is channel-independent, so the cube replicates each curve
    /// along its own axis: `table[r, g, b] = (R(r), G(g), B(b))` with each
    /// curve evaluated at the lattice coordinate. The promotion preserves
    /// the transform exactly up to the cube's own sampling density.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lutforge_lut::Lut1D;
    ///
    /// let cube = Lut1D::gamma(1024, 2.2).to_3d(33).unwrap();
    /// assert_eq!(cube.size, 33);
    /// ```
    pub fn to_3d(&self, size: usize) -> LutResult<Lut3D> {
        if size < 2 {
            return Err(LutError::InvalidSize(format!(
                "3D promotion needs at least 2 points per axis, got {}",
                size
            )));
        }

        let n = (size - 1) as f32;
        let span = self.domain_max - self.domain_min;
        let coord = |i: usize| self.domain_min + span * (i as f32 / n);

        let r_curve = &self.r;
        let g_curve = self.g.as_ref().unwrap_or(&self.r);
        let b_curve = self.b.as_ref().unwrap_or(&self.r);

        let mut data = Vec::with_capacity(size * size * size);
        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    data.push([
                        self.interpolate(r_curve, coord(r)),
                        self.interpolate(g_curve, coord(g)),
                        self.interpolate(b_curve, coord(b)),
                    ]);
                }
            }
        }

        Ok(Lut3D::from_data(data, size)?.with_name(self.name.clone()))
    }
}
