//! Scale functions for value-to-pixel mappings.
//!
//! The y axis of a bar chart is a [`LinearScale`] over a "nice" domain whose
//! tick step is 1, 2, 2.5 or 5 times a power of ten.

use trueno::Vector;

use crate::error::{Error, Result};

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Linear scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if domain_min equals domain_max.
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Result<Self> {
        if (domain.0 - domain.1).abs() < f32::EPSILON {
            return Err(Error::Rendering("Domain min and max cannot be equal".to_string()));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }
}

impl Scale<f32, f32> for LinearScale {
    fn scale(&self, value: f32) -> f32 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

/// Preferred tick count on the value axis.
const TARGET_TICKS: f32 = 5.0;

/// Round a raw step up to 1, 2, 2.5, 5 or 10 times a power of ten.
#[must_use]
pub fn nice_step(raw: f32) -> f32 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f32.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Min and max of a series, computed with trueno's SIMD reductions.
///
/// Returns `None` for an empty series.
#[must_use]
pub fn extent(values: &[f64]) -> Option<(f32, f32)> {
    if values.is_empty() {
        return None;
    }
    let vec = Vector::from_vec(values.iter().map(|&v| v as f32).collect());
    let min = vec.min().ok()?;
    let max = vec.max().ok()?;
    Some((min, max))
}

/// Value axis: a nice domain, its tick positions and the pixel mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueAxis {
    scale: LinearScale,
    ticks: Vec<f32>,
}

impl ValueAxis {
    /// Fit an axis to `values`, mapping onto pixel rows `bottom..=top`.
    ///
    /// With `begin_at_zero` the domain always includes zero. A flat series
    /// gets a unit-wide domain so bars of height zero still have an axis.
    pub fn fit(values: &[f64], begin_at_zero: bool, bottom: f32, top: f32) -> Result<Self> {
        let (mut lo, mut hi) = extent(values).unwrap_or((0.0, 0.0));
        if begin_at_zero {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }
        if (hi - lo).abs() < f32::EPSILON {
            if begin_at_zero && lo >= 0.0 {
                hi = lo + 1.0;
            } else {
                lo -= 0.5;
                hi += 0.5;
            }
        }

        let step = nice_step((hi - lo) / TARGET_TICKS);
        let lo = (lo / step).floor() * step;
        let hi = (hi / step).ceil() * step;

        let count = ((hi - lo) / step).round() as usize;
        let ticks = (0..=count).map(|i| lo + step * i as f32).collect();

        Ok(Self {
            scale: LinearScale::new((lo, hi), (bottom, top))?,
            ticks,
        })
    }

    /// Tick values from the bottom of the axis up.
    #[must_use]
    pub fn ticks(&self) -> &[f32] {
        &self.ticks
    }

    /// The underlying value-to-pixel scale.
    #[must_use]
    pub fn scale(&self) -> &LinearScale {
        &self.scale
    }

    /// Pixel row for a value.
    #[must_use]
    pub fn to_pixel(&self, value: f64) -> f32 {
        self.scale.scale(value as f32)
    }
}
