//! Linear data-to-pixel scale used by the rasterizer.

/// Linear scale mapping a data domain onto a pixel range.
///
/// The range may be decreasing, which flips the axis (used for the
/// inverted y axis of map plots).
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl LinearScale {
    /// Create a scale from the extent of `data` onto `range`.
    ///
    /// Returns `None` for empty or non-finite data. A degenerate domain
    /// (all values equal) maps everything to the range midpoint.
    #[must_use]
    pub fn from_data(data: impl Iterator<Item = f64>, range: (f64, f64)) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in data {
            min = min.min(v);
            max = max.max(v);
        }
        if !min.is_finite() || !max.is_finite() {
            return None;
        }

        Some(Self {
            domain_min: min,
            domain_max: max,
            range_min: range.0,
            range_max: range.1,
        })
    }

    /// Domain extent as (min, max).
    #[must_use]
    pub const fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    /// Transform a domain value to a range value.
    #[must_use]
    pub fn scale(&self, value: f64) -> f64 {
        let span = self.domain_max - self.domain_min;
        if span == 0.0 {
            return (self.range_min + self.range_max) / 2.0;
        }
        let t = (value - self.domain_min) / span;
        self.range_min + t * (self.range_max - self.range_min)
    }
}
