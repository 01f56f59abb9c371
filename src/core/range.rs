use serde::Serialize;
use thiserror::Error;

/// Lowest selectable hourly price
pub const PRICE_FLOOR: f64 = 5.0;

/// Lowest rate admitted while the price filter is untouched
pub const UNRESTRICTED_FLOOR: f64 = 0.0;

/// Highest selectable hourly price
pub const PRICE_CEILING: f64 = 10_000.0;

/// Minimum distance kept between the two thumbs
pub const MIN_PRICE_GAP: f64 = 5.0;

/// Errors raised by price range updates
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    #[error("price bound must be a finite number, got {0}")]
    NonFinite(f64),

    #[error("price range {min}..{max} is outside 5..10000 or narrower than 5")]
    OutOfBounds { min: f64, max: f64 },
}

/// Dual-thumb price range.
///
/// Always satisfies `PRICE_FLOOR <= min`, `max <= PRICE_CEILING` and
/// `max - min >= MIN_PRICE_GAP`. Each thumb is clamped against the other
/// thumb's current position, so no sequence of updates can break this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

/// Position of the highlighted track segment, in percent of the full domain
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackFill {
    pub left_percent: f64,
    pub width_percent: f64,
}

impl PriceRange {
    /// The full domain, which counts as "no price filter"
    pub const fn unrestricted() -> Self {
        Self {
            min: PRICE_FLOOR,
            max: PRICE_CEILING,
        }
    }

    /// Build a range from explicit bounds, rejecting anything the thumbs could not reach
    pub fn new(min: f64, max: f64) -> Result<Self, RangeError> {
        if !min.is_finite() {
            return Err(RangeError::NonFinite(min));
        }
        if !max.is_finite() {
            return Err(RangeError::NonFinite(max));
        }
        if min < PRICE_FLOOR || max > PRICE_CEILING || max - min < MIN_PRICE_GAP {
            return Err(RangeError::OutOfBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// True when both thumbs sit at the domain edges, whether untouched or dragged back
    pub fn is_unrestricted(&self) -> bool {
        self.min <= PRICE_FLOOR && self.max >= PRICE_CEILING
    }

    /// Check whether an hourly rate falls inside the range.
    ///
    /// The unrestricted range spans `0..=PRICE_CEILING`, so unpriced (0)
    /// profiles pass while negative or above-ceiling rates do not.
    #[inline]
    pub fn contains(&self, rate: f64) -> bool {
        let min = if self.is_unrestricted() { UNRESTRICTED_FLOOR } else { self.min };
        min <= rate && rate <= self.max
    }

    /// Move the lower thumb. Returns the bound actually applied.
    pub fn set_min(&mut self, value: f64) -> Result<f64, RangeError> {
        if !value.is_finite() {
            return Err(RangeError::NonFinite(value));
        }
        self.min = value.clamp(PRICE_FLOOR, self.max - MIN_PRICE_GAP);
        Ok(self.min)
    }

    /// Move the upper thumb. Returns the bound actually applied.
    pub fn set_max(&mut self, value: f64) -> Result<f64, RangeError> {
        if !value.is_finite() {
            return Err(RangeError::NonFinite(value));
        }
        self.max = value.clamp(self.min + MIN_PRICE_GAP, PRICE_CEILING);
        Ok(self.max)
    }

    pub fn track(&self) -> TrackFill {
        let domain = PRICE_CEILING - PRICE_FLOOR;
        TrackFill {
            left_percent: (self.min - PRICE_FLOOR) / domain * 100.0,
            width_percent: (self.max - self.min) / domain * 100.0,
        }
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unrestricted()
    }
}
