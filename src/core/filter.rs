use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::{EntryPosition, Shape, StoragePosition, StorageWall};

/// Smallest area offered by the catalog, in square meters
pub const MIN_AREA: f64 = 10.0;

/// Largest area offered by the catalog, in square meters
pub const MAX_AREA: f64 = 70.0;

/// Minimum distance between the two ends of an area range
pub const MIN_AREA_GAP: f64 = 5.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Area {value} m² is outside the catalog bounds [{min}, {max}]")]
    OutOfBounds { value: f64, min: f64, max: f64 },

    #[error("Area range is inverted: low {low} m² is above high {high} m²")]
    Inverted { low: f64, high: f64 },

    #[error("Area range [{low}, {high}] is narrower than the minimum gap of {gap} m²")]
    TooNarrow { low: f64, high: f64, gap: f64 },
}

/// Catalog-wide limits for area ranges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaBounds {
    pub min: f64,
    pub max: f64,
    pub min_gap: f64,
}

impl Default for AreaBounds {
    fn default() -> Self {
        Self {
            min: MIN_AREA,
            max: MAX_AREA,
            min_gap: MIN_AREA_GAP,
        }
    }
}

/// Inclusive `[low, high]` area constraint.
///
/// Always `bounds.min <= low`, `high <= bounds.max` and `high - low >= bounds.min_gap`.
/// Deserialized ranges are checked against the default bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAreaRange")]
pub struct AreaRange {
    low: f64,
    high: f64,
}

#[derive(Deserialize)]
struct RawAreaRange {
    low: f64,
    high: f64,
}

impl TryFrom<RawAreaRange> for AreaRange {
    type Error = FilterError;

    fn try_from(raw: RawAreaRange) -> Result<Self, Self::Error> {
        Self::new(raw.low, raw.high, &AreaBounds::default())
    }
}

impl AreaRange {
    /// The whole catalog range
    #[must_use]
    pub fn full(bounds: &AreaBounds) -> Self {
        Self {
            low: bounds.min,
            high: bounds.max,
        }
    }

    /// Validate an explicitly supplied range
    ///
    /// # Errors
    ///
    /// Returns an error if either end is outside `bounds`, the range is inverted,
    /// or the ends are closer than the minimum gap.
    pub fn new(low: f64, high: f64, bounds: &AreaBounds) -> Result<Self, FilterError> {
        for value in [low, high] {
            if !value.is_finite() || value < bounds.min || value > bounds.max {
                return Err(FilterError::OutOfBounds {
                    value,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
        if low > high {
            return Err(FilterError::Inverted { low, high });
        }
        if high - low < bounds.min_gap {
            return Err(FilterError::TooNarrow {
                low,
                high,
                gap: bounds.min_gap,
            });
        }
        Ok(Self { low, high })
    }

    /// Build a range the way the stepper and slider widgets do: the low end is
    /// clamped first, then the high end is pushed to respect the gap.
    #[must_use]
    pub fn clamped(low: f64, high: f64, bounds: &AreaBounds) -> Self {
        let low = low.max(bounds.min).min(bounds.max - bounds.min_gap);
        let high = high.max(low + bounds.min_gap).min(bounds.max);
        Self { low, high }
    }

    /// Move the low end, keeping it at least `min_gap` below the high end
    #[must_use]
    pub fn with_low(self, low: f64, bounds: &AreaBounds) -> Self {
        Self {
            low: low.max(bounds.min).min(self.high - bounds.min_gap),
            high: self.high,
        }
    }

    /// Move the high end, keeping it at least `min_gap` above the low end
    #[must_use]
    pub fn with_high(self, high: f64, bounds: &AreaBounds) -> Self {
        Self {
            low: self.low,
            high: high.max(self.low + bounds.min_gap).min(bounds.max),
        }
    }

    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    #[must_use]
    pub fn contains(&self, area: f64) -> bool {
        area >= self.low && area <= self.high
    }

    /// Widen both ends by `margin`, capped at the catalog bounds
    #[must_use]
    pub fn expanded(&self, margin: f64, bounds: &AreaBounds) -> Self {
        Self {
            low: (self.low - margin).max(bounds.min),
            high: (self.high + margin).min(bounds.max),
        }
    }
}

impl std::fmt::Display for AreaRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}–{} m²", self.low, self.high)
    }
}

/// The user's current constraints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub area_range: AreaRange,
    pub shape: Option<Shape>,
    pub entry: Option<EntryPosition>,
    pub storage: Option<StoragePosition>,
}

impl FilterState {
    /// Full area range, nothing else selected
    #[must_use]
    pub fn new(bounds: &AreaBounds) -> Self {
        Self {
            area_range: AreaRange::full(bounds),
            shape: None,
            entry: None,
            storage: None,
        }
    }

    /// Wall of the storage constraint, if one is set
    #[must_use]
    pub fn storage_wall(&self) -> Option<StorageWall> {
        self.storage.map(StoragePosition::wall)
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(&AreaBounds::default())
    }
}
