use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::store::LayoutCatalog;
use crate::core::filter::{AreaBounds, AreaRange, FilterState};
use crate::core::layout::Layout;
use crate::core::types::LayoutId;

/// Default widening of the area range for the last fallback tier, in square meters
pub const DEFAULT_FALLBACK_MARGIN: f64 = 10.0;

/// Configuration for the matching engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Catalog-wide area limits
    pub bounds: AreaBounds,
    /// How far the expanded-area fallback widens each end of the range
    pub fallback_margin: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            bounds: AreaBounds::default(),
            fallback_margin: DEFAULT_FALLBACK_MARGIN,
        }
    }
}

/// Where the active result set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// Layouts satisfying every active constraint
    Exact,
    /// Fallback layouts sharing the storage wall
    Similar,
    /// Nothing to show
    Empty,
}

/// Which fallback tier produced the similar matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarTier {
    /// Same storage wall, same shape, area in range
    ShapeAndArea,
    /// Same storage wall, area in range
    Area,
    /// Same storage wall, area in the widened range
    ExpandedArea,
}

impl std::fmt::Display for SimilarTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShapeAndArea => write!(f, "same storage wall, shape and area"),
            Self::Area => write!(f, "same storage wall and area"),
            Self::ExpandedArea => write!(f, "same storage wall, widened area"),
        }
    }
}

/// Result of matching filters against the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Layouts satisfying all active constraints, in catalog order
    pub exact: Vec<Layout>,

    /// Fallback layouts; only computed when `exact` is empty
    pub similar: Vec<Layout>,

    /// Tier that produced a non-empty `similar`
    pub similar_tier: Option<SimilarTier>,

    /// Layout of the active set closest to the area range midpoint
    pub best_match: Option<LayoutId>,
}

impl MatchOutcome {
    /// Exact matches if there are any, otherwise the similar matches
    pub fn active(&self) -> &[Layout] {
        if self.exact.is_empty() {
            &self.similar
        } else {
            &self.exact
        }
    }

    pub fn source(&self) -> MatchSource {
        if !self.exact.is_empty() {
            MatchSource::Exact
        } else if !self.similar.is_empty() {
            MatchSource::Similar
        } else {
            MatchSource::Empty
        }
    }

    /// Best-match highlighting only applies to exact results
    pub fn highlighted_best_match(&self) -> Option<LayoutId> {
        match self.source() {
            MatchSource::Exact => self.best_match,
            MatchSource::Similar | MatchSource::Empty => None,
        }
    }
}

/// Pick the layout whose area is closest to the range midpoint.
///
/// Ties go to the layout encountered first.
pub fn best_match(layouts: &[Layout], range: &AreaRange) -> Option<LayoutId> {
    let midpoint = range.midpoint();
    layouts
        .iter()
        .min_by(|a, b| {
            (a.area - midpoint)
                .abs()
                .total_cmp(&(b.area - midpoint).abs())
        })
        .map(|layout| layout.id)
}

/// The main matching engine
pub struct MatchingEngine<'a> {
    catalog: &'a LayoutCatalog,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(catalog: &'a LayoutCatalog) -> Self {
        Self {
            catalog,
            config: MatchingConfig::default(),
        }
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(catalog: &'a LayoutCatalog, config: MatchingConfig) -> Self {
        Self { catalog, config }
    }

    /// Compute exact matches, the similar-match fallback and the best match.
    ///
    /// `doors_active` is true once the user has reached the door-placement step
    /// or opened the results view. Until then entry and storage constraints are
    /// ignored and no fallback is attempted.
    pub fn evaluate(&self, filters: &FilterState, doors_active: bool) -> MatchOutcome {
        let exact = self.exact_matches(filters, doors_active);

        let (similar_tier, similar) = if exact.is_empty() && doors_active {
            self.similar_matches(filters)
        } else {
            (None, Vec::new())
        };

        let mut outcome = MatchOutcome {
            exact,
            similar,
            similar_tier,
            best_match: None,
        };
        outcome.best_match = best_match(outcome.active(), &filters.area_range);

        debug!(
            "Matched {} exact, {} similar ({:?}), best {:?}",
            outcome.exact.len(),
            outcome.similar.len(),
            outcome.similar_tier,
            outcome.best_match
        );

        outcome
    }

    /// Layouts satisfying every active constraint, in catalog order
    pub fn exact_matches(&self, filters: &FilterState, doors_active: bool) -> Vec<Layout> {
        self.catalog
            .layouts()
            .iter()
            .filter(|layout| {
                if !filters.area_range.contains(layout.area) {
                    return false;
                }
                if filters.shape.is_some_and(|shape| shape != layout.shape) {
                    return false;
                }
                if doors_active {
                    if filters.entry.is_some_and(|entry| entry != layout.entry) {
                        return false;
                    }
                    if filters.storage.is_some_and(|storage| storage != layout.storage) {
                        return false;
                    }
                }
                true
            })
            .copied()
            .collect()
    }

    /// Graduated fallback over layouts sharing the storage wall.
    ///
    /// Returns the first non-empty tier. Without a storage constraint, or when no
    /// layout shares its wall, there is nothing to offer.
    pub fn similar_matches(&self, filters: &FilterState) -> (Option<SimilarTier>, Vec<Layout>) {
        let Some(wall) = filters.storage_wall() else {
            return (None, Vec::new());
        };

        let same_wall: Vec<&Layout> = self
            .catalog
            .layouts()
            .iter()
            .filter(|layout| layout.storage.wall() == wall)
            .collect();
        if same_wall.is_empty() {
            return (None, Vec::new());
        }

        let range = filters.area_range;
        let select = |keep: &dyn Fn(&Layout) -> bool| -> Vec<Layout> {
            same_wall
                .iter()
                .filter(|layout| keep(layout))
                .map(|&&layout| layout)
                .collect()
        };

        // An absent shape constraint matches no layout here
        let tier = select(&|l| Some(l.shape) == filters.shape && range.contains(l.area));
        if !tier.is_empty() {
            return (Some(SimilarTier::ShapeAndArea), tier);
        }

        let tier = select(&|l| range.contains(l.area));
        if !tier.is_empty() {
            return (Some(SimilarTier::Area), tier);
        }

        let widened = range.expanded(self.config.fallback_margin, &self.config.bounds);
        let tier = select(&|l| widened.contains(l.area));
        if tier.is_empty() {
            (None, tier)
        } else {
            (Some(SimilarTier::ExpandedArea), tier)
        }
    }
}
