use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::filter::AreaRange;
use crate::core::layout::Layout;
use crate::core::types::{normalize_name, ParseError};

/// Display order for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Closest area to the range midpoint first
    #[default]
    Relevance,
    AreaAsc,
    AreaDesc,
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Relevance => write!(f, "relevance"),
            Self::AreaAsc => write!(f, "area-asc"),
            Self::AreaDesc => write!(f, "area-desc"),
        }
    }
}

impl FromStr for SortMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "relevance" => Ok(Self::Relevance),
            "area asc" => Ok(Self::AreaAsc),
            "area desc" => Ok(Self::AreaDesc),
            _ => Err(ParseError::new(
                "sort mode",
                s,
                "relevance, area-asc, area-desc",
            )),
        }
    }
}

/// Order layouts for display.
///
/// The sort is stable: layouts that compare equal keep their relative order.
#[must_use]
pub fn rank(layouts: &[Layout], mode: SortMode, range: &AreaRange) -> Vec<Layout> {
    let mut ranked = layouts.to_vec();
    match mode {
        SortMode::AreaAsc => ranked.sort_by(|a, b| a.area.total_cmp(&b.area)),
        SortMode::AreaDesc => ranked.sort_by(|a, b| b.area.total_cmp(&a.area)),
        SortMode::Relevance => {
            let midpoint = range.midpoint();
            ranked.sort_by(|a, b| {
                (a.area - midpoint)
                    .abs()
                    .total_cmp(&(b.area - midpoint).abs())
            });
        }
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::AreaBounds;
    use crate::core::layout::LayoutRecord;
    use crate::core::types::{EntryPosition, Shape, StoragePosition};

    fn layout(id: u32, area: f64) -> Layout {
        Layout::from_record(&LayoutRecord::new(
            id,
            area,
            Shape::Horizontal,
            EntryPosition::Right,
            StoragePosition::TopRight,
        ))
    }

    fn ids(layouts: &[Layout]) -> Vec<u32> {
        layouts.iter().map(|l| l.id.0).collect()
    }

    fn sample() -> Vec<Layout> {
        vec![
            layout(1, 45.0),
            layout(2, 20.0),
            layout(3, 35.0),
            layout(4, 25.0),
            layout(5, 30.0),
        ]
    }

    fn range() -> AreaRange {
        AreaRange::new(20.0, 40.0, &AreaBounds::default()).unwrap()
    }

    #[test]
    fn test_area_ascending_and_descending() {
        let layouts = sample();
        assert_eq!(
            ids(&rank(&layouts, SortMode::AreaAsc, &range())),
            vec![2, 4, 5, 3, 1]
        );
        assert_eq!(
            ids(&rank(&layouts, SortMode::AreaDesc, &range())),
            vec![1, 3, 5, 4, 2]
        );
    }

    #[test]
    fn test_relevance_ties_keep_input_order() {
        // Midpoint 30: 35 and 25 tie at distance 5, 45 is farthest
        let layouts = sample();
        assert_eq!(
            ids(&rank(&layouts, SortMode::Relevance, &range())),
            vec![5, 3, 4, 2, 1]
        );
    }

    #[test]
    fn test_sort_is_idempotent() {
        let once = rank(&sample(), SortMode::AreaAsc, &range());
        let twice = rank(&once, SortMode::AreaAsc, &range());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_equal_areas_keep_catalog_order() {
        let layouts = vec![layout(7, 30.0), layout(1007, 30.0), layout(8, 30.0)];
        assert_eq!(
            ids(&rank(&layouts, SortMode::AreaDesc, &range())),
            vec![7, 1007, 8]
        );
    }

    #[test]
    fn test_parse_sort_mode() {
        assert_eq!("area-asc".parse::<SortMode>().unwrap(), SortMode::AreaAsc);
        assert_eq!("Area_Desc".parse::<SortMode>().unwrap(), SortMode::AreaDesc);
        assert_eq!(SortMode::default(), SortMode::Relevance);
        assert!("newest".parse::<SortMode>().is_err());
    }
}
