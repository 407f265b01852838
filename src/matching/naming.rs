use serde::{Deserialize, Serialize};

use crate::core::layout::Layout;
use crate::core::types::{EntryPosition, Shape, StoragePosition, StorageWall};

/// Variant suffix; there is a single variant per layout for now
const VARIANT_SUFFIX: &str = ".01";

/// Letters used to spell a layout code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeAlphabet {
    /// Codes as printed in the catalog, e.g. `К25-ЦФ2.01`
    #[default]
    Cyrillic,
    /// Transliterated codes, e.g. `K25-CF2.01`
    Latin,
}

impl CodeAlphabet {
    fn shape(self, shape: Shape) -> char {
        match (self, shape) {
            (Self::Cyrillic, Shape::Square) => 'К',
            (Self::Cyrillic, Shape::Horizontal) => 'Г',
            (Self::Cyrillic, Shape::Vertical) => 'В',
            (Self::Latin, Shape::Square) => 'K',
            (Self::Latin, Shape::Horizontal) => 'G',
            (Self::Latin, Shape::Vertical) => 'V',
        }
    }

    fn entry(self, entry: EntryPosition) -> char {
        match (self, entry) {
            (Self::Cyrillic, EntryPosition::Left) => 'Л',
            (Self::Cyrillic, EntryPosition::Center) => 'Ц',
            (Self::Cyrillic, EntryPosition::Right) => 'П',
            (Self::Latin, EntryPosition::Left) => 'L',
            (Self::Latin, EntryPosition::Center) => 'C',
            (Self::Latin, EntryPosition::Right) => 'R',
        }
    }

    /// Wall letter; the top wall is the front wall as seen from the entrance
    fn wall(self, wall: StorageWall) -> char {
        match (self, wall) {
            (Self::Cyrillic, StorageWall::Top) => 'Ф',
            (Self::Cyrillic, StorageWall::Left) => 'Л',
            (Self::Cyrillic, StorageWall::Right) => 'П',
            (Self::Latin, StorageWall::Top) => 'F',
            (Self::Latin, StorageWall::Left) => 'L',
            (Self::Latin, StorageWall::Right) => 'R',
        }
    }
}

/// Digit of a storage position along its wall.
///
/// Left wall counts from the facade (1) to the far corner (3); the front wall
/// counts left to right; the right wall counts from the far corner to the facade.
#[must_use]
pub fn storage_digit(storage: StoragePosition) -> u8 {
    match storage {
        StoragePosition::TopLeft | StoragePosition::LeftBottom | StoragePosition::RightTop => 1,
        StoragePosition::TopCenter
        | StoragePosition::LeftCenter
        | StoragePosition::RightCenter => 2,
        StoragePosition::TopRight | StoragePosition::LeftTop | StoragePosition::RightBottom => 3,
    }
}

/// Catalog code of a layout, e.g. `К25-ЦФ2.01`
#[must_use]
pub fn layout_code(layout: &Layout) -> String {
    layout_code_with(layout, CodeAlphabet::default())
}

/// Layout code spelled with the given alphabet:
/// `{shape}{area}-{entry}{wall}{digit}.01`
#[must_use]
pub fn layout_code_with(layout: &Layout, alphabet: CodeAlphabet) -> String {
    format!(
        "{}{}-{}{}{}{VARIANT_SUFFIX}",
        alphabet.shape(layout.shape),
        layout.area,
        alphabet.entry(layout.entry),
        alphabet.wall(layout.storage.wall()),
        storage_digit(layout.storage),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::LayoutRecord;

    fn layout(area: f64, shape: Shape, entry: EntryPosition, storage: StoragePosition) -> Layout {
        Layout::from_record(&LayoutRecord::new(1, area, shape, entry, storage))
    }

    #[test]
    fn test_square_center_top_center() {
        let l = layout(
            25.0,
            Shape::Square,
            EntryPosition::Center,
            StoragePosition::TopCenter,
        );
        assert_eq!(layout_code(&l), "К25-ЦФ2.01");
        assert_eq!(layout_code_with(&l, CodeAlphabet::Latin), "K25-CF2.01");
    }

    #[test]
    fn test_side_wall_digits() {
        let code = |storage| {
            layout_code_with(
                &layout(63.0, Shape::Horizontal, EntryPosition::Left, storage),
                CodeAlphabet::Latin,
            )
        };
        assert_eq!(code(StoragePosition::LeftBottom), "G63-LL1.01");
        assert_eq!(code(StoragePosition::LeftTop), "G63-LL3.01");
        assert_eq!(code(StoragePosition::RightTop), "G63-LR1.01");
        assert_eq!(code(StoragePosition::RightBottom), "G63-LR3.01");
        assert_eq!(code(StoragePosition::RightCenter), "G63-LR2.01");
    }

    #[test]
    fn test_every_storage_position_has_a_code() {
        for storage in StoragePosition::ALL {
            for alphabet in [CodeAlphabet::Cyrillic, CodeAlphabet::Latin] {
                let code =
                    layout_code_with(&layout(12.0, Shape::Vertical, EntryPosition::Right, storage), alphabet);
                assert!(code.ends_with(".01"));
                assert_eq!(code.chars().count(), "В12-ПФ2.01".chars().count());
            }
        }
    }

    #[test]
    fn test_fractional_area_is_printed() {
        let l = layout(
            22.5,
            Shape::Vertical,
            EntryPosition::Right,
            StoragePosition::TopLeft,
        );
        assert_eq!(layout_code(&l), "В22.5-ПФ1.01");
    }
}
