use crate::core::layout::{Layout, LayoutRecord};
use crate::core::types::{EntryPosition, StoragePosition};

/// Reflect an entry position across the vertical axis
#[must_use]
pub fn mirror_entry(entry: EntryPosition) -> EntryPosition {
    match entry {
        EntryPosition::Left => EntryPosition::Right,
        EntryPosition::Center => EntryPosition::Center,
        EntryPosition::Right => EntryPosition::Left,
    }
}

/// Reflect a storage position across the vertical axis.
///
/// Left and right walls swap, keeping the spot along the wall.
#[must_use]
pub fn mirror_storage(storage: StoragePosition) -> StoragePosition {
    match storage {
        StoragePosition::TopLeft => StoragePosition::TopRight,
        StoragePosition::TopCenter => StoragePosition::TopCenter,
        StoragePosition::TopRight => StoragePosition::TopLeft,
        StoragePosition::LeftTop => StoragePosition::RightTop,
        StoragePosition::LeftCenter => StoragePosition::RightCenter,
        StoragePosition::LeftBottom => StoragePosition::RightBottom,
        StoragePosition::RightTop => StoragePosition::LeftTop,
        StoragePosition::RightCenter => StoragePosition::LeftCenter,
        StoragePosition::RightBottom => StoragePosition::LeftBottom,
    }
}

/// Horizontally flipped twin of an authored record. Dimensions are unchanged.
#[must_use]
pub fn mirrored_twin(record: &LayoutRecord) -> Layout {
    let original = Layout::from_record(record);
    Layout {
        id: record.id.mirrored(),
        entry: mirror_entry(record.entry),
        storage: mirror_storage(record.storage),
        is_mirrored: true,
        ..original
    }
}

/// Expand authored records into the working catalog.
///
/// Each record is followed immediately by its mirrored twin, so the output
/// has exactly `2 * records.len()` entries in authored order.
#[must_use]
pub fn expand(records: &[LayoutRecord]) -> Vec<Layout> {
    records
        .iter()
        .flat_map(|record| [Layout::from_record(record), mirrored_twin(record)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{LayoutId, Shape};

    fn record(id: u32, entry: EntryPosition, storage: StoragePosition) -> LayoutRecord {
        LayoutRecord::new(id, 25.0, Shape::Square, entry, storage).with_dimensions(5.0, 5.0)
    }

    #[test]
    fn test_mirror_is_involution() {
        for entry in EntryPosition::ALL {
            assert_eq!(mirror_entry(mirror_entry(entry)), entry);
        }
        for storage in StoragePosition::ALL {
            assert_eq!(mirror_storage(mirror_storage(storage)), storage);
        }
    }

    #[test]
    fn test_mirror_keeps_spot_on_side_walls() {
        assert_eq!(
            mirror_storage(StoragePosition::LeftBottom),
            StoragePosition::RightBottom
        );
        assert_eq!(
            mirror_storage(StoragePosition::RightTop),
            StoragePosition::LeftTop
        );
        assert_eq!(
            mirror_storage(StoragePosition::TopCenter),
            StoragePosition::TopCenter
        );
    }

    #[test]
    fn test_expand_cardinality_and_order() {
        let records = vec![
            record(1, EntryPosition::Left, StoragePosition::TopLeft),
            record(2, EntryPosition::Center, StoragePosition::LeftCenter),
            record(3, EntryPosition::Right, StoragePosition::RightBottom),
        ];
        let layouts = expand(&records);
        assert_eq!(layouts.len(), 2 * records.len());

        let ids: Vec<u32> = layouts.iter().map(|l| l.id.0).collect();
        assert_eq!(ids, vec![1, 1001, 2, 1002, 3, 1003]);
    }

    #[test]
    fn test_expand_twin_fields() {
        let layouts = expand(&[record(22, EntryPosition::Right, StoragePosition::LeftCenter)]);
        let (original, twin) = (&layouts[0], &layouts[1]);

        assert!(!original.is_mirrored);
        assert_eq!(original.original_id, LayoutId::new(22));

        assert!(twin.is_mirrored);
        assert_eq!(twin.id, LayoutId::new(1022));
        assert_eq!(twin.original_id, LayoutId::new(22));
        assert_eq!(twin.entry, EntryPosition::Left);
        assert_eq!(twin.storage, StoragePosition::RightCenter);
        assert_eq!(twin.area, original.area);
        assert_eq!(twin.width, original.width);
        assert_eq!(twin.depth, original.depth);
        assert_eq!(twin.shape, original.shape);
    }

    #[test]
    fn test_expand_empty() {
        assert!(expand(&[]).is_empty());
    }
}
