use serde::{Deserialize, Serialize};

use crate::core::types::{EntryPosition, LayoutId, Shape, StoragePosition};

/// An authored catalog record, before mirroring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutRecord {
    pub id: LayoutId,

    /// Floor area in square meters
    pub area: f64,

    pub shape: Shape,

    /// Client door, always on the bottom wall
    pub entry: EntryPosition,

    /// Storage door
    pub storage: StoragePosition,

    /// Frontal wall length in meters; derived from area and shape when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Side wall length in meters; derived from area and shape when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

impl LayoutRecord {
    pub fn new(
        id: u32,
        area: f64,
        shape: Shape,
        entry: EntryPosition,
        storage: StoragePosition,
    ) -> Self {
        Self {
            id: LayoutId::new(id),
            area,
            shape,
            entry,
            storage,
            width: None,
            depth: None,
        }
    }

    #[must_use]
    pub fn with_dimensions(mut self, width: f64, depth: f64) -> Self {
        self.width = Some(width);
        self.depth = Some(depth);
        self
    }

    /// Physical `(width, depth)` footprint.
    ///
    /// Explicit dimensions win; otherwise both are derived from the area and shape.
    #[must_use]
    pub fn dimensions(&self) -> (f64, f64) {
        match (self.width, self.depth) {
            (Some(width), Some(depth)) => (width, depth),
            _ => self.shape.dimensions_for(self.area),
        }
    }
}

/// A layout in the expanded catalog, either authored or a mirrored twin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub id: LayoutId,

    /// Id of the authored record this entry derives from
    pub original_id: LayoutId,

    pub area: f64,
    pub shape: Shape,
    pub entry: EntryPosition,
    pub storage: StoragePosition,
    pub width: f64,
    pub depth: f64,

    /// True for the horizontally-flipped twin of an authored record
    pub is_mirrored: bool,
}

impl Layout {
    /// The authored record as it appears in the catalog, unmirrored
    #[must_use]
    pub fn from_record(record: &LayoutRecord) -> Self {
        let (width, depth) = record.dimensions();
        Self {
            id: record.id,
            original_id: record.id,
            area: record.area,
            shape: record.shape,
            entry: record.entry,
            storage: record.storage,
            width,
            depth,
            is_mirrored: false,
        }
    }
}
