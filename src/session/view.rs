use serde::{Deserialize, Serialize};

use crate::core::layout::Layout;
use crate::core::types::{EntryPosition, Shape, StoragePosition};
use crate::matching::naming::{layout_code_with, CodeAlphabet};

/// One result card: a layout, its code and whether it is the best match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutCard {
    pub layout: Layout,
    pub is_best_match: bool,
    pub code: String,
}

impl LayoutCard {
    pub fn new(layout: Layout, is_best_match: bool, alphabet: CodeAlphabet) -> Self {
        Self {
            code: layout_code_with(&layout, alphabet),
            layout,
            is_best_match,
        }
    }
}

/// Input of a floor-plan diagram renderer.
///
/// An interactive plan lets the user click door spots; it is drawn from the
/// current filters rather than from a catalog layout, so doors may be unset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanSpec {
    pub shape: Shape,
    pub entry: Option<EntryPosition>,
    pub storage: Option<StoragePosition>,
    pub width: f64,
    pub depth: f64,
    pub interactive: bool,
}

impl From<&Layout> for PlanSpec {
    fn from(layout: &Layout) -> Self {
        Self {
            shape: layout.shape,
            entry: Some(layout.entry),
            storage: Some(layout.storage),
            width: layout.width,
            depth: layout.depth,
            interactive: false,
        }
    }
}
