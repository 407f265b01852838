use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::mirror::expand;
use crate::core::layout::{Layout, LayoutRecord};
use crate::core::types::LayoutId;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// Catalog version for compatibility checking
pub const CATALOG_VERSION: &str = "1.0.0";

/// Serializable catalog format; holds authored records only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub layouts: Vec<LayoutRecord>,
}

/// The expanded layout catalog: every authored record plus its mirrored twin.
///
/// Immutable once built.
#[derive(Debug)]
pub struct LayoutCatalog {
    /// Authored records, in file order
    records: Vec<LayoutRecord>,

    /// Expanded layouts, each original followed by its twin
    layouts: Vec<Layout>,

    /// Index: layout ID -> index in layouts vec
    id_to_index: HashMap<LayoutId, usize>,
}

impl LayoutCatalog {
    /// Build a catalog from authored records.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Invalid` if ids are duplicated or would collide with
    /// mirrored ids, or if any area or dimension is not a positive finite number.
    pub fn from_records(records: Vec<LayoutRecord>) -> Result<Self, CatalogError> {
        validate_records(&records)?;

        let layouts = expand(&records);
        let id_to_index = layouts
            .iter()
            .enumerate()
            .map(|(index, layout)| (layout.id, index))
            .collect();

        debug!(
            "Expanded {} catalog records into {} layouts",
            records.len(),
            layouts.len()
        );

        Ok(Self {
            records,
            layouts,
            id_to_index,
        })
    }

    /// Load the embedded default catalog
    pub fn load_embedded() -> Result<Self, CatalogError> {
        // Validated at compile time by build.rs
        const EMBEDDED_CATALOG: &str = include_str!("../../catalogs/layouts.json");
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load catalog from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        // Version check (warn but don't fail)
        if data.version != CATALOG_VERSION {
            warn!(
                "Catalog version mismatch (expected {}, found {})",
                CATALOG_VERSION, data.version
            );
        }

        Self::from_records(data.layouts)
    }

    /// Get a layout by ID
    pub fn get(&self, id: LayoutId) -> Option<&Layout> {
        self.id_to_index.get(&id).map(|&idx| &self.layouts[idx])
    }

    /// The mirrored twin of an original, or the original of a twin
    pub fn twin(&self, id: LayoutId) -> Option<&Layout> {
        let layout = self.get(id)?;
        let twin_id = if layout.is_mirrored {
            layout.original_id
        } else {
            layout.id.mirrored()
        };
        self.get(twin_id)
    }

    /// All layouts in catalog order
    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    /// Authored records, without mirrored twins
    pub fn records(&self) -> &[LayoutRecord] {
        &self.records
    }

    /// Export catalog to JSON
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = CatalogData {
            version: CATALOG_VERSION.to_string(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            layouts: self.records.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    /// Number of layouts in the expanded catalog
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

fn validate_records(records: &[LayoutRecord]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();

    for record in records {
        let id = record.id;
        if id.0 == 0 || id.0 >= LayoutId::MIRROR_OFFSET {
            return Err(CatalogError::Invalid(format!(
                "layout id {id} must be in 1..{}",
                LayoutId::MIRROR_OFFSET
            )));
        }
        if !seen.insert(id) {
            return Err(CatalogError::Invalid(format!("duplicate layout id {id}")));
        }

        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(record.area) {
            return Err(CatalogError::Invalid(format!(
                "layout {id} has invalid area {}",
                record.area
            )));
        }
        for (name, value) in [("width", record.width), ("depth", record.depth)] {
            if let Some(v) = value {
                if !positive(v) {
                    return Err(CatalogError::Invalid(format!(
                        "layout {id} has invalid {name} {v}"
                    )));
                }
            }
        }
    }

    Ok(())
}
