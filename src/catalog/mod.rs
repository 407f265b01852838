//! Floor-plan catalog storage.
//!
//! The catalog holds the authored floor plans of the pick-up point. Every
//! authored record is mirrored horizontally when the catalog is loaded, which
//! doubles the set of layouts the user can choose from. An embedded catalog is
//! compiled into the binary, but custom catalogs can also be loaded from JSON
//! files.
//!
//! ## Example
//!
//! ```rust,no_run
//! use plan_picker::LayoutCatalog;
//! use plan_picker::core::types::LayoutId;
//!
//! // Load embedded catalog
//! let catalog = LayoutCatalog::load_embedded().unwrap();
//!
//! // Originals and their mirrored twins
//! for layout in catalog.layouts() {
//!     println!("{} {} m²", layout.id, layout.area);
//! }
//!
//! // Get a specific layout and its twin
//! let layout = catalog.get(LayoutId::new(22));
//! let twin = catalog.twin(LayoutId::new(22));
//! ```
//!
//! ## Custom Catalogs
//!
//! ```rust,no_run
//! use plan_picker::LayoutCatalog;
//! use std::path::Path;
//!
//! let catalog = LayoutCatalog::load_embedded().unwrap();
//! let json = catalog.to_json().unwrap();
//!
//! let custom = LayoutCatalog::load_from_file(Path::new("my_layouts.json")).unwrap();
//! ```

pub mod mirror;
pub mod store;
