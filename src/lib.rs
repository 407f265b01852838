//! # plan-picker
//!
//! A library for choosing a pick-up point floor plan from a fixed catalog.
//!
//! Franchisees describe the room they have: an area range, a shape, where the
//! client door sits on the facade and where the storage door goes. `plan-picker`
//! matches those constraints against a catalog of authored layouts, each of which
//! is also offered as a left-right mirrored twin.
//!
//! ## Features
//!
//! - **Exact matching**: Area range, shape, entry and storage door constraints
//! - **Similar layouts**: Falls back to layouts sharing the storage wall, widening the search step by step
//! - **Best match**: Highlights the layout closest to the middle of the requested range
//! - **Sorting**: Relevance, or area ascending/descending
//! - **Catalog codes**: Ordering codes such as `К25-ЦФ2.01`
//! - **Guided sessions**: Three-step wizard with debounced filter edits
//!
//! ## Example
//!
//! ```rust,no_run
//! use plan_picker::{FilterState, LayoutCatalog, MatchingEngine, Shape};
//! use plan_picker::matching::naming::layout_code;
//!
//! // Load the embedded catalog of layouts
//! let catalog = LayoutCatalog::load_embedded().unwrap();
//!
//! let mut filters = FilterState::default();
//! filters.shape = Some(Shape::Square);
//!
//! // Door constraints only apply once the door step is active
//! let engine = MatchingEngine::new(&catalog);
//! let outcome = engine.evaluate(&filters, false);
//!
//! for layout in outcome.active() {
//!     println!("{}: {} m²", layout_code(layout), layout.area);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Layout catalog storage and mirroring
//! - [`core`]: Core data types for layouts, door positions and filters
//! - [`matching`]: Matching engine, ranking and catalog codes
//! - [`session`]: Guided selection flow and debounced recomputation
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod session;

// Re-export commonly used types for convenience
pub use catalog::store::{CatalogError, LayoutCatalog};
pub use core::filter::{AreaBounds, AreaRange, FilterError, FilterState};
pub use core::layout::{Layout, LayoutRecord};
pub use core::types::*;
pub use matching::engine::{MatchOutcome, MatchSource, MatchingEngine, SimilarTier};
pub use matching::ranking::SortMode;
pub use session::configurator::{Configurator, SessionConfig};
pub use session::live::LiveSession;
pub use session::wizard::{WizardEvent, WizardState, WizardStep};
