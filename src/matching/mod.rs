//! Layout matching, ranking and naming.
//!
//! This module provides the core selection logic:
//!
//! - [`MatchingEngine`]: Exact matches, graduated fallback and best match
//! - [`rank`]: Display order of the active result set
//! - [`layout_code`]: Short catalog code identifying a layout
//!
//! ## Matching Algorithm
//!
//! 1. **Exact matching**: Area within the range (inclusive), shape if set, and
//!    entry/storage once the door step has been reached
//! 2. **Fallback**: When nothing matches exactly, layouts sharing the storage
//!    wall are offered, narrowed by shape and area, then by area alone, then by
//!    a widened area range; the first non-empty tier wins
//! 3. **Best match**: The active layout whose area is closest to the midpoint
//!    of the range; only highlighted for exact results
//!
//! ## Example
//!
//! ```rust,no_run
//! use plan_picker::{FilterState, LayoutCatalog, MatchingEngine};
//! use plan_picker::matching::ranking::{rank, SortMode};
//!
//! let catalog = LayoutCatalog::load_embedded().unwrap();
//! let filters = FilterState::default();
//!
//! let engine = MatchingEngine::new(&catalog);
//! let outcome = engine.evaluate(&filters, true);
//!
//! for layout in rank(outcome.active(), SortMode::Relevance, &filters.area_range) {
//!     println!("{}: {} m²", layout.id, layout.area);
//! }
//! ```
//!
//! [`MatchingEngine`]: engine::MatchingEngine
//! [`rank`]: ranking::rank
//! [`layout_code`]: naming::layout_code

pub mod engine;
pub mod naming;
pub mod ranking;
