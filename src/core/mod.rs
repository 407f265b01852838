//! Core data types for layout selection.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`LayoutRecord`]: An authored floor plan as it appears in the catalog file
//! - [`Layout`]: A floor plan in the expanded catalog (authored or mirrored)
//! - [`FilterState`], [`AreaRange`]: The user's constraints
//! - [`Shape`], [`EntryPosition`], [`StoragePosition`]: Room and door descriptors
//!
//! ## Door Placement
//!
//! The client entrance is always on the bottom (facade) wall. The storage door
//! sits on one of the other three walls:
//!
//! | Wall  | Positions               |
//! |-------|-------------------------|
//! | Top   | Left, Center, Right     |
//! | Left  | Top, Center, Bottom     |
//! | Right | Top, Center, Bottom     |
//!
//! [`LayoutRecord`]: layout::LayoutRecord
//! [`Layout`]: layout::Layout
//! [`FilterState`]: filter::FilterState
//! [`AreaRange`]: filter::AreaRange
//! [`Shape`]: types::Shape
//! [`EntryPosition`]: types::EntryPosition
//! [`StoragePosition`]: types::StoragePosition

pub mod filter;
pub mod layout;
pub mod types;
