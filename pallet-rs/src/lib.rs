//! `pallet-rs` is a stacking engine for pallet loading problems with a single
//! carton type: it models the pallet, the carton and its 6 axis-aligned
//! orientations, and certifies per-layer placements (bounds, overlap and
//! support from the layer below).
//!
//! The engine itself contains no optimization strategy; see the `alf` crate
//! for the alternating-layer fill optimizer built on top of it.

/// Everything related to the entities in a stacking problem: cartons, pallets, layers and solutions.
pub mod entities;

/// Axis-aligned footprint geometry.
pub mod geometry;

/// Occupancy grid used to certify that a layer rests on the one below.
pub mod support;

/// Helper functions and feasibility assertions.
pub mod util;
