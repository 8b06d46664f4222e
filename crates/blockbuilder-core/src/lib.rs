//! Core types, coordinate math, and configuration for BlockBuilder.
//!
//! This crate provides the foundational types used by every other crate:
//! - Lattice dimensions, cell coordinates, and inclusive regions
//! - Conversions between lattice coordinates, linear cell indices and
//!   world-space points
//! - Colors, block modes, and the element kinds tagged on pickable surfaces
//! - The editor configuration and the shared error type

pub mod config;
pub mod coords;
pub mod error;
pub mod math;
pub mod types;

pub use config::{EditorConfig, MergePolicy};
pub use coords::{cell_coord, cell_index, world_point_to_cell, CellCoord, LatticeDims, Region};
pub use error::{Error, Result};
pub use math::Aabb;
pub use types::{BlockMode, Color, ElementKind};

/// Editor-wide constants
pub mod constants {
    /// Lattice points per axis of a freshly created document.
    pub const DEFAULT_DIMENSION: u32 = 32;
    /// Smallest lattice that still contains one cell per axis.
    pub const MIN_DIMENSION: u32 = 2;
    /// Largest lattice point count per axis, keeping cell coordinates in `i32`.
    pub const MAX_DIMENSION: u32 = i32::MAX as u32;
    /// Scale of integer color channels.
    pub const COLOR_CHANNEL_MAX: f32 = 255.0;
}
