//! Dense block grid storage for BlockBuilder.
//!
//! A [`VoxelGrid`] owns one visibility flag and one color per cell of a fixed
//! lattice. Cells are never allocated or freed after construction; placing
//! and removing a block only flips its visibility.
//!
//! Grids exchange content through the [`CellSource`] trait, implemented by
//! live grids and by plain [`GridSnapshot`] values (the data shape of an
//! exported blockset).

mod block;
mod source;

pub use block::{MergeStats, VoxelGrid};
pub use source::{CellSource, GridSnapshot};
