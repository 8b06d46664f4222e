//! Dense block grid.

use blockbuilder_core::{
    cell_coord, cell_index, CellCoord, Color, EditorConfig, LatticeDims, MergePolicy, Region,
    Result,
};
use glam::Vec3;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::source::{CellSource, GridSnapshot};

/// Outcome of a [`VoxelGrid::merge`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Incoming cells written into this grid.
    pub applied: usize,
    /// Incoming cells dropped because the destination was already visible.
    pub kept: usize,
    /// Incoming cells outside this grid's lattice.
    pub skipped: usize,
}

/// Block grid over a fixed lattice.
///
/// Visibility and color live in two parallel arrays sized once at
/// construction, so every edit is O(1) per touched cell.
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    dims: LatticeDims,
    origin: Vec3,
    unit: f32,
    visible: Vec<bool>,
    colors: Vec<Color>,
    /// Color stamped by subsequent `add` calls.
    paint_color: Color,
    edge_color: Color,
    merge_policy: MergePolicy,
    show_edges: bool,
}

impl VoxelGrid {
    /// Create an empty grid; every cell starts hidden with the default color.
    #[must_use]
    pub fn new(dims: LatticeDims, config: &EditorConfig) -> Self {
        let count = dims.cell_count();
        let color = config.block.color;
        debug!(%dims, cells = count, "Creating block grid");
        Self {
            dims,
            origin: config.origin(),
            unit: config.unit,
            visible: vec![false; count],
            colors: vec![color; count],
            paint_color: color,
            edge_color: config.block.edge_color,
            merge_policy: config.block.merge_policy,
            show_edges: config.toggles.edges,
        }
    }

    /// Create a grid with the lattice, visibility and colors of `source`.
    #[must_use]
    pub fn from_source<S: CellSource + ?Sized>(source: &S, config: &EditorConfig) -> Self {
        let mut grid = Self::new(source.dimensions(), config);
        for index in 0..grid.visible.len() {
            grid.visible[index] = source.is_cell_visible(index);
            grid.colors[index] = source.cell_color(index);
        }
        grid
    }

    /// Place the block at `coord`, stamping the current paint color.
    ///
    /// Re-adding a visible block refreshes its color.
    pub fn add(&mut self, coord: CellCoord) -> Result<()> {
        let index = self.dims.checked_index(coord)?;
        self.visible[index] = true;
        self.colors[index] = self.paint_color;
        Ok(())
    }

    /// Place every block of the inclusive `region`. Returns the cells touched.
    ///
    /// Both corners are validated before any cell changes.
    pub fn add_region(&mut self, region: Region) -> Result<usize> {
        self.check_region(region)?;
        let paint = self.paint_color;
        for coord in region.iter() {
            let index = cell_index(coord, self.dims);
            self.visible[index] = true;
            self.colors[index] = paint;
        }
        trace!(?region, "Added region");
        Ok(region.cell_count())
    }

    /// Remove the block at `coord`. Its color is kept for a later `add`.
    pub fn remove(&mut self, coord: CellCoord) -> Result<()> {
        let index = self.dims.checked_index(coord)?;
        self.visible[index] = false;
        Ok(())
    }

    /// Remove every block of the inclusive `region`. Returns the cells touched.
    pub fn remove_region(&mut self, region: Region) -> Result<usize> {
        self.check_region(region)?;
        for coord in region.iter() {
            let index = cell_index(coord, self.dims);
            self.visible[index] = false;
        }
        trace!(?region, "Removed region");
        Ok(region.cell_count())
    }

    /// Make every cell visible without touching colors.
    pub fn add_all(&mut self) {
        self.visible.par_iter_mut().for_each(|v| *v = true);
        debug!(cells = self.visible.len(), "Added all blocks");
    }

    /// Hide every cell.
    pub fn remove_all(&mut self) {
        self.visible.par_iter_mut().for_each(|v| *v = false);
        debug!(cells = self.visible.len(), "Removed all blocks");
    }

    /// Set the color used by subsequent `add` calls.
    ///
    /// With `is_integer_scale` the channels are read as `[0, 255]`.
    pub fn set_paint_color(&mut self, rgb: [f32; 3], is_integer_scale: bool) {
        self.paint_color = Color::from_scaled(rgb, is_integer_scale);
    }

    /// Merge the visible cells of `source` into this grid.
    ///
    /// Source cells are mapped through their lattice coordinate; cells that
    /// fall outside this lattice are skipped. Under
    /// [`MergePolicy::External`] incoming cells always win, under
    /// [`MergePolicy::Internal`] already visible cells are left untouched.
    pub fn merge<S: CellSource + ?Sized>(&mut self, source: &S, policy: MergePolicy) -> MergeStats {
        let source_dims = source.dimensions();
        let mut stats = MergeStats::default();

        for source_index in 0..source_dims.cell_count() {
            if !source.is_cell_visible(source_index) {
                continue;
            }
            let coord = cell_coord(source_index, source_dims);
            if !self.dims.contains(coord) {
                stats.skipped += 1;
                continue;
            }
            let index = cell_index(coord, self.dims);
            if self.visible[index] && policy == MergePolicy::Internal {
                stats.kept += 1;
                continue;
            }
            self.visible[index] = true;
            self.colors[index] = source.cell_color(source_index);
            stats.applied += 1;
        }

        debug!(
            ?policy,
            from = %source_dims,
            into = %self.dims,
            applied = stats.applied,
            kept = stats.kept,
            skipped = stats.skipped,
            "Merged block grid"
        );
        stats
    }

    /// Merge using this grid's configured policy.
    pub fn merge_with_default<S: CellSource + ?Sized>(&mut self, source: &S) -> MergeStats {
        self.merge(source, self.merge_policy)
    }

    /// Check whether the block at `coord` is placed.
    pub fn is_visible(&self, coord: CellCoord) -> Result<bool> {
        let index = self.dims.checked_index(coord)?;
        Ok(self.visible[index])
    }

    /// Color stored for `coord`, placed or not.
    pub fn color(&self, coord: CellCoord) -> Result<Color> {
        let index = self.dims.checked_index(coord)?;
        Ok(self.colors[index])
    }

    /// Number of placed blocks.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.par_iter().filter(|v| **v).count()
    }

    /// Coordinates of all placed blocks in index order.
    pub fn iter_visible(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.visible
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(index, _)| cell_coord(index, self.dims))
    }

    /// Copy the cells into a plain snapshot.
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::from_grid_arrays(self.dims, self.visible.clone(), self.colors.clone())
    }

    #[must_use]
    pub const fn dimensions(&self) -> LatticeDims {
        self.dims
    }

    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.dims.cell_count()
    }

    #[must_use]
    pub const fn origin(&self) -> Vec3 {
        self.origin
    }

    #[must_use]
    pub const fn unit(&self) -> f32 {
        self.unit
    }

    #[must_use]
    pub const fn paint_color(&self) -> Color {
        self.paint_color
    }

    #[must_use]
    pub const fn edge_color(&self) -> Color {
        self.edge_color
    }

    #[must_use]
    pub const fn merge_policy(&self) -> MergePolicy {
        self.merge_policy
    }

    pub fn set_merge_policy(&mut self, policy: MergePolicy) {
        self.merge_policy = policy;
    }

    #[must_use]
    pub const fn show_edges(&self) -> bool {
        self.show_edges
    }

    pub fn set_show_edges(&mut self, value: bool) {
        self.show_edges = value;
    }

    fn check_region(&self, region: Region) -> Result<()> {
        self.dims.checked_index(region.min())?;
        self.dims.checked_index(region.max())?;
        Ok(())
    }
}

impl CellSource for VoxelGrid {
    fn dimensions(&self) -> LatticeDims {
        self.dims
    }

    fn is_cell_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    fn cell_color(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or(self.paint_color)
    }
}
