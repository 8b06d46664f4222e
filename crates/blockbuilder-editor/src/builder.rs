//! Edit dispatch.
//!
//! [`Builder`] turns pointer picks into selector updates and grid edits:
//! the grid-surface hit point becomes a lattice cell on the active work
//! plane, the symmetry selector mirrors it, and on commit the current
//! operation runs on the primary cell and every active mirror.

use blockbuilder_core::{
    world_point_to_cell, BlockMode, CellCoord, Color, EditorConfig, ElementKind, LatticeDims,
    Region, Result,
};
use blockbuilder_grid::{CellSource, GridSnapshot, MergeStats, VoxelGrid};
use blockbuilder_pick::{Intersection, PickResult};
use blockbuilder_select::{Symmetry, SymmetrySelector};
use tracing::{debug, info};

use crate::gesture::ButtonPhase;

/// What a pointer event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Nothing under the pointer; the selector was hidden.
    Missed,
    /// Something was hit, but not the work grid.
    Ignored,
    /// The cursor moved to this cell without editing.
    Hovered(CellCoord),
    /// The current operation ran. `cells` counts every cell touched,
    /// once per primary or mirror selection covering it.
    Edited { cells: usize },
}

/// Result of importing a blockset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub stats: MergeStats,
    /// The lattice grew to hold the imported blockset.
    pub resized: bool,
}

/// Editor state behind the window layer.
pub struct Builder {
    config: EditorConfig,
    grid: VoxelGrid,
    selector: SymmetrySelector,
    mode: BlockMode,
    area_selection: bool,
    /// Lattice layer of the work plane.
    work_layer: i32,
    button: ButtonPhase,
}

impl Builder {
    /// Create an editor with an empty grid of the configured dimensions.
    pub fn new(config: EditorConfig) -> Result<Self> {
        config.validate()?;
        let dims = config.lattice()?;
        let mut selector = SymmetrySelector::new(dims, &config);
        selector.hide();
        info!(%dims, unit = config.unit, "Starting block editor");
        Ok(Self {
            grid: VoxelGrid::new(dims, &config),
            selector,
            mode: BlockMode::default(),
            area_selection: config.toggles.select,
            work_layer: 0,
            button: ButtonPhase::default(),
            config,
        })
    }

    /// Pointer moved; edits continue while the button is held.
    pub fn pointer_moved(&mut self, pick: &PickResult) -> Result<PickOutcome> {
        self.dispatch(pick)
    }

    /// Edit button pressed.
    pub fn pointer_pressed(&mut self, pick: &PickResult) -> Result<PickOutcome> {
        self.button.press();
        self.dispatch(pick)
    }

    /// Edit button released; commits an area drag.
    pub fn pointer_released(&mut self, pick: &PickResult) -> Result<PickOutcome> {
        self.button.release();
        self.dispatch(pick)
    }

    fn dispatch(&mut self, pick: &PickResult) -> Result<PickOutcome> {
        let outcome = self.handle_pick(pick);
        self.button.settle();
        outcome
    }

    fn handle_pick(&mut self, pick: &PickResult) -> Result<PickOutcome> {
        let intersection = Intersection::resolve(pick)?;
        if !intersection.exists() {
            self.cancel_drag_on_release();
            self.selector.hide();
            return Ok(PickOutcome::Missed);
        }
        if !intersection.has_element(ElementKind::Grid) {
            self.cancel_drag_on_release();
            return Ok(PickOutcome::Ignored);
        }

        let coords = self.pick_cell(intersection.point_for(ElementKind::Grid)?);
        self.selector.select(coords);
        self.selector.show();

        let cells = if self.area_selection {
            self.handle_area_pick(coords)?
        } else if self.button.is_pressed() {
            self.apply_to_selection()?
        } else {
            0
        };

        Ok(if cells > 0 {
            PickOutcome::Edited { cells }
        } else {
            PickOutcome::Hovered(coords)
        })
    }

    fn handle_area_pick(&mut self, coords: CellCoord) -> Result<usize> {
        if self.button.is_just_released() {
            let cells = match (self.selector.first_coords(), self.selector.last_coords()) {
                (Some(_), Some(_)) => self.apply_to_areas()?,
                (Some(_), None) => self.apply_to_selection()?,
                _ => 0,
            };
            self.selector.reset_area();
            return Ok(cells);
        }
        if self.button.is_pressed() {
            match self.selector.first_coords() {
                None => self.selector.set_first_coords(coords),
                Some(first) => {
                    self.selector.set_last_coords(coords)?;
                    self.selector.select_area((first, coords));
                }
            }
        }
        Ok(0)
    }

    /// A release off the grid ends the drag without editing.
    fn cancel_drag_on_release(&mut self) {
        if self.button.is_just_released() && self.selector.first_coords().is_some() {
            debug!("Drag released off the grid, discarding corners");
            self.selector.reset_area();
        }
    }

    fn apply_to_selection(&mut self) -> Result<usize> {
        let mut cells = 0;
        for coords in self.selector.selection() {
            match self.mode {
                BlockMode::Build => self.grid.add(coords)?,
                BlockMode::Delete => self.grid.remove(coords)?,
            }
            cells += 1;
        }
        debug!(mode = ?self.mode, cells, "Applied to selection");
        Ok(cells)
    }

    fn apply_to_areas(&mut self) -> Result<usize> {
        let mut cells = 0;
        for area in self.selector.selection_area() {
            cells += self.apply_region(area)?;
        }
        debug!(mode = ?self.mode, cells, "Applied to selected areas");
        Ok(cells)
    }

    fn apply_region(&mut self, area: Region) -> Result<usize> {
        match self.mode {
            BlockMode::Build => self.grid.add_region(area),
            BlockMode::Delete => self.grid.remove_region(area),
        }
    }

    /// Lattice cell under a grid hit point, clamped into the lattice.
    fn pick_cell(&self, point: glam::Vec3) -> CellCoord {
        let unit = self.config.unit;
        let local = point - self.config.origin();
        let coords = world_point_to_cell(local, unit, self.work_plane_height());
        let extent = self.grid.dimensions().cell_extent();
        CellCoord::new(
            coords.x.clamp(0, extent.x - 1),
            coords.y.clamp(0, extent.y - 1),
            coords.z.clamp(0, extent.z - 1),
        )
    }

    /// Move the work plane one layer up. Returns `false` at the top layer.
    pub fn raise_work_plane(&mut self) -> bool {
        if self.work_layer < self.top_layer() {
            self.work_layer += 1;
            true
        } else {
            false
        }
    }

    /// Move the work plane one layer down. Returns `false` at the floor.
    pub fn lower_work_plane(&mut self) -> bool {
        if self.work_layer > 0 {
            self.work_layer -= 1;
            true
        } else {
            false
        }
    }

    fn top_layer(&self) -> i32 {
        self.grid.dimensions().cell_extent().z - 1
    }

    #[must_use]
    pub const fn work_layer(&self) -> i32 {
        self.work_layer
    }

    /// Height of the work plane above the lattice origin.
    #[must_use]
    pub fn work_plane_height(&self) -> f32 {
        self.work_layer as f32 * self.config.unit
    }

    /// Clear every block and restore the default paint color.
    pub fn reset(&mut self) {
        self.grid.remove_all();
        self.grid
            .set_paint_color(self.config.block.color.to_array(), false);
        info!("Editor reset");
    }

    /// Merge an external blockset, growing the lattice if it does not fit.
    pub fn import<S: CellSource + ?Sized>(&mut self, source: &S) -> Result<ImportReport> {
        let current = self.grid.dimensions();
        let target = current.max(source.dimensions())?;
        if target == current {
            let stats = self.grid.merge_with_default(source);
            return Ok(ImportReport {
                stats,
                resized: false,
            });
        }

        self.resize(target);
        let stats = self.grid.merge_with_default(source);
        Ok(ImportReport {
            stats,
            resized: true,
        })
    }

    fn resize(&mut self, dims: LatticeDims) {
        info!(from = %self.grid.dimensions(), to = %dims, "Growing lattice for import");
        self.config.dimensions = dims.points();

        let mut grid = VoxelGrid::new(dims, &self.config);
        let paint = self.grid.paint_color();
        grid.merge_with_default(&self.grid);
        grid.set_paint_color(paint.to_array(), false);
        grid.set_merge_policy(self.grid.merge_policy());
        grid.set_show_edges(self.grid.show_edges());
        self.grid = grid;

        let symmetry = self.selector.symmetry();
        let mut selector = SymmetrySelector::new(dims, &self.config);
        selector.set_block_mode(self.mode);
        selector.set_symmetry(symmetry);
        selector.hide();
        self.selector = selector;
    }

    /// Copy of the current blockset.
    #[must_use]
    pub fn export(&self) -> GridSnapshot {
        self.grid.snapshot()
    }

    pub fn set_block_mode(&mut self, mode: BlockMode) {
        self.mode = mode;
        self.selector.set_block_mode(mode);
        info!(?mode, "Block mode changed");
    }

    pub fn set_symmetry(&mut self, symmetry: Symmetry) {
        self.selector.set_symmetry(symmetry);
    }

    /// Toggle two-corner area selection. Any drag in progress is dropped.
    pub fn set_area_selection(&mut self, enabled: bool) {
        self.area_selection = enabled;
        self.selector.reset_area();
    }

    /// Set the paint color; `is_integer_scale` reads channels as `[0, 255]`.
    pub fn set_block_color(&mut self, rgb: [f32; 3], is_integer_scale: bool) {
        self.grid.set_paint_color(rgb, is_integer_scale);
    }

    pub fn set_show_edges(&mut self, value: bool) {
        self.grid.set_show_edges(value);
    }

    /// Display color of the work grid for the current mode.
    #[must_use]
    pub const fn grid_color(&self) -> Color {
        self.config.grid.for_mode(self.mode)
    }

    #[must_use]
    pub const fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    #[must_use]
    pub const fn selector(&self) -> &SymmetrySelector {
        &self.selector
    }

    #[must_use]
    pub const fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub const fn block_mode(&self) -> BlockMode {
        self.mode
    }

    #[must_use]
    pub const fn area_selection(&self) -> bool {
        self.area_selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec3;

    fn builder(n: u32) -> Builder {
        Builder::new(EditorConfig::default().with_dimensions(n, n, n)).unwrap()
    }

    fn grid_pick(x: f32, y: f32) -> PickResult {
        PickResult::miss().with_hit(ElementKind::Grid, Vec3::new(x, y, 0.0))
    }

    #[test]
    fn hover_selects_without_editing() {
        let mut b = builder(8);
        let outcome = b.pointer_moved(&grid_pick(2.5, 3.5)).unwrap();
        assert_eq!(outcome, PickOutcome::Hovered(CellCoord::new(2, 3, 0)));
        assert!(b.selector().is_visible());
        assert_eq!(b.grid().visible_count(), 0);
    }

    #[test]
    fn miss_hides_selector() {
        let mut b = builder(8);
        b.pointer_moved(&grid_pick(1.0, 1.0)).unwrap();
        assert_eq!(
            b.pointer_moved(&PickResult::miss()).unwrap(),
            PickOutcome::Missed
        );
        assert!(!b.selector().is_visible());
    }

    #[test]
    fn non_grid_hit_is_ignored() {
        let mut b = builder(8);
        let pick = PickResult::miss().with_hit(ElementKind::Plane, Vec3::new(1.0, 1.0, -1.0));
        assert_eq!(b.pointer_pressed(&pick).unwrap(), PickOutcome::Ignored);
        assert_eq!(b.grid().visible_count(), 0);
    }

    #[test]
    fn edge_hit_is_clamped_into_lattice() {
        let mut b = builder(4);
        let outcome = b.pointer_moved(&grid_pick(3.0, 3.0)).unwrap();
        assert_eq!(outcome, PickOutcome::Hovered(CellCoord::new(2, 2, 0)));
    }

    #[test]
    fn work_plane_stays_in_lattice() {
        let mut b = builder(4);
        assert!(!b.lower_work_plane());
        assert!(b.raise_work_plane());
        assert!(b.raise_work_plane());
        assert!(!b.raise_work_plane());
        assert_eq!(b.work_layer(), 2);
        assert_relative_eq!(b.work_plane_height(), 2.0);
    }

    #[test]
    fn grid_color_follows_mode() {
        let mut b = builder(4);
        assert_eq!(b.grid_color(), b.config().grid.build);
        b.set_block_mode(BlockMode::Delete);
        assert_eq!(b.grid_color(), b.config().grid.delete);
    }
}
