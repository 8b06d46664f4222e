//! Cursor and area selectors.

use blockbuilder_core::config::ModeColors;
use blockbuilder_core::{Aabb, BlockMode, CellCoord, Color, EditorConfig, Error, Region, Result};
use glam::{IVec3, Vec3};

/// Where an area selector is in a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Nothing picked yet.
    Idle,
    /// Cursor follows the pointer, no drag in progress.
    Hovering,
    /// First corner captured.
    DragFirst,
    /// Both corners captured and the region computed.
    DragSecond,
}

/// Cursor cell indicator.
///
/// Tracks the last resolved cell and the world-space box drawn around it.
#[derive(Debug, Clone)]
pub struct Selector {
    coords: Option<CellCoord>,
    /// Cells covered by the footprint per axis.
    extent: IVec3,
    origin: Vec3,
    unit: f32,
    colors: ModeColors,
    mode: BlockMode,
    visible: bool,
}

impl Selector {
    /// Create a hidden selector with no active cell.
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            coords: None,
            extent: IVec3::ONE,
            origin: config.origin(),
            unit: config.unit,
            colors: config.selector,
            mode: BlockMode::default(),
            visible: false,
        }
    }

    /// Move the cursor to `coords`.
    pub fn select(&mut self, coords: CellCoord) {
        self.coords = Some(coords);
    }

    /// Current cursor cell.
    #[must_use]
    pub const fn selection(&self) -> Option<CellCoord> {
        self.coords
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_block_mode(&mut self, mode: BlockMode) {
        self.mode = mode;
    }

    #[must_use]
    pub const fn block_mode(&self) -> BlockMode {
        self.mode
    }

    /// Display color for the current block mode.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.colors.for_mode(self.mode)
    }

    /// Cells spanned by the footprint per axis.
    #[must_use]
    pub const fn extent(&self) -> IVec3 {
        self.extent
    }

    /// World-space box drawn for the selection, once a cell is selected.
    #[must_use]
    pub fn footprint(&self) -> Option<Aabb> {
        self.coords.map(|coords| {
            Aabb::from_origin_size(
                self.origin + coords.to_vec3() * self.unit,
                self.extent.as_vec3() * self.unit,
            )
        })
    }

    fn set_extent(&mut self, extent: IVec3) {
        self.extent = extent;
    }
}

/// Selector with a two-corner rectangular region.
#[derive(Debug, Clone)]
pub struct AreaSelector {
    cursor: Selector,
    area: Option<Region>,
    first: Option<CellCoord>,
    last: Option<CellCoord>,
}

impl AreaSelector {
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            cursor: Selector::new(config),
            area: None,
            first: None,
            last: None,
        }
    }

    /// The underlying cursor.
    #[must_use]
    pub const fn cursor(&self) -> &Selector {
        &self.cursor
    }

    pub fn select(&mut self, coords: CellCoord) {
        self.cursor.select(coords);
    }

    #[must_use]
    pub const fn selection(&self) -> Option<CellCoord> {
        self.cursor.selection()
    }

    pub fn show(&mut self) {
        self.cursor.show();
    }

    pub fn hide(&mut self) {
        self.cursor.hide();
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.cursor.is_visible()
    }

    pub fn set_block_mode(&mut self, mode: BlockMode) {
        self.cursor.set_block_mode(mode);
    }

    #[must_use]
    pub fn footprint(&self) -> Option<Aabb> {
        self.cursor.footprint()
    }

    /// Select the box spanned by two corners given in any order.
    ///
    /// The cursor moves to the minimum corner and the footprint grows to
    /// cover the whole region. A single-cell region is valid.
    pub fn select_area(&mut self, area: impl Into<Region>) {
        let area = area.into();
        self.area = Some(area);
        self.cursor.select(area.min());
        self.cursor.set_extent(area.extent());
    }

    /// Drop the drag corners and the region, shrinking the footprint back
    /// to one cell. Safe to call with no drag in progress.
    pub fn reset_area(&mut self) {
        self.cursor.set_extent(IVec3::ONE);
        self.area = None;
        self.first = None;
        self.last = None;
    }

    /// Capture the corner where the drag started.
    pub fn set_first_coords(&mut self, coords: CellCoord) {
        self.first = Some(coords);
    }

    /// Capture the corner under the pointer during the drag.
    ///
    /// Fails with `InvalidDragState` if no first corner was captured.
    pub fn set_last_coords(&mut self, coords: CellCoord) -> Result<()> {
        if self.first.is_none() {
            return Err(Error::InvalidDragState(format!(
                "last corner {coords} captured before the first corner"
            )));
        }
        self.last = Some(coords);
        Ok(())
    }

    #[must_use]
    pub const fn first_coords(&self) -> Option<CellCoord> {
        self.first
    }

    #[must_use]
    pub const fn last_coords(&self) -> Option<CellCoord> {
        self.last
    }

    /// Current region, normalized to `(min, max)`.
    #[must_use]
    pub const fn selection_area(&self) -> Option<Region> {
        self.area
    }

    #[must_use]
    pub const fn state(&self) -> SelectionState {
        match (self.first, self.area, self.cursor.coords) {
            (Some(_), Some(_), _) => SelectionState::DragSecond,
            (Some(_), None, _) => SelectionState::DragFirst,
            (None, _, Some(_)) => SelectionState::Hovering,
            (None, _, None) => SelectionState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32, z: i32) -> CellCoord {
        CellCoord::new(x, y, z)
    }

    #[test]
    fn selector_starts_empty() {
        let selector = Selector::new(&EditorConfig::default());
        assert_eq!(selector.selection(), None);
        assert!(selector.footprint().is_none());
        assert!(!selector.is_visible());
    }

    #[test]
    fn select_moves_footprint() {
        let config = EditorConfig::default().with_unit(2.0);
        let mut selector = Selector::new(&config);
        selector.select(c(1, 2, 3));
        assert_eq!(selector.selection(), Some(c(1, 2, 3)));

        let footprint = selector.footprint().unwrap();
        assert_eq!(footprint.min, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(footprint.size(), Vec3::splat(2.0));
    }

    #[test]
    fn color_follows_block_mode() {
        let config = EditorConfig::default();
        let mut selector = Selector::new(&config);
        assert_eq!(selector.color(), config.selector.build);
        selector.set_block_mode(BlockMode::Delete);
        assert_eq!(selector.color(), config.selector.delete);
    }

    #[test]
    fn area_is_order_independent() {
        let config = EditorConfig::default();
        let mut a = AreaSelector::new(&config);
        let mut b = AreaSelector::new(&config);
        a.select_area((c(2, 2, 2), c(0, 0, 0)));
        b.select_area((c(0, 0, 0), c(2, 2, 2)));

        let expected = Region::new(c(0, 0, 0), c(2, 2, 2));
        assert_eq!(a.selection_area(), Some(expected));
        assert_eq!(b.selection_area(), Some(expected));
        assert_eq!(a.selection(), Some(c(0, 0, 0)));
        assert_eq!(a.cursor().extent(), IVec3::splat(3));
    }

    #[test]
    fn degenerate_area_is_one_cell() {
        let mut selector = AreaSelector::new(&EditorConfig::default());
        selector.select_area((c(1, 1, 0), c(1, 1, 0)));
        let area = selector.selection_area().unwrap();
        assert_eq!(area.cell_count(), 1);
        assert_eq!(selector.cursor().extent(), IVec3::ONE);
    }

    #[test]
    fn last_before_first_is_rejected() {
        let mut selector = AreaSelector::new(&EditorConfig::default());
        assert!(matches!(
            selector.set_last_coords(c(1, 1, 1)),
            Err(Error::InvalidDragState(_))
        ));
        assert_eq!(selector.last_coords(), None);
    }

    #[test]
    fn drag_walks_state_machine() {
        let mut selector = AreaSelector::new(&EditorConfig::default());
        assert_eq!(selector.state(), SelectionState::Idle);

        selector.select(c(0, 0, 0));
        assert_eq!(selector.state(), SelectionState::Hovering);

        selector.set_first_coords(c(0, 0, 0));
        assert_eq!(selector.state(), SelectionState::DragFirst);

        selector.set_last_coords(c(3, 1, 0)).unwrap();
        selector.select_area((c(0, 0, 0), c(3, 1, 0)));
        assert_eq!(selector.state(), SelectionState::DragSecond);
        assert_eq!(selector.cursor().extent(), IVec3::new(4, 2, 1));

        selector.reset_area();
        assert_eq!(selector.state(), SelectionState::Hovering);
        assert_eq!(selector.first_coords(), None);
        assert_eq!(selector.last_coords(), None);
        assert_eq!(selector.selection_area(), None);
        assert_eq!(selector.cursor().extent(), IVec3::ONE);
    }

    #[test]
    fn reset_without_drag_is_harmless() {
        let mut selector = AreaSelector::new(&EditorConfig::default());
        selector.reset_area();
        assert_eq!(selector.state(), SelectionState::Idle);
    }
}
