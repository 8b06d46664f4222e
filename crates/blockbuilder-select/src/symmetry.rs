//! Mirrored selection.

use blockbuilder_core::{Aabb, BlockMode, CellCoord, EditorConfig, LatticeDims, Region, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::selector::{AreaSelector, SelectionState};

/// Which mirrors replay the primary selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symmetry {
    #[default]
    None,
    X,
    Y,
    XY,
}

impl Symmetry {
    /// Mirrors active under this symmetry, in selection order.
    #[must_use]
    pub const fn mirrors(self) -> &'static [Mirror] {
        match self {
            Self::None => &[],
            Self::X => &[Mirror::X],
            Self::Y => &[Mirror::Y],
            Self::XY => &[Mirror::X, Mirror::Y, Mirror::XY],
        }
    }

    #[must_use]
    pub fn is_active(self, mirror: Mirror) -> bool {
        self.mirrors().contains(&mirror)
    }
}

/// One mirrored copy of the primary selection.
///
/// The names follow the symmetry they belong to, not the flipped axis:
/// `X` symmetry flips the second (Y) coordinate, `Y` symmetry flips the
/// first (X) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mirror {
    X,
    Y,
    XY,
}

impl Mirror {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::XY];

    /// Mirror a cell across the lattice midline(s).
    ///
    /// A flipped axis maps `c` to `N - c - 2`, which keeps `0..=N-2` inside
    /// itself.
    #[must_use]
    pub const fn apply(self, coords: CellCoord, dims: LatticeDims) -> CellCoord {
        let [nx, ny, _] = dims.points();
        let flip_x = CellCoord::new(nx as i32 - coords.x - 2, coords.y, coords.z);
        let flip_y = CellCoord::new(coords.x, ny as i32 - coords.y - 2, coords.z);
        match self {
            Self::X => flip_y,
            Self::Y => flip_x,
            Self::XY => CellCoord::new(flip_x.x, flip_y.y, coords.z),
        }
    }

    /// Mirror both corners of a region.
    #[must_use]
    pub fn apply_region(self, region: Region, dims: LatticeDims) -> Region {
        Region::new(self.apply(region.min(), dims), self.apply(region.max(), dims))
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Primary area selector plus mirrors kept in lock-step.
///
/// Mirrors of inactive symmetries keep whatever they last held but are
/// never reported or shown.
#[derive(Debug, Clone)]
pub struct SymmetrySelector {
    primary: AreaSelector,
    /// Indexed by [`Mirror`].
    mirrors: [AreaSelector; 3],
    symmetry: Symmetry,
    dims: LatticeDims,
}

impl SymmetrySelector {
    #[must_use]
    pub fn new(dims: LatticeDims, config: &EditorConfig) -> Self {
        Self {
            primary: AreaSelector::new(config),
            mirrors: [
                AreaSelector::new(config),
                AreaSelector::new(config),
                AreaSelector::new(config),
            ],
            symmetry: Symmetry::None,
            dims,
        }
    }

    #[must_use]
    pub const fn dimensions(&self) -> LatticeDims {
        self.dims
    }

    #[must_use]
    pub const fn symmetry(&self) -> Symmetry {
        self.symmetry
    }

    /// Change the symmetry.
    ///
    /// Newly active mirrors are brought up to date with the primary so they
    /// never report a stale cell.
    pub fn set_symmetry(&mut self, symmetry: Symmetry) {
        self.symmetry = symmetry;
        let visible = self.primary.is_visible();
        let coords = self.primary.selection();
        let area = self.primary.selection_area();

        for mirror in Mirror::ALL {
            let dims = self.dims;
            let selector = &mut self.mirrors[mirror.slot()];
            if !symmetry.is_active(mirror) {
                selector.hide();
                continue;
            }
            match area {
                Some(area) => selector.select_area(mirror.apply_region(area, dims)),
                None => selector.reset_area(),
            }
            if let Some(coords) = coords {
                selector.select(mirror.apply(coords, dims));
            }
            if visible {
                selector.show();
            } else {
                selector.hide();
            }
        }
        debug!(?symmetry, "Symmetry changed");
    }

    /// The primary selector.
    #[must_use]
    pub const fn primary(&self) -> &AreaSelector {
        &self.primary
    }

    /// A mirror selector, whether or not it is active.
    #[must_use]
    pub const fn mirror(&self, mirror: Mirror) -> &AreaSelector {
        &self.mirrors[mirror.slot()]
    }

    pub fn select(&mut self, coords: CellCoord) {
        self.primary.select(coords);
        for &mirror in self.symmetry.mirrors() {
            self.mirrors[mirror.slot()].select(mirror.apply(coords, self.dims));
        }
    }

    pub fn select_area(&mut self, area: impl Into<Region>) {
        let area = area.into();
        self.primary.select_area(area);
        for &mirror in self.symmetry.mirrors() {
            self.mirrors[mirror.slot()].select_area(mirror.apply_region(area, self.dims));
        }
    }

    pub fn reset_area(&mut self) {
        self.primary.reset_area();
        for selector in &mut self.mirrors {
            selector.reset_area();
        }
    }

    pub fn set_first_coords(&mut self, coords: CellCoord) {
        self.primary.set_first_coords(coords);
    }

    pub fn set_last_coords(&mut self, coords: CellCoord) -> Result<()> {
        self.primary.set_last_coords(coords)
    }

    #[must_use]
    pub const fn first_coords(&self) -> Option<CellCoord> {
        self.primary.first_coords()
    }

    #[must_use]
    pub const fn last_coords(&self) -> Option<CellCoord> {
        self.primary.last_coords()
    }

    #[must_use]
    pub const fn state(&self) -> SelectionState {
        self.primary.state()
    }

    pub fn show(&mut self) {
        self.primary.show();
        for &mirror in self.symmetry.mirrors() {
            self.mirrors[mirror.slot()].show();
        }
    }

    pub fn hide(&mut self) {
        self.primary.hide();
        for selector in &mut self.mirrors {
            selector.hide();
        }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.primary.is_visible()
    }

    pub fn set_block_mode(&mut self, mode: BlockMode) {
        self.primary.set_block_mode(mode);
        for selector in &mut self.mirrors {
            selector.set_block_mode(mode);
        }
    }

    /// Primary cell followed by each active mirror's cell.
    #[must_use]
    pub fn selection(&self) -> Vec<CellCoord> {
        self.active()
            .filter_map(AreaSelector::selection)
            .collect()
    }

    /// Primary region followed by each active mirror's region.
    #[must_use]
    pub fn selection_area(&self) -> Vec<Region> {
        self.active()
            .filter_map(AreaSelector::selection_area)
            .collect()
    }

    /// Footprints of the visible members.
    #[must_use]
    pub fn active_footprints(&self) -> Vec<Aabb> {
        self.active()
            .filter(|s| s.is_visible())
            .filter_map(AreaSelector::footprint)
            .collect()
    }

    fn active(&self) -> impl Iterator<Item = &AreaSelector> {
        std::iter::once(&self.primary).chain(
            self.symmetry
                .mirrors()
                .iter()
                .map(|mirror| &self.mirrors[mirror.slot()]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32, z: i32) -> CellCoord {
        CellCoord::new(x, y, z)
    }

    fn dims(n: u32) -> LatticeDims {
        LatticeDims::new(n, n, n).unwrap()
    }

    fn selector(n: u32, symmetry: Symmetry) -> SymmetrySelector {
        let mut selector = SymmetrySelector::new(dims(n), &EditorConfig::default());
        selector.set_symmetry(symmetry);
        selector
    }

    #[test]
    fn mirror_formula_at_origin() {
        let dims = dims(8);
        assert_eq!(Mirror::X.apply(c(0, 0, 0), dims), c(0, 6, 0));
        assert_eq!(Mirror::Y.apply(c(0, 0, 0), dims), c(6, 0, 0));
        assert_eq!(Mirror::XY.apply(c(0, 0, 0), dims), c(6, 6, 0));
    }

    #[test]
    fn mirror_formula_at_far_corner() {
        let dims = dims(8);
        assert_eq!(Mirror::X.apply(c(6, 6, 0), dims), c(6, 0, 0));
        assert_eq!(Mirror::Y.apply(c(6, 6, 0), dims), c(0, 6, 0));
        assert_eq!(Mirror::XY.apply(c(6, 6, 0), dims), c(0, 0, 0));
    }

    #[test]
    fn mirrors_stay_in_bounds_and_are_involutions() {
        let dims = LatticeDims::new(8, 5, 3).unwrap();
        for coord in dims.full_region().iter() {
            for mirror in Mirror::ALL {
                let mirrored = mirror.apply(coord, dims);
                assert!(dims.contains(mirrored), "{mirror:?} of {coord} -> {mirrored}");
                assert_eq!(mirror.apply(mirrored, dims), coord);
                assert_eq!(mirrored.z, coord.z);
            }
        }
    }

    #[test]
    fn selection_order_follows_symmetry() {
        let mut s = selector(8, Symmetry::None);
        s.select(c(1, 2, 3));
        assert_eq!(s.selection(), vec![c(1, 2, 3)]);

        let mut s = selector(8, Symmetry::X);
        s.select(c(1, 2, 3));
        assert_eq!(s.selection(), vec![c(1, 2, 3), c(1, 4, 3)]);

        let mut s = selector(8, Symmetry::Y);
        s.select(c(1, 2, 3));
        assert_eq!(s.selection(), vec![c(1, 2, 3), c(5, 2, 3)]);

        let mut s = selector(8, Symmetry::XY);
        s.select(c(1, 2, 3));
        assert_eq!(
            s.selection(),
            vec![c(1, 2, 3), c(1, 4, 3), c(5, 2, 3), c(5, 4, 3)]
        );
    }

    #[test]
    fn empty_selection_before_pick() {
        let s = selector(8, Symmetry::XY);
        assert!(s.selection().is_empty());
        assert!(s.selection_area().is_empty());
    }

    #[test]
    fn area_mirrors_keep_size() {
        for symmetry in [Symmetry::None, Symmetry::X, Symmetry::Y, Symmetry::XY] {
            let mut s = selector(3, symmetry);
            let area = Region::new(c(0, 0, 0), c(1, 1, 1));
            s.select_area(area);

            let areas = s.selection_area();
            assert_eq!(areas[0], area);
            assert_eq!(areas.len(), 1 + symmetry.mirrors().len());
            for mirrored in &areas {
                assert_eq!(mirrored.extent(), area.extent());
            }
        }
    }

    #[test]
    fn mirrored_area_is_normalized() {
        let mut s = selector(8, Symmetry::Y);
        s.select_area((c(0, 1, 0), c(2, 3, 0)));
        let areas = s.selection_area();
        assert_eq!(areas[1], Region::new(c(4, 1, 0), c(6, 3, 0)));
        assert_eq!(areas[1].min(), c(4, 1, 0));
    }

    #[test]
    fn reset_clears_every_member() {
        let mut s = selector(8, Symmetry::XY);
        s.set_first_coords(c(0, 0, 0));
        s.set_last_coords(c(2, 2, 0)).unwrap();
        s.select_area((c(0, 0, 0), c(2, 2, 0)));
        assert_eq!(s.state(), SelectionState::DragSecond);

        s.reset_area();
        assert_eq!(s.first_coords(), None);
        assert!(s.selection_area().is_empty());
        for mirror in Mirror::ALL {
            assert_eq!(s.mirror(mirror).selection_area(), None);
        }
    }

    #[test]
    fn show_only_active_mirrors() {
        let mut s = selector(8, Symmetry::X);
        s.select(c(0, 0, 0));
        s.show();
        assert!(s.primary().is_visible());
        assert!(s.mirror(Mirror::X).is_visible());
        assert!(!s.mirror(Mirror::Y).is_visible());
        assert!(!s.mirror(Mirror::XY).is_visible());
        assert_eq!(s.active_footprints().len(), 2);

        s.hide();
        assert!(Mirror::ALL.iter().all(|m| !s.mirror(*m).is_visible()));
        assert!(s.active_footprints().is_empty());
    }

    #[test]
    fn switching_symmetry_resyncs_mirrors() {
        let mut s = selector(8, Symmetry::None);
        s.select(c(2, 1, 0));
        s.show();

        s.set_symmetry(Symmetry::XY);
        assert_eq!(
            s.selection(),
            vec![c(2, 1, 0), c(2, 5, 0), c(4, 1, 0), c(4, 5, 0)]
        );
        assert!(s.mirror(Mirror::XY).is_visible());

        s.set_symmetry(Symmetry::Y);
        assert!(!s.mirror(Mirror::X).is_visible());
        assert_eq!(s.selection(), vec![c(2, 1, 0), c(4, 1, 0)]);
    }

    #[test]
    fn inactive_mirrors_are_not_updated() {
        let mut s = selector(8, Symmetry::X);
        s.select(c(0, 0, 0));
        assert_eq!(s.mirror(Mirror::Y).selection(), None);
    }

    #[test]
    fn block_mode_reaches_mirrors() {
        let mut s = selector(8, Symmetry::None);
        s.set_block_mode(BlockMode::Delete);
        for mirror in Mirror::ALL {
            assert_eq!(s.mirror(mirror).cursor().block_mode(), BlockMode::Delete);
        }
    }
}
