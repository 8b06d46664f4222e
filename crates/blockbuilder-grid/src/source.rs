//! External cell content consumed by merges and grid construction.

use blockbuilder_core::{CellCoord, Color, Error, LatticeDims, Result};
use serde::{Deserialize, Serialize};

/// Anything exposing per-cell visibility and color addressed by linear index.
pub trait CellSource {
    /// Lattice the indices refer to.
    fn dimensions(&self) -> LatticeDims;

    /// Whether the cell at `index` holds a block.
    fn is_cell_visible(&self, index: usize) -> bool;

    /// Color stored for the cell at `index`.
    fn cell_color(&self, index: usize) -> Color;
}

/// Plain copy of a grid's cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    dimensions: LatticeDims,
    visible: Vec<bool>,
    colors: Vec<Color>,
}

impl GridSnapshot {
    /// Empty snapshot with every cell hidden and colored `fill`.
    #[must_use]
    pub fn empty(dimensions: LatticeDims, fill: Color) -> Self {
        let count = dimensions.cell_count();
        Self {
            dimensions,
            visible: vec![false; count],
            colors: vec![fill; count],
        }
    }

    /// Build a snapshot from raw arrays, which must both hold one entry per cell.
    pub fn from_parts(
        dimensions: LatticeDims,
        visible: Vec<bool>,
        colors: Vec<Color>,
    ) -> Result<Self> {
        let snapshot = Self {
            dimensions,
            visible,
            colors,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Arrays taken from a live grid, already sized to the lattice.
    pub(crate) fn from_grid_arrays(
        dimensions: LatticeDims,
        visible: Vec<bool>,
        colors: Vec<Color>,
    ) -> Self {
        Self {
            dimensions,
            visible,
            colors,
        }
    }

    /// Check both arrays match the lattice cell count.
    pub fn validate(&self) -> Result<()> {
        let count = self.dimensions.cell_count();
        if self.visible.len() != count || self.colors.len() != count {
            return Err(Error::InvalidData(format!(
                "snapshot of lattice {} needs {count} cells, got {} visibility / {} color entries",
                self.dimensions,
                self.visible.len(),
                self.colors.len()
            )));
        }
        Ok(())
    }

    /// Mark a cell visible with the given color.
    pub fn place(&mut self, coord: CellCoord, color: Color) -> Result<()> {
        let index = self.dimensions.checked_index(coord)?;
        self.visible[index] = true;
        self.colors[index] = color;
        Ok(())
    }
}

impl CellSource for GridSnapshot {
    fn dimensions(&self) -> LatticeDims {
        self.dimensions
    }

    fn is_cell_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    fn cell_color(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_checks_lengths() {
        let dims = LatticeDims::new(3, 3, 3).unwrap();
        assert!(GridSnapshot::from_parts(dims, vec![false; 8], vec![Color::WHITE; 8]).is_ok());
        assert!(matches!(
            GridSnapshot::from_parts(dims, vec![false; 7], vec![Color::WHITE; 8]),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn place_marks_cell() {
        let dims = LatticeDims::new(3, 3, 3).unwrap();
        let mut snapshot = GridSnapshot::empty(dims, Color::BLACK);
        snapshot.place(CellCoord::new(1, 1, 1), Color::WHITE).unwrap();

        assert!(snapshot.is_cell_visible(7));
        assert_eq!(snapshot.cell_color(7), Color::WHITE);
        assert!(!snapshot.is_cell_visible(0));
        assert!(snapshot.place(CellCoord::new(2, 0, 0), Color::WHITE).is_err());
    }
}
