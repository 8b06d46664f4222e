//! Lattice coordinate systems.
//!
//! A lattice of `(Nx, Ny, Nz)` points holds `(Nx-1)·(Ny-1)·(Nz-1)` cells,
//! stored row-major with X varying fastest, then Y, then Z.

use crate::constants::{MAX_DIMENSION, MIN_DIMENSION};
use crate::error::{Error, Result};
use bytemuck::{Pod, Zeroable};
use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Integer coordinate of a single cell.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CellCoord {
    /// Create a new cell coordinate
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Componentwise minimum
    #[inline]
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Componentwise maximum
    #[inline]
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Convert to glam IVec3
    #[inline]
    #[must_use]
    pub const fn to_ivec3(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }

    /// Convert to floating point Vec3
    #[inline]
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        self.to_ivec3().as_vec3()
    }
}

impl From<IVec3> for CellCoord {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<[i32; 3]> for CellCoord {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Lattice point counts per axis, fixed for the lifetime of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u32; 3]", into = "[u32; 3]")]
pub struct LatticeDims {
    nx: u32,
    ny: u32,
    nz: u32,
}

impl LatticeDims {
    /// Create lattice dimensions.
    ///
    /// Every axis needs between two and `i32::MAX` points, and the total
    /// cell count must fit in `usize`.
    pub fn new(nx: u32, ny: u32, nz: u32) -> Result<Self> {
        if nx < MIN_DIMENSION || ny < MIN_DIMENSION || nz < MIN_DIMENSION {
            return Err(Error::InvalidData(format!(
                "lattice dimensions ({nx}, {ny}, {nz}) must be at least {MIN_DIMENSION} per axis"
            )));
        }
        if [nx, ny, nz].iter().any(|&n| n > MAX_DIMENSION) {
            return Err(Error::InvalidData(format!(
                "lattice dimensions ({nx}, {ny}, {nz}) exceed {MAX_DIMENSION} per axis"
            )));
        }
        (nx as usize - 1)
            .checked_mul(ny as usize - 1)
            .and_then(|n| n.checked_mul(nz as usize - 1))
            .ok_or_else(|| {
                Error::InvalidData(format!(
                    "lattice dimensions ({nx}, {ny}, {nz}) hold too many cells"
                ))
            })?;
        Ok(Self { nx, ny, nz })
    }

    /// Lattice points as `[Nx, Ny, Nz]`
    #[inline]
    #[must_use]
    pub const fn points(self) -> [u32; 3] {
        [self.nx, self.ny, self.nz]
    }

    /// Cells per axis, `(Nx-1, Ny-1, Nz-1)`
    #[inline]
    #[must_use]
    pub const fn cell_extent(self) -> IVec3 {
        IVec3::new(
            self.nx as i32 - 1,
            self.ny as i32 - 1,
            self.nz as i32 - 1,
        )
    }

    /// Total number of cells
    #[inline]
    #[must_use]
    pub const fn cell_count(self) -> usize {
        (self.nx as usize - 1) * (self.ny as usize - 1) * (self.nz as usize - 1)
    }

    /// Per-axis strides of the linear index, `(1, Nx-1, (Nx-1)(Ny-1))`
    #[inline]
    #[must_use]
    pub const fn strides(self) -> [usize; 3] {
        let sx = self.nx as usize - 1;
        let sy = self.ny as usize - 1;
        [1, sx, sx * sy]
    }

    /// Check whether a coordinate addresses a cell of this lattice
    #[inline]
    #[must_use]
    pub const fn contains(self, coord: CellCoord) -> bool {
        let extent = self.cell_extent();
        coord.x >= 0
            && coord.y >= 0
            && coord.z >= 0
            && coord.x < extent.x
            && coord.y < extent.y
            && coord.z < extent.z
    }

    /// Linear index of `coord`, or `OutOfBounds` if it lies outside the lattice
    pub fn checked_index(self, coord: CellCoord) -> Result<usize> {
        if self.contains(coord) {
            Ok(cell_index(coord, self))
        } else {
            Err(Error::OutOfBounds(format!(
                "cell {coord} outside lattice {self}"
            )))
        }
    }

    /// Coordinate of linear `index`, or `OutOfBounds` past the last cell
    pub fn checked_coord(self, index: usize) -> Result<CellCoord> {
        if index < self.cell_count() {
            Ok(cell_coord(index, self))
        } else {
            Err(Error::OutOfBounds(format!(
                "cell index {index} outside lattice {self} ({} cells)",
                self.cell_count()
            )))
        }
    }

    /// Componentwise maximum of two lattices, which may itself be too large.
    pub fn max(self, other: Self) -> Result<Self> {
        Self::new(
            self.nx.max(other.nx),
            self.ny.max(other.ny),
            self.nz.max(other.nz),
        )
    }

    /// Region covering every cell of the lattice
    #[must_use]
    pub fn full_region(self) -> Region {
        let extent = self.cell_extent();
        Region::new(
            CellCoord::default(),
            CellCoord::new(extent.x - 1, extent.y - 1, extent.z - 1),
        )
    }
}

impl TryFrom<[u32; 3]> for LatticeDims {
    type Error = Error;

    fn try_from([nx, ny, nz]: [u32; 3]) -> Result<Self> {
        Self::new(nx, ny, nz)
    }
}

impl From<LatticeDims> for [u32; 3] {
    fn from(dims: LatticeDims) -> Self {
        dims.points()
    }
}

impl std::fmt::Display for LatticeDims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.nx, self.ny, self.nz)
    }
}

/// Linear index of a cell. Bounds are the caller's responsibility.
#[inline]
#[must_use]
pub const fn cell_index(coord: CellCoord, dims: LatticeDims) -> usize {
    let [_, sy, sz] = dims.strides();
    coord.x as usize + coord.y as usize * sy + coord.z as usize * sz
}

/// Inverse of [`cell_index`].
#[inline]
#[must_use]
pub const fn cell_coord(index: usize, dims: LatticeDims) -> CellCoord {
    let [_, sy, sz] = dims.strides();
    let z = index / sz;
    let rem = index % sz;
    let y = rem / sy;
    let x = rem % sy;
    CellCoord::new(x as i32, y as i32, z as i32)
}

/// Cell under a world-space point on the active work plane.
///
/// X and Y follow the point; Z is pinned to the work plane at `floor_z`
/// so picks grazing the top face of a lower layer still edit this one.
#[inline]
#[must_use]
pub fn world_point_to_cell(point: Vec3, unit: f32, floor_z: f32) -> CellCoord {
    CellCoord::new(
        (point.x / unit).floor() as i32,
        (point.y / unit).floor() as i32,
        (floor_z / unit).round() as i32,
    )
}

/// Inclusive axis-aligned box of cells, always stored as `(min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    min: CellCoord,
    max: CellCoord,
}

impl Region {
    /// Create a region from two corners given in any order
    #[must_use]
    pub fn new(a: CellCoord, b: CellCoord) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Region holding a single cell
    #[must_use]
    pub const fn single(coord: CellCoord) -> Self {
        Self {
            min: coord,
            max: coord,
        }
    }

    #[inline]
    #[must_use]
    pub const fn min(&self) -> CellCoord {
        self.min
    }

    #[inline]
    #[must_use]
    pub const fn max(&self) -> CellCoord {
        self.max
    }

    /// Cells spanned per axis, `max - min + 1`
    #[inline]
    #[must_use]
    pub fn extent(&self) -> IVec3 {
        self.max.to_ivec3() - self.min.to_ivec3() + IVec3::ONE
    }

    /// Number of cells in the region
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let e = self.extent();
        e.x as usize * e.y as usize * e.z as usize
    }

    /// Check if a coordinate lies inside the region
    #[must_use]
    pub const fn contains(&self, coord: CellCoord) -> bool {
        coord.x >= self.min.x
            && coord.x <= self.max.x
            && coord.y >= self.min.y
            && coord.y <= self.max.y
            && coord.z >= self.min.z
            && coord.z <= self.max.z
    }

    /// Iterate every cell of the region exactly once, X fastest
    pub fn iter(&self) -> impl Iterator<Item = CellCoord> {
        let (min, max) = (self.min, self.max);
        (min.z..=max.z).flat_map(move |z| {
            (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| CellCoord::new(x, y, z)))
        })
    }
}

impl From<(CellCoord, CellCoord)> for Region {
    fn from((a, b): (CellCoord, CellCoord)) -> Self {
        Self::new(a, b)
    }
}
