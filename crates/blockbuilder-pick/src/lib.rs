//! Pick result resolution for BlockBuilder.
//!
//! The window layer casts the pointer ray and reports every surface it hit
//! as a [`PickResult`]. [`Intersection`] turns that list into a lookup by
//! [`ElementKind`] so edit dispatch can ask "was the work grid hit, and
//! where?".

use blockbuilder_core::{ElementKind, Error, Result};
use glam::Vec3;

/// Opaque identifier of a pickable surface, assigned by the window layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(pub u64);

/// Raw result of one pointer pick.
///
/// `surfaces` and `points` are index-aligned and ordered as the picker
/// reported them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickResult {
    pub hit: bool,
    pub surfaces: Vec<(ElementKind, SurfaceHandle)>,
    pub points: Vec<Vec3>,
}

impl PickResult {
    /// A pick that hit nothing.
    #[must_use]
    pub fn miss() -> Self {
        Self::default()
    }

    /// Append a hit surface, marking the pick as a hit.
    #[must_use]
    pub fn with_hit(mut self, kind: ElementKind, point: Vec3) -> Self {
        let handle = SurfaceHandle(self.surfaces.len() as u64);
        self.hit = true;
        self.surfaces.push((kind, handle));
        self.points.push(point);
        self
    }
}

/// Pick result resolved to one hit point per element kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intersection {
    any: bool,
    /// Index into `points` of the last surface of each kind.
    slots: [Option<usize>; ElementKind::COUNT],
    points: Vec<Vec3>,
}

impl Intersection {
    /// Resolve a pick. When a kind was hit more than once the latest
    /// surface in pick order wins.
    pub fn resolve(pick: &PickResult) -> Result<Self> {
        if !pick.hit {
            return Ok(Self::default());
        }
        if pick.surfaces.len() != pick.points.len() {
            return Err(Error::InvalidData(format!(
                "pick reported {} surfaces but {} points",
                pick.surfaces.len(),
                pick.points.len()
            )));
        }

        let mut slots = [None; ElementKind::COUNT];
        for (index, (kind, _)) in pick.surfaces.iter().enumerate() {
            slots[kind.index()] = Some(index);
        }
        Ok(Self {
            any: true,
            slots,
            points: pick.points.clone(),
        })
    }

    /// Whether the pick hit anything.
    #[must_use]
    pub const fn exists(&self) -> bool {
        self.any
    }

    /// Whether a surface of `kind` was hit.
    #[must_use]
    pub const fn has_element(&self, kind: ElementKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// Hit point on the surface of `kind`.
    pub fn point_for(&self, kind: ElementKind) -> Result<Vec3> {
        self.slots[kind.index()]
            .map(|index| self.points[index])
            .ok_or_else(|| Error::NotFound(format!("no {kind:?} surface in pick")))
    }
}
