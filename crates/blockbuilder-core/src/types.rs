//! Core editor types.

use crate::constants::COLOR_CHANNEL_MAX;
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Linear RGB color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a color from unit-scale channels
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from channels in `[0, 255]` when `is_integer_scale`,
    /// otherwise from channels already in `[0, 1]`.
    #[must_use]
    pub fn from_scaled(rgb: [f32; 3], is_integer_scale: bool) -> Self {
        let [r, g, b] = rgb;
        if is_integer_scale {
            Self::new(
                r / COLOR_CHANNEL_MAX,
                g / COLOR_CHANNEL_MAX,
                b / COLOR_CHANNEL_MAX,
            )
        } else {
            Self::new(r, g, b)
        }
    }

    /// Create a color from 8-bit channels
    #[must_use]
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::from_scaled(rgb.map(f32::from), true)
    }

    /// Quantize to 8-bit channels, clamping out-of-range input
    #[must_use]
    pub fn to_rgb8(self) -> [u8; 3] {
        self.to_array()
            .map(|c| (c.clamp(0.0, 1.0) * COLOR_CHANNEL_MAX).round() as u8)
    }

    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f32; 3]> for Color {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Edit operation applied by the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockMode {
    /// Place blocks
    #[default]
    Build,
    /// Remove blocks
    Delete,
}

/// Kind of scene element a pickable surface belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ElementKind {
    /// Horizontal work plane the user edits on
    Grid = 0,
    /// Ground plane under the lattice
    Plane = 1,
    /// Cursor cell indicator
    Selector = 2,
    /// Placed blocks
    Block = 3,
}

impl ElementKind {
    /// Number of element kinds
    pub const COUNT: usize = 4;

    /// All kinds in index order
    pub const ALL: [Self; Self::COUNT] = [Self::Grid, Self::Plane, Self::Selector, Self::Block];

    /// Stable slot index of this kind
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}
