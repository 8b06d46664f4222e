//! Editor configuration.
//!
//! Every grid and selector is built from an explicit [`EditorConfig`] value,
//! so independent grids (for example the old and new grid during an
//! import-resize) can carry different settings.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::coords::LatticeDims;
use crate::error::{Error, Result};
use crate::types::{BlockMode, Color};

/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "BLOCKBUILDER_CONFIG";

/// File name used under the home directory.
pub const CONFIG_FILE_NAME: &str = "blockbuilder.json";

/// Rule deciding which grid wins when both have a cell visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
    /// Imported content overwrites existing cells.
    #[default]
    External,
    /// Existing visible cells are kept.
    Internal,
}

/// Colors of an element in each block mode.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModeColors {
    pub build: Color,
    pub delete: Color,
}

impl ModeColors {
    #[must_use]
    pub const fn for_mode(&self, mode: BlockMode) -> Color {
        match mode {
            BlockMode::Build => self.build,
            BlockMode::Delete => self.delete,
        }
    }
}

/// Block grid settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockConfig {
    /// Default paint color
    pub color: Color,
    pub edge_color: Color,
    pub merge_policy: MergePolicy,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            color: Color::new(0.7, 0.7, 0.7),
            edge_color: Color::BLACK,
            merge_policy: MergePolicy::External,
        }
    }
}

/// Initial state of the editor toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggles {
    /// Two-corner area selection
    pub select: bool,
    /// Draw block edges
    pub edges: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            select: false,
            edges: true,
        }
    }
}

/// Complete editor configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Edge length of one cell in world units
    pub unit: f32,
    /// World position of lattice point `(0, 0, 0)`
    pub origin: [f32; 3],
    /// Initial lattice points per axis
    pub dimensions: [u32; 3],
    pub block: BlockConfig,
    pub grid: ModeColors,
    pub selector: ModeColors,
    pub toggles: Toggles,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let dim = crate::constants::DEFAULT_DIMENSION;
        Self {
            unit: 1.0,
            origin: [0.0; 3],
            dimensions: [dim; 3],
            block: BlockConfig::default(),
            grid: ModeColors {
                build: Color::new(0.05, 0.05, 0.35),
                delete: Color::new(0.35, 0.05, 0.05),
            },
            selector: ModeColors {
                build: Color::new(0.3, 0.3, 0.8),
                delete: Color::new(0.8, 0.3, 0.3),
            },
            toggles: Toggles::default(),
        }
    }
}

impl EditorConfig {
    /// Set the initial lattice dimensions.
    #[must_use]
    pub const fn with_dimensions(mut self, nx: u32, ny: u32, nz: u32) -> Self {
        self.dimensions = [nx, ny, nz];
        self
    }

    /// Set the cell edge length.
    #[must_use]
    pub const fn with_unit(mut self, unit: f32) -> Self {
        self.unit = unit;
        self
    }

    /// Set the merge policy used by imports.
    #[must_use]
    pub const fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.block.merge_policy = policy;
        self
    }

    /// Lattice origin as a vector
    #[must_use]
    pub fn origin(&self) -> Vec3 {
        Vec3::from_array(self.origin)
    }

    /// Validated lattice dimensions
    pub fn lattice(&self) -> Result<LatticeDims> {
        let [nx, ny, nz] = self.dimensions;
        LatticeDims::new(nx, ny, nz)
    }

    /// Check the values a grid cannot be built without.
    pub fn validate(&self) -> Result<()> {
        if !self.unit.is_finite() || self.unit <= 0.0 {
            return Err(Error::InvalidData(format!(
                "unit must be a positive finite number, got {}",
                self.unit
            )));
        }
        if self.origin.iter().any(|c| !c.is_finite()) {
            return Err(Error::InvalidData(format!(
                "origin must be finite, got {:?}",
                self.origin
            )));
        }
        self.lattice().map(|_| ())
    }

    /// Read a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        debug!(path = %path.display(), "Loaded editor configuration");
        Ok(config)
    }

    /// Write this configuration as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        debug!(path = %path.display(), "Saved editor configuration");
        Ok(())
    }

    /// Load the configuration at `path`, creating it with defaults if missing.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }
        let config = Self::default();
        config.save(path)?;
        info!(path = %path.display(), "Created default editor configuration");
        Ok(config)
    }
}

/// Location of the configuration file.
///
/// `$BLOCKBUILDER_CONFIG` wins; otherwise `blockbuilder.json` in the home
/// directory, or the working directory if no home is set.
#[must_use]
pub fn default_config_path() -> PathBuf {
    resolve_config_path(
        std::env::var_os(CONFIG_PATH_ENV),
        std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")),
    )
}

fn resolve_config_path(explicit: Option<OsString>, home: Option<OsString>) -> PathBuf {
    if let Some(path) = explicit {
        return PathBuf::from(path);
    }
    home.map_or_else(
        || PathBuf::from(CONFIG_FILE_NAME),
        |home| PathBuf::from(home).join(CONFIG_FILE_NAME),
    )
}
