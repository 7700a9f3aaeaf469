//! TOML-backed layout configuration.
//!
//! ```toml
//! orientation = "flat"
//! size = { x = 10.0, y = 15.0 }
//! origin = { x = 35.0, y = 71.0 }
//! ```

use crate::geometry::{
    hex::{Orientation, FLAT, POINTY},
    Layout, Point,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the layout file, if the platform has a config directory.
pub fn path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("hexmath").join("layout.toml"))
}

/// Which of the preset orientations a layout uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationKind {
    Pointy,
    Flat,
}

impl OrientationKind {
    pub fn orientation(self) -> Orientation {
        match self {
            OrientationKind::Pointy => POINTY,
            OrientationKind::Flat => FLAT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub orientation: OrientationKind,

    /// Center-to-corner distance along each axis.
    pub size: Point,

    /// Pixel center of the origin hex.
    #[serde(default)]
    pub origin: Point,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            orientation: OrientationKind::Pointy,
            size: Point::new(1.0, 1.0),
            origin: Point::default(),
        }
    }
}

impl LayoutConfig {
    fn validate(self) -> Result<Self, Error> {
        let Point { x, y } = self.size;
        if x == 0.0 || y == 0.0 || !x.is_finite() || !y.is_finite() {
            log::debug!("rejecting layout size {}", self.size);
            return Err(Error::InvalidSize(self.size));
        }
        Ok(self)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        let config: LayoutConfig = toml::from_str(s)?;
        config.validate()
    }

    pub fn to_toml_string(&self) -> Result<String, Error> {
        toml::to_string_pretty(self).map_err(Into::into)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path)?;
        Self::from_toml_str(&data).map_err(|err| {
            log::debug!("malformed layout config at {}: {}", path.display(), err);
            err
        })
    }

    /// Load from [`path`].
    pub fn load_default() -> Result<Self, Error> {
        Self::load_from(path())
    }

    fn load_from(path: Option<PathBuf>) -> Result<Self, Error> {
        Self::load(&path.ok_or(Error::NoConfigDir)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = self.to_toml_string()?;
        std::fs::write(path, serialized.as_bytes()).map_err(Into::into)
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.orientation.orientation(), self.size, self.origin)
    }
}

impl From<LayoutConfig> for Layout {
    fn from(config: LayoutConfig) -> Self {
        config.layout()
    }
}

impl Layout {
    /// The configuration describing this layout, if it uses a preset orientation.
    pub fn config(&self) -> Option<LayoutConfig> {
        let orientation = if self.orientation == POINTY {
            OrientationKind::Pointy
        } else if self.orientation == FLAT {
            OrientationKind::Flat
        } else {
            return None;
        };
        Some(LayoutConfig {
            orientation,
            size: self.size,
            origin: self.origin,
        })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
    #[error("layout size must be finite and non-zero: {0}")]
    InvalidSize(Point),
    #[error("no configuration directory on this platform")]
    NoConfigDir,
}
