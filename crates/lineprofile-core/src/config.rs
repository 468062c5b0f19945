use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calibration::{CalibrationState, CameraMode};
use crate::consts::DEFAULT_MAGNIFICATION;
use crate::error::{LineProfileError, Result};
use crate::profile::Orientation;
use crate::resample::ResampleFilter;

/// User-facing settings, stored as TOML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub camera: CameraMode,
    #[serde(default = "default_magnification")]
    pub magnification: u32,
    /// When set, overrides camera pixel size / magnification.
    #[serde(default)]
    pub custom_pixel_size: Option<f64>,
    #[serde(default)]
    pub orientation: Orientation,
    /// `None` keeps the camera's default.
    #[serde(default)]
    pub grayscale: Option<bool>,
    #[serde(default = "default_rotate_on_load")]
    pub rotate_on_load: bool,
    #[serde(default)]
    pub resample_filter: ResampleFilter,
}

fn default_magnification() -> u32 {
    DEFAULT_MAGNIFICATION
}

fn default_rotate_on_load() -> bool {
    true
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            camera: CameraMode::default(),
            magnification: DEFAULT_MAGNIFICATION,
            custom_pixel_size: None,
            orientation: Orientation::default(),
            grayscale: None,
            rotate_on_load: true,
            resample_filter: ResampleFilter::default(),
        }
    }
}

impl ProfileConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| LineProfileError::Serialization(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Build a validated calibration from these settings.
    pub fn calibration(&self) -> Result<CalibrationState> {
        CalibrationState::new(
            self.camera,
            self.magnification,
            self.custom_pixel_size,
            self.grayscale.unwrap_or(self.camera.default_grayscale()),
        )
    }

    /// Capture the current calibration and settings.
    pub fn from_calibration(
        cal: &CalibrationState,
        orientation: Orientation,
        rotate_on_load: bool,
        resample_filter: ResampleFilter,
    ) -> Self {
        Self {
            camera: cal.camera,
            magnification: cal.magnification,
            custom_pixel_size: cal.custom_enabled.then_some(cal.custom_pixel_size),
            orientation,
            grayscale: Some(cal.grayscale),
            rotate_on_load,
            resample_filter,
        }
    }
}
