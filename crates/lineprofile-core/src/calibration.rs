use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    DEFAULT_CUSTOM_PIXEL_SIZE_UM, DEFAULT_MAGNIFICATION, PIXERA_PIXEL_SIZE_UM, SPOT_PIXEL_SIZE_UM,
};
use crate::error::{LineProfileError, Result};
use crate::resample::DisplayMode;

/// Camera preset. Each camera has a fixed sensor pixel size and a preferred
/// way of presenting its images.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraMode {
    /// 7.4 µm sensor; images are resampled to physical scale, color kept.
    #[default]
    Spot,
    /// 3 µm sensor; images shown at native resolution in grayscale, x axis in µm.
    Pixera,
}

impl CameraMode {
    pub const ALL: &[Self] = &[Self::Spot, Self::Pixera];

    pub fn pixel_size(self) -> f64 {
        match self {
            Self::Spot => SPOT_PIXEL_SIZE_UM,
            Self::Pixera => PIXERA_PIXEL_SIZE_UM,
        }
    }

    /// Grayscale setting forced when this camera is selected.
    pub fn default_grayscale(self) -> bool {
        match self {
            Self::Spot => false,
            Self::Pixera => true,
        }
    }

    pub fn display_mode(self) -> DisplayMode {
        match self {
            Self::Spot => DisplayMode::Resampled,
            Self::Pixera => DisplayMode::Native,
        }
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spot => write!(f, "Spot"),
            Self::Pixera => write!(f, "Pixera"),
        }
    }
}

/// Physical size of one displayed pixel, in micrometres.
///
/// With `custom_enabled` the custom size is used as-is; otherwise the camera
/// pixel size is divided by the objective magnification.
pub fn compute_scaling_factor(
    camera_pixel_size: f64,
    magnification: u32,
    custom_size: f64,
    custom_enabled: bool,
) -> Result<f64> {
    if custom_enabled {
        if !(custom_size.is_finite() && custom_size > 0.0) {
            return Err(LineProfileError::InvalidConfiguration(format!(
                "custom pixel size must be positive, got {custom_size}"
            )));
        }
        return Ok(custom_size);
    }

    if magnification == 0 {
        return Err(LineProfileError::InvalidConfiguration(
            "magnification must be non-zero".into(),
        ));
    }
    if !(camera_pixel_size.is_finite() && camera_pixel_size > 0.0) {
        return Err(LineProfileError::InvalidConfiguration(format!(
            "camera pixel size must be positive, got {camera_pixel_size}"
        )));
    }

    Ok(camera_pixel_size / magnification as f64)
}

/// Calibration inputs and the scaling factor derived from them.
#[derive(Clone, Debug, PartialEq)]
pub struct CalibrationState {
    pub camera: CameraMode,
    pub camera_pixel_size: f64,
    pub magnification: u32,
    pub custom_pixel_size: f64,
    pub custom_enabled: bool,
    pub grayscale: bool,
    scaling_factor: f64,
}

impl Default for CalibrationState {
    fn default() -> Self {
        let camera = CameraMode::default();
        Self {
            camera,
            camera_pixel_size: camera.pixel_size(),
            magnification: DEFAULT_MAGNIFICATION,
            custom_pixel_size: DEFAULT_CUSTOM_PIXEL_SIZE_UM,
            custom_enabled: false,
            grayscale: camera.default_grayscale(),
            scaling_factor: camera.pixel_size() / DEFAULT_MAGNIFICATION as f64,
        }
    }
}

impl CalibrationState {
    /// Build and validate a calibration. `custom_pixel_size` enables custom mode.
    pub fn new(
        camera: CameraMode,
        magnification: u32,
        custom_pixel_size: Option<f64>,
        grayscale: bool,
    ) -> Result<Self> {
        let mut state = Self {
            camera,
            camera_pixel_size: camera.pixel_size(),
            magnification,
            custom_pixel_size: custom_pixel_size.unwrap_or(DEFAULT_CUSTOM_PIXEL_SIZE_UM),
            custom_enabled: custom_pixel_size.is_some(),
            grayscale,
            scaling_factor: 0.0,
        };
        state.recompute()?;
        Ok(state)
    }

    pub fn scaling_factor(&self) -> f64 {
        self.scaling_factor
    }

    /// Region position and size snap to multiples of this value.
    pub fn snap_size(&self) -> f64 {
        self.scaling_factor
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.camera.display_mode()
    }

    /// Recompute the scaling factor from the current inputs.
    ///
    /// On error the previous factor is kept.
    pub fn recompute(&mut self) -> Result<f64> {
        let factor = compute_scaling_factor(
            self.camera_pixel_size,
            self.magnification,
            self.custom_pixel_size,
            self.custom_enabled,
        )?;
        debug!(
            camera = %self.camera,
            magnification = self.magnification,
            custom = self.custom_enabled,
            factor,
            "scaling factor updated"
        );
        self.scaling_factor = factor;
        Ok(factor)
    }

    /// Switch camera preset: pixel size and grayscale default follow the
    /// camera, magnification is kept.
    pub fn select_camera(&mut self, camera: CameraMode) -> Result<f64> {
        self.camera = camera;
        self.camera_pixel_size = camera.pixel_size();
        self.grayscale = camera.default_grayscale();
        self.recompute()
    }

    pub fn set_magnification(&mut self, magnification: u32) -> Result<f64> {
        let previous = self.magnification;
        self.magnification = magnification;
        self.recompute().inspect_err(|_| self.magnification = previous)
    }

    pub fn set_custom_pixel_size(&mut self, size: f64) -> Result<f64> {
        let previous = self.custom_pixel_size;
        self.custom_pixel_size = size;
        self.recompute()
            .inspect_err(|_| self.custom_pixel_size = previous)
    }

    pub fn set_custom_enabled(&mut self, enabled: bool) -> Result<f64> {
        let previous = self.custom_enabled;
        self.custom_enabled = enabled;
        self.recompute().inspect_err(|_| self.custom_enabled = previous)
    }

    pub fn set_grayscale(&mut self, grayscale: bool) {
        self.grayscale = grayscale;
    }
}

/// Pick a scale-bar length from the 1-2-5 series that does not exceed
/// `max_length`. Returns `None` for non-positive input.
pub fn nice_scale_length(max_length: f64) -> Option<f64> {
    if !(max_length.is_finite() && max_length > 0.0) {
        return None;
    }
    let magnitude = 10f64.powf(max_length.log10().floor());
    let nice = [5.0, 2.0, 1.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|&len| len <= max_length)
        .unwrap_or(magnitude);
    Some(nice)
}
