use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::calibration::{CalibrationState, CameraMode};
use crate::config::ProfileConfig;
use crate::error::Result;
use crate::frame::Frame;
use crate::io::load_image;
use crate::profile::{extract_profile, Orientation, Profile};
use crate::region::Region;
use crate::resample::{prepare_display_image, scan_axis, DisplayFrame, ResampleFilter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NoImage,
    ImageLoaded,
}

/// Everything the front-ends mutate in response to user actions.
///
/// Calibration setters only change settings; the displayed image is
/// re-derived on `reload`. Region moves recompute the profile immediately.
#[derive(Clone, Debug)]
pub struct AppState {
    pub calibration: CalibrationState,
    pub orientation: Orientation,
    pub rotate_on_load: bool,
    pub resample_filter: ResampleFilter,
    source_path: Option<PathBuf>,
    original: Option<Frame>,
    display: Option<DisplayFrame>,
    region: Option<Region>,
    profile: Option<Profile>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            calibration: CalibrationState::default(),
            orientation: Orientation::default(),
            rotate_on_load: true,
            resample_filter: ResampleFilter::default(),
            source_path: None,
            original: None,
            display: None,
            region: None,
            profile: None,
        }
    }
}

impl AppState {
    pub fn from_config(config: &ProfileConfig) -> Result<Self> {
        let mut state = Self::default();
        state.apply_config(config)?;
        Ok(state)
    }

    /// Replace calibration and settings. Nothing changes if the config is invalid.
    pub fn apply_config(&mut self, config: &ProfileConfig) -> Result<()> {
        self.calibration = config.calibration()?;
        self.orientation = config.orientation;
        self.rotate_on_load = config.rotate_on_load;
        self.resample_filter = config.resample_filter;
        Ok(())
    }

    pub fn to_config(&self) -> ProfileConfig {
        ProfileConfig::from_calibration(
            &self.calibration,
            self.orientation,
            self.rotate_on_load,
            self.resample_filter,
        )
    }

    pub fn phase(&self) -> Phase {
        if self.original.is_some() {
            Phase::ImageLoaded
        } else {
            Phase::NoImage
        }
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn original(&self) -> Option<&Frame> {
        self.original.as_ref()
    }

    pub fn display(&self) -> Option<&DisplayFrame> {
        self.display.as_ref()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn scaling_factor(&self) -> f64 {
        self.calibration.scaling_factor()
    }

    /// Decode `path` and make it the current image.
    ///
    /// On failure the previous image, display and region are kept.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let frame = load_image(path, self.rotate_on_load)?;
        self.set_image(frame, Some(path.to_path_buf()))
    }

    /// Make `frame` the current image and derive display, region and profile.
    pub fn set_image(&mut self, frame: Frame, path: Option<PathBuf>) -> Result<()> {
        let (display, region) = self.derive_display(&frame)?;
        self.original = Some(frame);
        self.source_path = path;
        self.install(display, region);
        Ok(())
    }

    /// Re-derive the display from the retained original with the current
    /// calibration. Returns `Ok(false)` when no image is loaded.
    pub fn reload(&mut self) -> Result<bool> {
        let Some(original) = self.original.as_ref() else {
            return Ok(false);
        };
        let (display, region) = self.derive_display(original)?;
        self.install(display, region);
        info!(factor = self.scaling_factor(), "display reloaded");
        Ok(true)
    }

    fn derive_display(&self, frame: &Frame) -> Result<(DisplayFrame, Region)> {
        let factor = self.calibration.scaling_factor();
        let display = prepare_display_image(
            frame,
            self.calibration.display_mode(),
            factor,
            self.calibration.grayscale,
            self.orientation,
            self.resample_filter,
        )?;
        let region = Region::default_for(
            display.frame.rows(),
            display.frame.cols(),
            self.orientation,
            factor,
        );
        Ok((display, region))
    }

    fn install(&mut self, display: DisplayFrame, region: Region) {
        self.display = Some(display);
        self.region = Some(region);
        self.update_profile();
    }

    /// Move or resize the region. The region snaps to the scaling factor.
    /// Ignored while no image is displayed.
    pub fn set_region(&mut self, region: Region) -> Option<&Profile> {
        self.display.as_ref()?;
        self.region = Some(region.snapped(self.calibration.snap_size()));
        self.update_profile();
        self.profile.as_ref()
    }

    fn update_profile(&mut self) {
        self.profile = match (&self.display, &self.region) {
            (Some(display), Some(region)) => {
                extract_profile(&display.frame, region, self.orientation, display.units)
            }
            _ => None,
        };
        debug!(
            samples = self.profile.as_ref().map(Profile::len),
            "profile updated"
        );
    }

    pub fn select_camera(&mut self, camera: CameraMode) -> Result<f64> {
        self.calibration.select_camera(camera)
    }

    pub fn set_magnification(&mut self, magnification: u32) -> Result<f64> {
        self.calibration.set_magnification(magnification)
    }

    pub fn set_custom_pixel_size(&mut self, size: f64) -> Result<f64> {
        self.calibration.set_custom_pixel_size(size)
    }

    pub fn set_custom_enabled(&mut self, enabled: bool) -> Result<f64> {
        self.calibration.set_custom_enabled(enabled)
    }

    pub fn set_grayscale(&mut self, grayscale: bool) {
        self.calibration.set_grayscale(grayscale);
    }

    /// Change the scan axis and recompute the x axis and the profile for the
    /// current region.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        if let Some(display) = self.display.as_mut() {
            display.x_axis = scan_axis(&display.frame, orientation, display.units);
        }
        self.update_profile();
    }
}
