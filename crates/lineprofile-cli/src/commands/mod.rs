pub mod calibrate;
pub mod config;
pub mod info;
pub mod profile;

use clap::ValueEnum;
use lineprofile_core::calibration::CameraMode;
use lineprofile_core::profile::Orientation;

#[derive(Clone, Copy, ValueEnum)]
pub enum CameraArg {
    Spot,
    Pixera,
}

impl From<CameraArg> for CameraMode {
    fn from(arg: CameraArg) -> Self {
        match arg {
            CameraArg::Spot => CameraMode::Spot,
            CameraArg::Pixera => CameraMode::Pixera,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrientationArg {
    Vertical,
    Horizontal,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Vertical => Orientation::Vertical,
            OrientationArg::Horizontal => Orientation::Horizontal,
        }
    }
}
