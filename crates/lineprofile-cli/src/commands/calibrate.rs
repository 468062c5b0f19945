use anyhow::Result;
use clap::Args;
use lineprofile_core::calibration::{compute_scaling_factor, CameraMode};
use lineprofile_core::consts::DEFAULT_MAGNIFICATION;

use super::CameraArg;

#[derive(Args)]
pub struct CalibrateArgs {
    /// Camera preset
    #[arg(long, value_enum, default_value = "spot")]
    pub camera: CameraArg,

    /// Objective magnification
    #[arg(short, long, default_value_t = DEFAULT_MAGNIFICATION)]
    pub magnification: u32,

    /// Custom pixel size in micrometres (overrides camera and magnification)
    #[arg(long)]
    pub pixel_size: Option<f64>,
}

pub fn run(args: &CalibrateArgs) -> Result<()> {
    let camera = CameraMode::from(args.camera);
    let factor = compute_scaling_factor(
        camera.pixel_size(),
        args.magnification,
        args.pixel_size.unwrap_or_default(),
        args.pixel_size.is_some(),
    )?;

    if args.pixel_size.is_some() {
        println!("Custom pixel size");
    } else {
        println!(
            "Camera:         {} ({} um/px, {} display)",
            camera,
            camera.pixel_size(),
            camera.display_mode()
        );
        println!("Magnification:  {}x", args.magnification);
    }
    println!("Scaling factor: {factor} um/px");

    Ok(())
}
