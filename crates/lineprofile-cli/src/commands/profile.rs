use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use lineprofile_core::config::ProfileConfig;
use lineprofile_core::io::{profile_to_json, save_profile};
use lineprofile_core::profile::Profile;
use lineprofile_core::region::Region;
use lineprofile_core::state::AppState;
use tracing::info;

use super::{CameraArg, OrientationArg};
use crate::summary::print_profile_summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Table,
    Csv,
    Json,
}

#[derive(Args)]
pub struct ProfileArgs {
    /// Input image file
    pub file: PathBuf,

    /// TOML config file (flags override its values)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Camera preset
    #[arg(long, value_enum)]
    pub camera: Option<CameraArg>,

    /// Objective magnification
    #[arg(short, long)]
    pub magnification: Option<u32>,

    /// Custom pixel size in micrometres
    #[arg(long)]
    pub pixel_size: Option<f64>,

    /// Scan direction of the profile
    #[arg(long, value_enum)]
    pub orientation: Option<OrientationArg>,

    /// Collapse color images to luminance
    #[arg(long, conflicts_with = "color")]
    pub grayscale: bool,

    /// Keep color channels
    #[arg(long)]
    pub color: bool,

    /// Skip the 90 degree rotation applied on load
    #[arg(long)]
    pub no_rotate: bool,

    /// Region in display pixels as row,col,height,width
    #[arg(long, value_delimiter = ',')]
    pub region: Option<Vec<f64>>,

    /// Output format for stdout
    #[arg(long, value_enum, default_value = "table")]
    pub format: FormatArg,

    /// Write the profile to a file (.json or .csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &ProfileArgs) -> Result<()> {
    let config = build_config(args)?;
    let mut state = AppState::from_config(&config).context("Invalid calibration")?;

    state
        .load(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    if let Some(ref values) = args.region {
        let &[row, col, height, width] = values.as_slice() else {
            bail!("--region expects row,col,height,width");
        };
        state.set_region(Region::new(row, col, height, width));
    }

    let (Some(region), Some(profile)) = (state.region(), state.profile()) else {
        bail!("Region does not overlap the image");
    };

    if let Some(ref path) = args.output {
        save_profile(profile, path)
            .with_context(|| format!("Failed to write profile to {}", path.display()))?;
        info!(path = %path.display(), samples = profile.len(), "profile saved");
    }

    match args.format {
        FormatArg::Table => {
            print_profile_summary(
                &args.file,
                &state.calibration,
                state.orientation,
                region,
                profile,
            );
            print_table(profile);
        }
        FormatArg::Csv => print!("{}", profile.to_csv()),
        FormatArg::Json => println!("{}", profile_to_json(profile)?),
    }

    Ok(())
}

fn build_config(args: &ProfileArgs) -> Result<ProfileConfig> {
    let mut config = match args.config {
        Some(ref path) => ProfileConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => ProfileConfig::default(),
    };

    if let Some(camera) = args.camera {
        config.camera = camera.into();
        // A new camera brings its own grayscale default.
        config.grayscale = None;
    }
    if let Some(m) = args.magnification {
        config.magnification = m;
    }
    if args.pixel_size.is_some() {
        config.custom_pixel_size = args.pixel_size;
    }
    if let Some(o) = args.orientation {
        config.orientation = o.into();
    }
    if args.grayscale {
        config.grayscale = Some(true);
    } else if args.color {
        config.grayscale = Some(false);
    }
    if args.no_rotate {
        config.rotate_on_load = false;
    }

    Ok(config)
}

fn print_table(profile: &Profile) {
    print!("  {:>12}", format!("x ({})", profile.units.suffix()));
    for c in &profile.channels {
        print!("{:>12}", c.channel);
    }
    println!();

    for (i, x) in profile.x.iter().enumerate() {
        print!("  {:>12.3}", x);
        for c in &profile.channels {
            print!("{:>12.3}", c.values[i]);
        }
        println!();
    }
}
