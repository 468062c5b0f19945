use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lineprofile_core::io::image_info;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let info = image_info(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    println!("File:        {}", info.path.display());
    println!("Dimensions:  {}x{}", info.cols, info.rows);
    println!("Channels:    {}", info.channels);
    println!("Bit depth:   {}", info.bit_depth);
    println!("Color type:  {}", info.color_type);

    Ok(())
}
