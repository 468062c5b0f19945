use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageBuffer, Pixel};
use ndarray::Array3;
use tracing::info;

use crate::error::{LineProfileError, Result};
use crate::frame::Frame;
use crate::profile::Profile;

/// Basic facts about an image file.
#[derive(Clone, Debug)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub rows: usize,
    pub cols: usize,
    pub channels: usize,
    pub bit_depth: u8,
    pub color_type: String,
}

/// Decode an image file into a Frame.
///
/// With `rotate` the image is turned 90° clockwise to correct the camera's
/// mounting orientation. Alpha is dropped; gray sources become mono frames.
pub fn load_image(path: &Path, rotate: bool) -> Result<Frame> {
    let img = image::open(path)?;
    let img = if rotate { img.rotate90() } else { img };
    let frame = frame_from_dynamic(img)?;
    info!(
        path = %path.display(),
        rows = frame.rows(),
        cols = frame.cols(),
        color = frame.is_color(),
        bit_depth = frame.bit_depth,
        "image loaded"
    );
    Ok(frame)
}

/// Convert a decoded image, keeping native sample values.
pub fn frame_from_dynamic(img: DynamicImage) -> Result<Frame> {
    match img {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageLumaA8(_) => {
            Frame::color(to_array(img.into_luma8())?, 8)
        }
        DynamicImage::ImageLuma16(_) | DynamicImage::ImageLumaA16(_) => {
            Frame::color(to_array(img.into_luma16())?, 16)
        }
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => {
            Frame::color(to_array(img.into_rgb8())?, 8)
        }
        DynamicImage::ImageRgb16(_) | DynamicImage::ImageRgba16(_) => {
            Frame::color(to_array(img.into_rgb16())?, 16)
        }
        other => Frame::color(to_array(other.into_rgb32f())?, 32),
    }
}

fn to_array<P>(buf: ImageBuffer<P, Vec<P::Subpixel>>) -> Result<Array3<f32>>
where
    P: Pixel,
    P::Subpixel: Into<f32>,
{
    let (w, h) = buf.dimensions();
    let (rows, cols) = (h as usize, w as usize);
    let channels = P::CHANNEL_COUNT as usize;
    let data: Vec<f32> = buf.into_raw().into_iter().map(Into::into).collect();
    Array3::from_shape_vec((rows, cols, channels), data)
        .map_err(|_| LineProfileError::InvalidDimensions { rows, cols })
}

/// Read dimensions and color type without any orientation correction.
pub fn image_info(path: &Path) -> Result<ImageInfo> {
    let img = image::open(path)?;
    let color = img.color();
    Ok(ImageInfo {
        path: path.to_path_buf(),
        rows: img.height() as usize,
        cols: img.width() as usize,
        channels: color.channel_count() as usize,
        bit_depth: (color.bits_per_pixel() / color.channel_count() as u16) as u8,
        color_type: format!("{color:?}"),
    })
}

/// Write a profile as JSON (`.json`) or CSV (anything else).
pub fn save_profile(profile: &Profile, path: &Path) -> Result<()> {
    let content = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => profile_to_json(profile)?,
        _ => profile.to_csv(),
    };
    std::fs::write(path, content)?;
    Ok(())
}

pub fn profile_to_json(profile: &Profile) -> Result<String> {
    serde_json::to_string_pretty(profile)
        .map_err(|e| LineProfileError::Serialization(e.to_string()))
}
