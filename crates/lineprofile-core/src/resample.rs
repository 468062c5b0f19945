use std::fmt;

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma, Rgb};
use ndarray::{s, Array2, Array3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{COLOR_CHANNEL_COUNT, MAX_DISPLAY_DIMENSION};
use crate::error::{LineProfileError, Result};
use crate::frame::{Frame, Pixels};
use crate::profile::{AxisUnits, Orientation};

/// How the original image is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Original pixels; x coordinates are converted to micrometres.
    Native,
    /// Both dimensions scaled by the scaling factor.
    #[default]
    Resampled,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "Native"),
            Self::Resampled => write!(f, "Resampled"),
        }
    }
}

/// Interpolation used when resampling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    #[default]
    Nearest,
    Triangle,
    CatmullRom,
}

impl ResampleFilter {
    pub const ALL: &[Self] = &[Self::Nearest, Self::Triangle, Self::CatmullRom];

    fn filter_type(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
        }
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "Nearest"),
            Self::Triangle => write!(f, "Bilinear"),
            Self::CatmullRom => write!(f, "Bicubic"),
        }
    }
}

/// The image as shown, plus the x coordinates along its scan axis.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayFrame {
    pub frame: Frame,
    pub x_axis: Vec<f64>,
    pub units: AxisUnits,
}

impl DisplayFrame {
    /// Physical width of one displayed pixel. A resampled frame is already at
    /// one micrometre per pixel.
    pub fn microns_per_pixel(&self) -> f64 {
        match self.units {
            AxisUnits::Microns(scale) => scale,
            AxisUnits::Pixels => 1.0,
        }
    }
}

/// Derive the displayed image from the original.
///
/// `Resampled` mode resizes both dimensions to `round(dim * scaling_factor)`;
/// `grayscale` then collapses color to BT.601 luma. The x axis is scaled to
/// micrometres only in `Native` mode.
pub fn prepare_display_image(
    original: &Frame,
    mode: DisplayMode,
    scaling_factor: f64,
    grayscale: bool,
    orientation: Orientation,
    filter: ResampleFilter,
) -> Result<DisplayFrame> {
    if !(scaling_factor.is_finite() && scaling_factor > 0.0) {
        return Err(LineProfileError::InvalidConfiguration(format!(
            "scaling factor must be positive, got {scaling_factor}"
        )));
    }

    let resized = match mode {
        DisplayMode::Native => original.clone(),
        DisplayMode::Resampled => {
            let rows = scaled_dimension(original.rows(), scaling_factor);
            let cols = scaled_dimension(original.cols(), scaling_factor);
            resize(original, rows, cols, filter)?
        }
    };

    let frame = if grayscale {
        resized.to_luma()
    } else {
        resized
    };

    let units = AxisUnits::for_display(mode, scaling_factor);
    let x_axis = scan_axis(&frame, orientation, units);

    debug!(
        %mode,
        rows = frame.rows(),
        cols = frame.cols(),
        color = frame.is_color(),
        "display image prepared"
    );

    Ok(DisplayFrame {
        frame,
        x_axis,
        units,
    })
}

/// Coordinates of every pixel along the scan axis of `frame`.
pub fn scan_axis(frame: &Frame, orientation: Orientation, units: AxisUnits) -> Vec<f64> {
    (0..orientation.scan_len(frame.rows(), frame.cols()))
        .map(|i| units.apply(i))
        .collect()
}

fn scaled_dimension(dim: usize, scaling_factor: f64) -> usize {
    (dim as f64 * scaling_factor).round() as usize
}

/// Resize a frame to `rows` x `cols`. Channels past blue are dropped.
pub fn resize(frame: &Frame, rows: usize, cols: usize, filter: ResampleFilter) -> Result<Frame> {
    if rows == 0 || cols == 0 || rows > MAX_DISPLAY_DIMENSION || cols > MAX_DISPLAY_DIMENSION {
        return Err(LineProfileError::InvalidDimensions { rows, cols });
    }

    // The resampler clamps float samples to [0, 1].
    let scale = frame.max_value();
    let (src_w, src_h) = (frame.cols() as u32, frame.rows() as u32);
    let (dst_w, dst_h) = (cols as u32, rows as u32);
    let bad_shape = || LineProfileError::InvalidDimensions { rows, cols };

    let pixels = match &frame.pixels {
        Pixels::Mono(data) => {
            let raw: Vec<f32> = data.iter().map(|v| v / scale).collect();
            let buf = ImageBuffer::<Luma<f32>, Vec<f32>>::from_raw(src_w, src_h, raw)
                .ok_or_else(bad_shape)?;
            let out = imageops::resize(&buf, dst_w, dst_h, filter.filter_type());
            let data: Vec<f32> = out.into_raw().into_iter().map(|v| v * scale).collect();
            Pixels::Mono(Array2::from_shape_vec((rows, cols), data).map_err(|_| bad_shape())?)
        }
        Pixels::Color(data) => {
            let raw: Vec<f32> = data
                .slice(s![.., .., ..COLOR_CHANNEL_COUNT])
                .iter()
                .map(|v| v / scale)
                .collect();
            let buf = ImageBuffer::<Rgb<f32>, Vec<f32>>::from_raw(src_w, src_h, raw)
                .ok_or_else(bad_shape)?;
            let out = imageops::resize(&buf, dst_w, dst_h, filter.filter_type());
            let data: Vec<f32> = out.into_raw().into_iter().map(|v| v * scale).collect();
            Pixels::Color(
                Array3::from_shape_vec((rows, cols, COLOR_CHANNEL_COUNT), data)
                    .map_err(|_| bad_shape())?,
            )
        }
    };

    Frame::new(pixels, frame.bit_depth)
}
