use ndarray::{Array2, Array3, ArrayView2, Axis, Zip};

use crate::consts::{COLOR_CHANNEL_COUNT, LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::error::{LineProfileError, Result};

/// Pixel samples of an image, row-major.
///
/// Values stay in the source's native intensity scale (0..255 for 8-bit
/// sources, 0..65535 for 16-bit, 0..1 for float).
#[derive(Clone, Debug, PartialEq)]
pub enum Pixels {
    /// shape = (rows, cols)
    Mono(Array2<f32>),
    /// shape = (rows, cols, channels), channels >= 3; only 0..3 are read.
    Color(Array3<f32>),
}

impl Pixels {
    /// Build pixels from a channel-last array, normalising the channel count.
    ///
    /// One channel collapses to `Mono`. Two channels are rejected. Three or
    /// more are kept as `Color`; channels past blue are carried but ignored.
    pub fn from_channels(data: Array3<f32>) -> Result<Self> {
        match data.dim().2 {
            1 => Ok(Self::Mono(data.index_axis_move(Axis(2), 0))),
            n if n >= COLOR_CHANNEL_COUNT => Ok(Self::Color(data)),
            n => Err(LineProfileError::UnsupportedChannelCount(n)),
        }
    }

    pub fn rows(&self) -> usize {
        match self {
            Self::Mono(d) => d.nrows(),
            Self::Color(d) => d.dim().0,
        }
    }

    pub fn cols(&self) -> usize {
        match self {
            Self::Mono(d) => d.ncols(),
            Self::Color(d) => d.dim().1,
        }
    }

    /// Number of channels that take part in profiles (1 or 3).
    pub fn channel_count(&self) -> usize {
        match self {
            Self::Mono(_) => 1,
            Self::Color(_) => COLOR_CHANNEL_COUNT,
        }
    }

    pub fn is_color(&self) -> bool {
        matches!(self, Self::Color(_))
    }

    /// View of a single channel. `Mono` only has channel 0.
    pub fn channel(&self, index: usize) -> Option<ArrayView2<'_, f32>> {
        match self {
            Self::Mono(d) if index == 0 => Some(d.view()),
            Self::Color(d) if index < COLOR_CHANNEL_COUNT => Some(d.index_axis(Axis(2), index)),
            _ => None,
        }
    }
}

/// A decoded image together with the bit depth of its source.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub pixels: Pixels,
    /// Bit depth of the source samples (8, 16 or 32 for float).
    pub bit_depth: u8,
}

impl Frame {
    pub fn new(pixels: Pixels, bit_depth: u8) -> Result<Self> {
        let (rows, cols) = (pixels.rows(), pixels.cols());
        if rows == 0 || cols == 0 {
            return Err(LineProfileError::InvalidDimensions { rows, cols });
        }
        if let Pixels::Color(data) = &pixels {
            let channels = data.dim().2;
            if channels < COLOR_CHANNEL_COUNT {
                return Err(LineProfileError::UnsupportedChannelCount(channels));
            }
        }
        Ok(Self { pixels, bit_depth })
    }

    pub fn mono(data: Array2<f32>, bit_depth: u8) -> Result<Self> {
        Self::new(Pixels::Mono(data), bit_depth)
    }

    pub fn color(data: Array3<f32>, bit_depth: u8) -> Result<Self> {
        Self::new(Pixels::from_channels(data)?, bit_depth)
    }

    pub fn rows(&self) -> usize {
        self.pixels.rows()
    }

    pub fn cols(&self) -> usize {
        self.pixels.cols()
    }

    pub fn is_color(&self) -> bool {
        self.pixels.is_color()
    }

    /// Largest representable sample value for this bit depth.
    pub fn max_value(&self) -> f32 {
        match self.bit_depth {
            8 => u8::MAX as f32,
            16 => u16::MAX as f32,
            _ => 1.0,
        }
    }

    /// Convert to a single luma channel. Mono images are returned unchanged.
    pub fn to_luma(&self) -> Frame {
        match &self.pixels {
            Pixels::Mono(_) => self.clone(),
            Pixels::Color(data) => Frame {
                pixels: Pixels::Mono(luminance(data)),
                bit_depth: self.bit_depth,
            },
        }
    }
}

/// BT.601 luma of the first three channels.
pub fn luminance(data: &Array3<f32>) -> Array2<f32> {
    let (rows, cols, _) = data.dim();
    let mut out = Array2::<f32>::zeros((rows, cols));
    let r = data.index_axis(Axis(2), 0);
    let g = data.index_axis(Axis(2), 1);
    let b = data.index_axis(Axis(2), 2);

    Zip::from(&mut out)
        .and(&r)
        .and(&g)
        .and(&b)
        .par_for_each(|o, &r, &g, &b| {
            *o = LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b;
        });

    out
}
