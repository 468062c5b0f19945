use std::fmt;
use std::fmt::Write as _;

use ndarray::{s, Axis};
use serde::{Deserialize, Serialize};

use crate::frame::Frame;
use crate::region::Region;
use crate::resample::DisplayMode;

/// Which image axis the profile runs along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Scan down the rows, averaging across columns.
    #[default]
    Vertical,
    /// Scan along the columns, averaging across rows.
    Horizontal,
}

impl Orientation {
    pub const ALL: &[Self] = &[Self::Vertical, Self::Horizontal];

    /// Axis that is averaged away.
    pub fn averaged_axis(self) -> Axis {
        match self {
            Self::Vertical => Axis(1),
            Self::Horizontal => Axis(0),
        }
    }

    /// Length of the scan axis for an image of `rows` x `cols`.
    pub fn scan_len(self, rows: usize, cols: usize) -> usize {
        match self {
            Self::Vertical => rows,
            Self::Horizontal => cols,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => write!(f, "Vertical"),
            Self::Horizontal => write!(f, "Horizontal"),
        }
    }
}

/// Units of the profile's x coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "unit", content = "scale", rename_all = "lowercase")]
pub enum AxisUnits {
    /// Raw pixel index.
    Pixels,
    /// Pixel index times the scaling factor.
    Microns(f64),
}

impl AxisUnits {
    /// Only native display with a known camera pixel size yields physical units.
    pub fn for_display(mode: DisplayMode, scaling_factor: f64) -> Self {
        match mode {
            DisplayMode::Native => Self::Microns(scaling_factor),
            DisplayMode::Resampled => Self::Pixels,
        }
    }

    pub fn apply(self, index: usize) -> f64 {
        match self {
            Self::Pixels => index as f64,
            Self::Microns(scale) => index as f64 * scale,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Pixels => "px",
            Self::Microns(_) => "um",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Intensity,
    Red,
    Green,
    Blue,
}

impl Channel {
    fn for_index(color: bool, index: usize) -> Self {
        match (color, index) {
            (false, _) => Self::Intensity,
            (true, 0) => Self::Red,
            (true, 1) => Self::Green,
            (true, _) => Self::Blue,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intensity => write!(f, "intensity"),
            Self::Red => write!(f, "red"),
            Self::Green => write!(f, "green"),
            Self::Blue => write!(f, "blue"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChannelProfile {
    pub channel: Channel,
    pub values: Vec<f64>,
}

/// Averaged intensities along the scan axis of a region.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Profile {
    pub x: Vec<f64>,
    pub units: AxisUnits,
    /// One entry for grayscale, red/green/blue for color.
    pub channels: Vec<ChannelProfile>,
}

impl Profile {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn channel(&self, channel: Channel) -> Option<&ChannelProfile> {
        self.channels.iter().find(|c| c.channel == channel)
    }

    /// One row per sample: x followed by each channel's value.
    pub fn to_csv(&self) -> String {
        let mut out = format!("x_{}", self.units.suffix());
        for c in &self.channels {
            let _ = write!(out, ",{}", c.channel);
        }
        out.push('\n');

        for (i, x) in self.x.iter().enumerate() {
            let _ = write!(out, "{x}");
            for c in &self.channels {
                let _ = write!(out, ",{}", c.values[i]);
            }
            out.push('\n');
        }
        out
    }
}

/// Average the region's pixels across the non-scan axis.
///
/// The region is clipped to the image first; `None` means the clipped region
/// is empty. `x` starts at the region's near edge along the scan axis.
pub fn extract_profile(
    frame: &Frame,
    region: &Region,
    orientation: Orientation,
    units: AxisUnits,
) -> Option<Profile> {
    let window = region.clip(frame.rows(), frame.cols())?;
    let scan = match orientation {
        Orientation::Vertical => window.rows.clone(),
        Orientation::Horizontal => window.cols.clone(),
    };
    let x: Vec<f64> = scan.map(|i| units.apply(i)).collect();

    let color = frame.is_color();
    let channels = (0..frame.pixels.channel_count())
        .map(|index| {
            let view = frame.pixels.channel(index)?;
            let sub = view.slice(s![window.rows.clone(), window.cols.clone()]);
            let means = sub.mapv(f64::from).mean_axis(orientation.averaged_axis())?;
            Some(ChannelProfile {
                channel: Channel::for_index(color, index),
                values: means.to_vec(),
            })
        })
        .collect::<Option<Vec<_>>>()?;

    Some(Profile { x, units, channels })
}
