/// Pixel size of the Spot camera sensor, in micrometres.
pub const SPOT_PIXEL_SIZE_UM: f64 = 7.4;

/// Pixel size of the Pixera camera sensor, in micrometres.
pub const PIXERA_PIXEL_SIZE_UM: f64 = 3.0;

/// Objective magnifications offered by the magnification selector.
pub const MAGNIFICATION_PRESETS: [u32; 6] = [4, 10, 20, 40, 50, 100];

/// Magnification selected on startup.
pub const DEFAULT_MAGNIFICATION: u32 = 10;

/// Custom pixel size shown when custom mode is first enabled, in micrometres.
pub const DEFAULT_CUSTOM_PIXEL_SIZE_UM: f64 = 1.0;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Number of channels that contribute to a color profile (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Largest edge length a resampled display image may have, in pixels.
pub const MAX_DISPLAY_DIMENSION: usize = 32_768;
