#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{ImageBuffer, Luma, Rgb, Rgba};
use ndarray::{Array2, Array3};

use lineprofile_core::frame::Frame;

/// Mono 8-bit frame where pixel (r, c) = r * 10 + c.
pub fn ramp_frame(rows: usize, cols: usize) -> Frame {
    let data = Array2::from_shape_fn((rows, cols), |(r, c)| (r * 10 + c) as f32);
    Frame::mono(data, 8).expect("valid frame")
}

/// Mono 8-bit frame filled with a single value.
pub fn flat_frame(rows: usize, cols: usize, value: f32) -> Frame {
    Frame::mono(Array2::from_elem((rows, cols), value), 8).expect("valid frame")
}

/// Color frame with `channels` channels where channel k of pixel (r, c)
/// holds (k + 1) * 100 + r * 10 + c.
pub fn color_frame(rows: usize, cols: usize, channels: usize) -> Frame {
    let data = Array3::from_shape_fn((rows, cols, channels), |(r, c, k)| {
        ((k + 1) * 100 + r * 10 + c) as f32
    });
    Frame::color(data, 8).expect("valid frame")
}

/// Write an 8-bit gray PNG of `width` x `height` where pixel (x, y) = y * 10 + x.
pub fn write_gray_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = ImageBuffer::from_fn(width, height, |x, y| Luma([(y * 10 + x) as u8]));
    let path = dir.join(name);
    img.save(&path).expect("save gray png");
    path
}

/// Write a 16-bit gray PNG filled with `value`.
pub fn write_gray16_png(dir: &Path, name: &str, width: u32, height: u32, value: u16) -> PathBuf {
    let img: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_pixel(width, height, Luma([value]));
    let path = dir.join(name);
    img.save(&path).expect("save 16-bit png");
    path
}

pub fn write_rgb_png(dir: &Path, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
    let img = ImageBuffer::from_pixel(width, height, Rgb(rgb));
    let path = dir.join(name);
    img.save(&path).expect("save rgb png");
    path
}

pub fn write_rgba_png(dir: &Path, name: &str, width: u32, height: u32, rgba: [u8; 4]) -> PathBuf {
    let img = ImageBuffer::from_pixel(width, height, Rgba(rgba));
    let path = dir.join(name);
    img.save(&path).expect("save rgba png");
    path
}
