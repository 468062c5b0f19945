use lineprofile_core::frame::{Frame, Pixels};

/// Convert a Frame to an egui ColorImage, scaling samples by the frame's
/// bit depth so 8-bit, 16-bit and float sources all map to 0..255.
pub fn frame_to_color_image(frame: &Frame) -> egui::ColorImage {
    let h = frame.rows();
    let w = frame.cols();
    let scale = 255.0 / frame.max_value();
    let to_u8 = |v: f32| (v * scale).clamp(0.0, 255.0) as u8;
    let mut pixels = Vec::with_capacity(h * w);

    match &frame.pixels {
        Pixels::Mono(data) => {
            for row in 0..h {
                for col in 0..w {
                    pixels.push(egui::Color32::from_gray(to_u8(data[[row, col]])));
                }
            }
        }
        Pixels::Color(data) => {
            for row in 0..h {
                for col in 0..w {
                    pixels.push(egui::Color32::from_rgb(
                        to_u8(data[[row, col, 0]]),
                        to_u8(data[[row, col, 1]]),
                        to_u8(data[[row, col, 2]]),
                    ));
                }
            }
        }
    }

    egui::ColorImage {
        size: [w, h],
        pixels,
        source_size: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};

    #[test]
    fn test_mono_16bit_is_scaled_to_8bit() {
        let data = Array2::from_shape_vec((1, 3), vec![0.0, 65535.0, 32768.0]).unwrap();
        let frame = Frame::mono(data, 16).unwrap();
        let image = frame_to_color_image(&frame);
        assert_eq!(image.size, [3, 1]);
        assert_eq!(image.pixels[0], egui::Color32::from_gray(0));
        assert_eq!(image.pixels[1], egui::Color32::from_gray(255));
        assert_eq!(image.pixels[2], egui::Color32::from_gray(127));
    }

    #[test]
    fn test_color_layout_is_row_major() {
        let data = Array3::from_shape_fn((2, 2, 3), |(r, c, k)| {
            if k == 0 {
                (r * 2 + c) as f32 * 10.0
            } else {
                0.0
            }
        });
        let frame = Frame::color(data, 8).unwrap();
        let image = frame_to_color_image(&frame);
        assert_eq!(image.size, [2, 2]);
        assert_eq!(image.pixels[1], egui::Color32::from_rgb(10, 0, 0));
        assert_eq!(image.pixels[2], egui::Color32::from_rgb(20, 0, 0));
    }
}
