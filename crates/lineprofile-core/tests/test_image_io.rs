mod common;

use lineprofile_core::frame::Pixels;
use lineprofile_core::io::{image_info, load_image, profile_to_json, save_profile};
use lineprofile_core::profile::{extract_profile, AxisUnits, Orientation};
use lineprofile_core::region::Region;

use common::{ramp_frame, write_gray16_png, write_gray_png, write_rgb_png, write_rgba_png};

#[test]
fn test_load_gray_png_without_rotation() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_gray_png(dir.path(), "gray.png", 3, 2);

    let frame = load_image(&path, false).unwrap();
    assert_eq!(frame.rows(), 2);
    assert_eq!(frame.cols(), 3);
    assert_eq!(frame.bit_depth, 8);

    let Pixels::Mono(d) = &frame.pixels else {
        panic!("expected mono");
    };
    assert_eq!(d[[0, 0]], 0.0);
    assert_eq!(d[[0, 2]], 2.0);
    assert_eq!(d[[1, 1]], 11.0);
}

#[test]
fn test_load_rotates_clockwise() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_gray_png(dir.path(), "gray.png", 3, 2);

    let frame = load_image(&path, true).unwrap();
    assert_eq!(frame.rows(), 3);
    assert_eq!(frame.cols(), 2);

    let Pixels::Mono(d) = &frame.pixels else {
        panic!("expected mono");
    };
    // Old top-left lands top-right; old bottom-left lands top-left.
    assert_eq!(d[[0, 1]], 0.0);
    assert_eq!(d[[0, 0]], 10.0);
    // Old top-right lands bottom-right.
    assert_eq!(d[[2, 1]], 2.0);
}

#[test]
fn test_load_rgb_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_rgb_png(dir.path(), "rgb.png", 4, 4, [10, 20, 30]);

    let frame = load_image(&path, true).unwrap();
    assert!(frame.is_color());
    let r = frame.pixels.channel(0).unwrap();
    let b = frame.pixels.channel(2).unwrap();
    assert!(r.iter().all(|&v| v == 10.0));
    assert!(b.iter().all(|&v| v == 30.0));
}

#[test]
fn test_load_rgba_drops_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_rgba_png(dir.path(), "rgba.png", 2, 2, [1, 2, 3, 255]);

    let frame = load_image(&path, false).unwrap();
    let Pixels::Color(d) = &frame.pixels else {
        panic!("expected color");
    };
    assert_eq!(d.dim(), (2, 2, 3));
    assert_eq!(d[[0, 0, 2]], 3.0);
}

#[test]
fn test_load_16bit_keeps_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_gray16_png(dir.path(), "deep.png", 5, 5, 40_000);

    let frame = load_image(&path, true).unwrap();
    assert_eq!(frame.bit_depth, 16);
    assert_eq!(frame.max_value(), 65535.0);
    assert!(frame.pixels.channel(0).unwrap().iter().all(|&v| v == 40_000.0));
}

#[test]
fn test_load_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_image(&dir.path().join("missing.png"), true).is_err());
}

#[test]
fn test_load_garbage_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noise.png");
    std::fs::write(&path, b"definitely not a png").unwrap();
    assert!(load_image(&path, true).is_err());
}

#[test]
fn test_image_info() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_rgba_png(dir.path(), "rgba.png", 7, 3, [0, 0, 0, 0]);

    let info = image_info(&path).unwrap();
    assert_eq!(info.cols, 7);
    assert_eq!(info.rows, 3);
    assert_eq!(info.channels, 4);
    assert_eq!(info.bit_depth, 8);
}

#[test]
fn test_save_profile_csv_and_json() {
    let frame = ramp_frame(3, 3);
    let profile = extract_profile(
        &frame,
        &Region::new(0.0, 0.0, 3.0, 3.0),
        Orientation::Vertical,
        AxisUnits::Microns(0.5),
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("profile.csv");
    save_profile(&profile, &csv_path).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv, profile.to_csv());

    let json_path = dir.path().join("profile.json");
    save_profile(&profile, &json_path).unwrap();
    let json = std::fs::read_to_string(&json_path).unwrap();
    assert_eq!(json, profile_to_json(&profile).unwrap());
    assert!(json.contains("\"intensity\""), "got: {json}");
    assert!(json.contains("\"microns\""), "got: {json}");
}
