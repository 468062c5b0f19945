mod common;

use approx::assert_relative_eq;

use lineprofile_core::calibration::CameraMode;
use lineprofile_core::config::ProfileConfig;
use lineprofile_core::profile::{AxisUnits, Channel, Orientation};
use lineprofile_core::region::Region;
use lineprofile_core::state::{AppState, Phase};

use common::{color_frame, flat_frame, ramp_frame, write_gray_png};

fn pixera_state() -> AppState {
    let mut state = AppState::default();
    state.select_camera(CameraMode::Pixera).unwrap();
    state
}

#[test]
fn test_starts_without_image() {
    let mut state = AppState::default();
    assert_eq!(state.phase(), Phase::NoImage);
    assert!(state.display().is_none());
    assert!(state.profile().is_none());
    assert!(!state.reload().unwrap());
    assert!(state.set_region(Region::new(0.0, 0.0, 5.0, 5.0)).is_none());
    assert!(state.region().is_none());
}

#[test]
fn test_set_image_native_mode() {
    let mut state = pixera_state();
    state.set_image(flat_frame(100, 100, 9.0), None).unwrap();

    assert_eq!(state.phase(), Phase::ImageLoaded);
    let display = state.display().unwrap();
    assert_eq!((display.frame.rows(), display.frame.cols()), (100, 100));
    assert_eq!(display.units, AxisUnits::Microns(0.3));

    let region = state.region().unwrap();
    assert_eq!(region.height, 100.0);
    assert_eq!(region.width, 30.0);

    let profile = state.profile().unwrap();
    assert_eq!(profile.len(), 100);
    assert_eq!(profile.channels.len(), 1);
    assert_relative_eq!(profile.x[10], 3.0, epsilon = 1e-12);
}

#[test]
fn test_spot_mode_resamples_and_keeps_color() {
    let mut state = AppState::default();
    state.set_image(color_frame(20, 10, 3), None).unwrap();

    let display = state.display().unwrap();
    assert_eq!((display.frame.rows(), display.frame.cols()), (15, 7));
    assert!(display.frame.is_color());
    assert_eq!(display.units, AxisUnits::Pixels);

    let profile = state.profile().unwrap();
    assert_eq!(profile.channels.len(), 3);
    assert!(profile.channel(Channel::Red).is_some());
}

#[test]
fn test_spot_to_pixera_switch() {
    let mut state = AppState::default();
    state.set_magnification(20).unwrap();
    assert!(!state.calibration.grayscale);

    state.select_camera(CameraMode::Pixera).unwrap();
    assert_eq!(state.scaling_factor(), 3.0 / 20.0);
    assert!(state.calibration.grayscale);
}

#[test]
fn test_calibration_change_applies_on_reload() {
    let mut state = AppState::default();
    state.set_image(ramp_frame(20, 10), None).unwrap();
    assert_eq!(state.display().unwrap().frame.rows(), 15);

    state.set_magnification(20).unwrap();
    assert_eq!(state.display().unwrap().frame.rows(), 15);

    assert!(state.reload().unwrap());
    let display = state.display().unwrap();
    assert_eq!(display.frame.rows(), 7); // round(20 * 0.37)
    assert_eq!(display.frame.cols(), 4); // round(10 * 0.37)
}

#[test]
fn test_grayscale_applies_on_reload() {
    let mut state = AppState::default();
    state.set_image(color_frame(10, 10, 3), None).unwrap();
    assert!(state.display().unwrap().frame.is_color());

    state.set_grayscale(true);
    state.reload().unwrap();
    assert!(!state.display().unwrap().frame.is_color());
    assert_eq!(state.profile().unwrap().channels.len(), 1);
}

#[test]
fn test_set_region_snaps_and_recomputes() {
    let mut state = pixera_state();
    state.set_image(ramp_frame(10, 10), None).unwrap();

    let profile = state
        .set_region(Region::new(1.0, 1.0, 3.1, 2.0))
        .expect("profile");
    assert!(!profile.is_empty());

    let region = *state.region().unwrap();
    let g = state.scaling_factor();
    for v in [region.row, region.col, region.height, region.width] {
        let k = v / g;
        assert!((k - k.round()).abs() < 1e-9, "{v} not snapped to {g}");
    }
}

#[test]
fn test_region_outside_clears_profile() {
    let mut state = pixera_state();
    state.set_image(ramp_frame(10, 10), None).unwrap();
    assert!(state.profile().is_some());

    assert!(state.set_region(Region::new(50.0, 50.0, 3.0, 3.0)).is_none());
    assert!(state.profile().is_none());
    assert_eq!(state.phase(), Phase::ImageLoaded);
}

#[test]
fn test_orientation_change_recomputes_profile() {
    let mut state = pixera_state();
    state.set_image(ramp_frame(12, 8), None).unwrap();
    state.set_region(Region::new(0.0, 0.0, 12.0, 8.0));
    assert_eq!(state.profile().unwrap().len(), 12);

    state.set_orientation(Orientation::Horizontal);
    assert_eq!(state.profile().unwrap().len(), 8);
}

#[test]
fn test_orientation_change_updates_display_x_axis() {
    let mut state = pixera_state();
    state.set_image(ramp_frame(12, 8), None).unwrap();
    state.set_region(Region::new(0.0, 0.0, 12.0, 8.0));
    state.set_orientation(Orientation::Horizontal);

    let display = state.display().unwrap();
    assert_eq!(display.x_axis.len(), 8);
    assert_eq!(display.x_axis, state.profile().unwrap().x);
}

#[test]
fn test_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_gray_png(dir.path(), "sample.png", 6, 4);

    let mut state = pixera_state();
    state.load(&path).unwrap();
    assert_eq!(state.source_path(), Some(path.as_path()));

    // Rotated on load: 4 wide x 6 tall.
    let original = state.original().unwrap();
    assert_eq!((original.rows(), original.cols()), (6, 4));
}

#[test]
fn test_failed_load_keeps_previous_image() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = pixera_state();
    state.set_image(ramp_frame(10, 10), None).unwrap();
    let before = state.display().cloned();

    assert!(state.load(&dir.path().join("missing.png")).is_err());
    assert_eq!(state.phase(), Phase::ImageLoaded);
    assert_eq!(state.display().cloned(), before);
    assert!(state.source_path().is_none());
}

#[test]
fn test_failed_display_keeps_previous_image() {
    let mut state = AppState::default();
    state.set_image(ramp_frame(10, 10), None).unwrap();

    // 1x1 at 0.74 resamples to 1x1, but 0.3 custom collapses it to nothing.
    state.set_custom_pixel_size(0.3).unwrap();
    state.set_custom_enabled(true).unwrap();
    assert!(state.set_image(ramp_frame(1, 1), None).is_err());
    assert_eq!(state.original().unwrap().rows(), 10);
}

#[test]
fn test_config_roundtrip_through_state() {
    let config = ProfileConfig {
        camera: CameraMode::Pixera,
        magnification: 4,
        orientation: Orientation::Horizontal,
        ..Default::default()
    };
    let state = AppState::from_config(&config).unwrap();
    assert_eq!(state.scaling_factor(), 0.75);
    assert_eq!(state.orientation, Orientation::Horizontal);

    let back = state.to_config();
    assert_eq!(back.camera, CameraMode::Pixera);
    assert_eq!(back.magnification, 4);
    assert_eq!(back.grayscale, Some(true));
}

#[test]
fn test_invalid_config_leaves_state_untouched() {
    let mut state = AppState::default();
    let bad = ProfileConfig {
        magnification: 0,
        orientation: Orientation::Horizontal,
        ..Default::default()
    };
    assert!(state.apply_config(&bad).is_err());
    assert_eq!(state.orientation, Orientation::Vertical);
    assert_eq!(state.calibration.magnification, 10);
}
