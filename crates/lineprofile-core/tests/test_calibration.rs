use approx::assert_relative_eq;

use lineprofile_core::calibration::{
    compute_scaling_factor, nice_scale_length, CalibrationState, CameraMode,
};
use lineprofile_core::error::LineProfileError;
use lineprofile_core::resample::DisplayMode;

// ---------------------------------------------------------------------------
// compute_scaling_factor
// ---------------------------------------------------------------------------

#[test]
fn test_scaling_factor_is_pixel_size_over_magnification() {
    for &pixel_size in &[7.4, 3.0, 1.25, 0.5] {
        for &mag in &[1u32, 4, 10, 20, 40, 50, 100] {
            let factor = compute_scaling_factor(pixel_size, mag, 99.0, false).unwrap();
            assert_eq!(factor, pixel_size / mag as f64);
        }
    }
}

#[test]
fn test_scaling_factor_spot_at_10x() {
    let factor = compute_scaling_factor(7.4, 10, 1.0, false).unwrap();
    assert_relative_eq!(factor, 0.74, epsilon = 1e-12);
}

#[test]
fn test_custom_pixel_size_used_verbatim() {
    for &custom in &[0.1, 0.74, 2.5, 13.0] {
        let factor = compute_scaling_factor(7.4, 10, custom, true).unwrap();
        assert_eq!(factor, custom);
    }
}

#[test]
fn test_custom_mode_ignores_zero_magnification() {
    let factor = compute_scaling_factor(7.4, 0, 0.5, true).unwrap();
    assert_eq!(factor, 0.5);
}

#[test]
fn test_zero_magnification_rejected() {
    let err = compute_scaling_factor(7.4, 0, 1.0, false).unwrap_err();
    assert!(matches!(err, LineProfileError::InvalidConfiguration(_)));
}

#[test]
fn test_non_positive_pixel_size_rejected() {
    assert!(compute_scaling_factor(0.0, 10, 1.0, false).is_err());
    assert!(compute_scaling_factor(-3.0, 10, 1.0, false).is_err());
    assert!(compute_scaling_factor(f64::NAN, 10, 1.0, false).is_err());
}

#[test]
fn test_non_positive_custom_size_rejected() {
    assert!(compute_scaling_factor(7.4, 10, 0.0, true).is_err());
    assert!(compute_scaling_factor(7.4, 10, -1.0, true).is_err());
    assert!(compute_scaling_factor(7.4, 10, f64::INFINITY, true).is_err());
}

// ---------------------------------------------------------------------------
// CameraMode
// ---------------------------------------------------------------------------

#[test]
fn test_camera_presets() {
    assert_eq!(CameraMode::Spot.pixel_size(), 7.4);
    assert_eq!(CameraMode::Pixera.pixel_size(), 3.0);
    assert!(!CameraMode::Spot.default_grayscale());
    assert!(CameraMode::Pixera.default_grayscale());
    assert_eq!(CameraMode::Spot.display_mode(), DisplayMode::Resampled);
    assert_eq!(CameraMode::Pixera.display_mode(), DisplayMode::Native);
}

#[test]
fn test_camera_display() {
    assert_eq!(format!("{}", CameraMode::Spot), "Spot");
    assert_eq!(format!("{}", CameraMode::Pixera), "Pixera");
}

// ---------------------------------------------------------------------------
// CalibrationState
// ---------------------------------------------------------------------------

#[test]
fn test_default_state_is_spot_at_10x() {
    let cal = CalibrationState::default();
    assert_eq!(cal.camera, CameraMode::Spot);
    assert_eq!(cal.magnification, 10);
    assert!(!cal.grayscale);
    assert!(!cal.custom_enabled);
    assert_relative_eq!(cal.scaling_factor(), 0.74, epsilon = 1e-12);
    assert_eq!(cal.snap_size(), cal.scaling_factor());
}

#[test]
fn test_switch_spot_to_pixera_keeps_magnification_and_forces_grayscale() {
    let mut cal = CalibrationState::default();
    cal.set_magnification(20).unwrap();
    assert!(!cal.grayscale);

    let factor = cal.select_camera(CameraMode::Pixera).unwrap();
    assert_eq!(factor, 3.0 / 20.0);
    assert_eq!(cal.magnification, 20);
    assert!(cal.grayscale);
    assert_eq!(cal.camera_pixel_size, 3.0);

    let factor = cal.select_camera(CameraMode::Spot).unwrap();
    assert_eq!(factor, 7.4 / 20.0);
    assert!(!cal.grayscale);
}

#[test]
fn test_user_grayscale_overridden_by_camera_switch() {
    let mut cal = CalibrationState::default();
    cal.set_grayscale(true);
    cal.select_camera(CameraMode::Spot).unwrap();
    assert!(!cal.grayscale);
}

#[test]
fn test_invalid_magnification_keeps_previous_state() {
    let mut cal = CalibrationState::default();
    let before = cal.scaling_factor();
    assert!(cal.set_magnification(0).is_err());
    assert_eq!(cal.magnification, 10);
    assert_eq!(cal.scaling_factor(), before);
}

#[test]
fn test_custom_mode_toggle() {
    let mut cal = CalibrationState::default();
    cal.set_custom_pixel_size(0.25).unwrap();
    // Custom size is stored but only takes effect once enabled.
    assert_relative_eq!(cal.scaling_factor(), 0.74, epsilon = 1e-12);

    assert_eq!(cal.set_custom_enabled(true).unwrap(), 0.25);
    assert_eq!(cal.snap_size(), 0.25);

    let factor = cal.set_custom_enabled(false).unwrap();
    assert_relative_eq!(factor, 0.74, epsilon = 1e-12);
}

#[test]
fn test_invalid_custom_size_rejected_while_enabled() {
    let mut cal = CalibrationState::new(CameraMode::Spot, 10, Some(0.5), false).unwrap();
    assert!(cal.set_custom_pixel_size(-1.0).is_err());
    assert_eq!(cal.custom_pixel_size, 0.5);
    assert_eq!(cal.scaling_factor(), 0.5);
}

#[test]
fn test_new_validates() {
    assert!(CalibrationState::new(CameraMode::Pixera, 0, None, true).is_err());
    let cal = CalibrationState::new(CameraMode::Pixera, 4, None, true).unwrap();
    assert_eq!(cal.scaling_factor(), 0.75);
}

// ---------------------------------------------------------------------------
// nice_scale_length
// ---------------------------------------------------------------------------

#[test]
fn test_nice_scale_length_series() {
    assert_eq!(nice_scale_length(1.0), Some(1.0));
    assert_eq!(nice_scale_length(7.3), Some(5.0));
    assert_eq!(nice_scale_length(19.9), Some(10.0));
    assert_eq!(nice_scale_length(250.0), Some(200.0));
}

#[test]
fn test_nice_scale_length_fractional() {
    let len = nice_scale_length(0.3).unwrap();
    assert_relative_eq!(len, 0.2, epsilon = 1e-12);
}

#[test]
fn test_nice_scale_length_invalid() {
    assert_eq!(nice_scale_length(0.0), None);
    assert_eq!(nice_scale_length(-5.0), None);
    assert_eq!(nice_scale_length(f64::NAN), None);
}
