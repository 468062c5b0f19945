use lineprofile_core::calibration::CameraMode;
use lineprofile_core::consts::MAGNIFICATION_PRESETS;
use lineprofile_core::state::Phase;

use crate::app::LineProfileApp;

pub(super) fn calibration_section(ui: &mut egui::Ui, app: &mut LineProfileApp) {
    let status = app.ui_state.display_stale.then_some("reload pending");
    crate::panels::section_header(ui, "Calibration", status);
    ui.add_space(4.0);

    // Camera presets are mutually exclusive.
    ui.horizontal(|ui| {
        ui.label("Camera");
        for &camera in CameraMode::ALL {
            let selected = app.state.calibration.camera == camera;
            if ui.selectable_label(selected, camera.to_string()).clicked() && !selected {
                let result = app.state.select_camera(camera);
                app.calibration_changed(result);
            }
        }
    });
    ui.small(format!(
        "{} \u{b5}m sensor pixels",
        app.state.calibration.camera_pixel_size
    ));

    // Custom pixel size replaces the objective while enabled.
    let custom_enabled = app.state.calibration.custom_enabled;
    ui.add_enabled_ui(!custom_enabled, |ui| {
        let mut magnification = app.state.calibration.magnification;
        let resp = egui::ComboBox::from_label("Objective")
            .selected_text(format!("{magnification}x"))
            .show_ui(ui, |ui| {
                let mut changed = false;
                for preset in MAGNIFICATION_PRESETS {
                    if ui
                        .selectable_value(&mut magnification, preset, format!("{preset}x"))
                        .changed()
                    {
                        changed = true;
                    }
                }
                changed
            });
        if resp.inner == Some(true) {
            let result = app.state.set_magnification(magnification);
            app.calibration_changed(result);
        }
    });

    let mut custom = custom_enabled;
    if ui.checkbox(&mut custom, "Custom pixel size").changed() {
        let result = app.state.set_custom_enabled(custom);
        app.calibration_changed(result);
    }

    ui.add_enabled_ui(app.state.calibration.custom_enabled, |ui| {
        let mut size = app.state.calibration.custom_pixel_size;
        let resp = ui.add(
            egui::DragValue::new(&mut size)
                .speed(0.01)
                .range(0.001..=1000.0)
                .max_decimals(4)
                .suffix(" \u{b5}m/px"),
        );
        if resp.changed() {
            let result = app.state.set_custom_pixel_size(size);
            app.calibration_changed(result);
        }
    });

    ui.add_space(4.0);
    ui.label(format!(
        "Scaling factor: {:.4} \u{b5}m/px",
        app.state.scaling_factor()
    ));

    let can_reload = app.state.phase() == Phase::ImageLoaded;
    if ui
        .add_enabled(can_reload, egui::Button::new("Update scaling factor"))
        .clicked()
    {
        app.reload();
    }
}
