use lineprofile_core::resample::ResampleFilter;

use crate::app::LineProfileApp;

pub(super) fn display_section(ui: &mut egui::Ui, app: &mut LineProfileApp) {
    crate::panels::section_header(
        ui,
        "Display",
        Some(&app.state.calibration.display_mode().to_string()),
    );
    ui.add_space(4.0);

    let mut grayscale = app.state.calibration.grayscale;
    if ui.checkbox(&mut grayscale, "Grayscale").changed() {
        app.state.set_grayscale(grayscale);
        app.mark_display_stale();
    }

    if crate::panels::enum_combo(
        ui,
        "Resampling",
        &mut app.state.resample_filter,
        ResampleFilter::ALL,
    ) {
        app.mark_display_stale();
    }

    ui.checkbox(&mut app.state.rotate_on_load, "Rotate 90\u{b0} on load")
        .on_hover_text("Applies to the next opened image");
}
