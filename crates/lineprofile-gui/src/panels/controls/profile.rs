use lineprofile_core::profile::Orientation;

use crate::app::LineProfileApp;
use crate::panels::menu_bar;

pub(super) fn profile_section(ui: &mut egui::Ui, app: &mut LineProfileApp) {
    let status = app.state.profile().map(|p| format!("{} samples", p.len()));
    crate::panels::section_header(ui, "Profile", status.as_deref());
    ui.add_space(4.0);

    // Orientation applies to the current region immediately.
    let mut orientation = app.state.orientation;
    if crate::panels::enum_combo(ui, "Orientation", &mut orientation, Orientation::ALL) {
        app.state.set_orientation(orientation);
    }

    if let Some(region) = app.state.region() {
        egui::Grid::new("region_readout")
            .num_columns(2)
            .spacing([12.0, 2.0])
            .show(ui, |ui| {
                ui.small("Row");
                ui.small(format!("{:.2}", region.row));
                ui.end_row();
                ui.small("Column");
                ui.small(format!("{:.2}", region.col));
                ui.end_row();
                ui.small("Height");
                ui.small(format!("{:.2}", region.height));
                ui.end_row();
                ui.small("Width");
                ui.small(format!("{:.2}", region.width));
                ui.end_row();
            });
    } else {
        ui.small("Open an image to place a region");
    }

    ui.add_space(4.0);
    if ui
        .add_enabled(app.state.profile().is_some(), egui::Button::new("Export Profile..."))
        .clicked()
    {
        menu_bar::export_profile(app);
    }
}
