mod calibration;
mod display;
mod file;
mod profile;

const LEFT_PANEL_WIDTH: f32 = 280.0;

pub fn show(ctx: &egui::Context, app: &mut crate::app::LineProfileApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                file::file_section(ui, app);
                ui.separator();
                calibration::calibration_section(ui, app);
                ui.separator();
                display::display_section(ui, app);
                ui.separator();
                profile::profile_section(ui, app);
            });
        });
}
