use crate::app::LineProfileApp;

pub fn show(ctx: &egui::Context, app: &mut LineProfileApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 3 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(ref size) = app.viewport.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            ui.label(format!(
                "{} @ {}x",
                app.state.calibration.camera, app.state.calibration.magnification
            ));
            ui.separator();
            ui.label(format!(
                "Factor: {:.4} \u{b5}m/px",
                app.state.scaling_factor()
            ));
            ui.separator();
            ui.label(format!("Zoom: {:.0}%", app.viewport.zoom * 100.0));
        });

        ui.add_space(2.0);
    });
}
