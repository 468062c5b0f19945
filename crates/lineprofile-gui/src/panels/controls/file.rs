use crate::app::LineProfileApp;
use crate::panels::menu_bar;

pub(super) fn file_section(ui: &mut egui::Ui, app: &mut LineProfileApp) {
    crate::panels::section_header(ui, "File", None);
    ui.add_space(4.0);

    if ui.button("Open...").clicked() {
        menu_bar::open_file(app);
    }

    if let Some(path) = app.state.source_path() {
        ui.label(
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );
    }

    if let Some(original) = app.state.original() {
        let channels = if original.is_color() { "color" } else { "mono" };
        ui.small(format!("{}x{}, {}", original.cols(), original.rows(), channels));
        ui.small(format!("{}-bit", original.bit_depth));
    }
}
