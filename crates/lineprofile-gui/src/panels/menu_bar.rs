use lineprofile_core::config::ProfileConfig;
use lineprofile_core::io::save_profile;
use lineprofile_core::state::Phase;

use crate::app::LineProfileApp;
use crate::messages::DialogResult;

const IMAGE_EXTENSIONS: &[&str] = &["tif", "tiff", "png", "jpg", "jpeg", "bmp"];

pub fn show(ctx: &egui::Context, app: &mut LineProfileApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let reload_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::R);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_file(app);
                }

                let loaded = app.state.phase() == Phase::ImageLoaded;
                if ui
                    .add_enabled(
                        loaded,
                        egui::Button::new("Reload").shortcut_text(ctx.format_shortcut(&reload_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.reload();
                }

                if ui
                    .add_enabled(app.state.profile().is_some(), egui::Button::new("Export Profile..."))
                    .clicked()
                {
                    ui.close();
                    export_profile(app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
            open_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&reload_shortcut)) {
            app.reload();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

pub(crate) fn open_file(app: &mut LineProfileApp) {
    let result_tx = app.result_tx.clone();
    let ctx = app.ctx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = result_tx.send(DialogResult::ImagePicked { path });
            ctx.request_repaint();
        }
    });
}

pub(crate) fn export_profile(app: &mut LineProfileApp) {
    let Some(profile) = app.state.profile().cloned() else {
        return;
    };
    let file_name = app
        .state
        .source_path()
        .and_then(|p| p.file_stem())
        .map(|stem| format!("{}_profile.csv", stem.to_string_lossy()))
        .unwrap_or_else(|| "profile.csv".to_string());
    let result_tx = app.result_tx.clone();
    let ctx = app.ctx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .add_filter("JSON", &["json"])
            .set_file_name(file_name)
            .save_file()
        {
            let result = match save_profile(&profile, &path) {
                Ok(()) => DialogResult::Saved { path },
                Err(e) => DialogResult::Error {
                    message: format!("cannot write {}: {e}", path.display()),
                },
            };
            let _ = result_tx.send(result);
            ctx.request_repaint();
        }
    });
}

fn import_config(app: &mut LineProfileApp) {
    let result_tx = app.result_tx.clone();
    let ctx = app.ctx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        {
            let result = match ProfileConfig::load(&path) {
                Ok(config) => DialogResult::ConfigImported { path, config },
                Err(e) => DialogResult::Error {
                    message: format!("cannot read {}: {e}", path.display()),
                },
            };
            let _ = result_tx.send(result);
            ctx.request_repaint();
        }
    });
}

fn export_config(app: &mut LineProfileApp) {
    let config = app.state.to_config();
    let result_tx = app.result_tx.clone();
    let ctx = app.ctx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("lineprofile.toml")
            .save_file()
        {
            let result = match config.save(&path) {
                Ok(()) => DialogResult::Saved { path },
                Err(e) => DialogResult::Error {
                    message: format!("cannot write {}: {e}", path.display()),
                },
            };
            let _ = result_tx.send(result);
            ctx.request_repaint();
        }
    });
}
