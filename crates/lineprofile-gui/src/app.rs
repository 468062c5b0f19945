use std::path::Path;
use std::sync::mpsc;

use lineprofile_core::config::ProfileConfig;
use lineprofile_core::error::Result as CoreResult;
use lineprofile_core::state::{AppState, Phase};
use tracing::{debug, warn};

use crate::convert::frame_to_color_image;
use crate::messages::DialogResult;
use crate::panels;
use crate::states::{UIState, ViewportState};

pub struct LineProfileApp {
    pub ctx: egui::Context,
    pub result_tx: mpsc::Sender<DialogResult>,
    pub result_rx: mpsc::Receiver<DialogResult>,
    pub state: AppState,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_about: bool,
}

impl LineProfileApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();

        Self {
            ctx: ctx.clone(),
            result_tx,
            result_rx,
            state: AppState::default(),
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            show_about: false,
        }
    }

    /// Drain all pending results from dialog threads.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                DialogResult::ImagePicked { path } => self.open_image(&path),
                DialogResult::ConfigImported { path, config } => {
                    self.import_config(&path, &config);
                }
                DialogResult::Saved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                DialogResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    /// Load an image. On failure the current image stays on screen.
    pub fn open_image(&mut self, path: &Path) {
        match self.state.load(path) {
            Ok(()) => {
                if let Some(original) = self.state.original() {
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{}, {}-bit, {})",
                        path.display(),
                        original.cols(),
                        original.rows(),
                        original.bit_depth,
                        if original.is_color() { "color" } else { "mono" }
                    ));
                }
                self.display_changed();
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load image");
                self.ui_state
                    .add_log(format!("ERROR: cannot open {}: {e}", path.display()));
            }
        }
    }

    /// Re-derive the display with the current calibration.
    pub fn reload(&mut self) {
        match self.state.reload() {
            Ok(true) => {
                self.ui_state.add_log(format!(
                    "Scaling factor {} \u{b5}m/px applied",
                    self.state.scaling_factor()
                ));
                self.display_changed();
            }
            Ok(false) => self.ui_state.add_log("No image loaded".into()),
            Err(e) => {
                warn!(error = %e, "reload failed");
                self.ui_state.add_log(format!("ERROR: reload failed: {e}"));
            }
        }
    }

    fn import_config(&mut self, path: &Path, config: &ProfileConfig) {
        if let Err(e) = self.state.apply_config(config) {
            warn!(path = %path.display(), error = %e, "config rejected");
            self.ui_state
                .add_log(format!("ERROR: {} rejected: {e}", path.display()));
            return;
        }
        self.ui_state
            .add_log(format!("Config imported: {}", path.display()));
        if self.state.phase() == Phase::ImageLoaded {
            self.reload();
        }
    }

    /// Record the outcome of a calibration setter.
    pub fn calibration_changed(&mut self, result: CoreResult<f64>) {
        match result {
            Ok(factor) => {
                debug!(factor, "calibration changed");
                self.mark_display_stale();
            }
            Err(e) => {
                warn!(error = %e, "calibration rejected");
                self.ui_state.add_log(format!("ERROR: {e}"));
            }
        }
    }

    pub fn mark_display_stale(&mut self) {
        if self.state.phase() == Phase::ImageLoaded {
            self.ui_state.display_stale = true;
        }
    }

    fn display_changed(&mut self) {
        self.ui_state.display_stale = false;
        self.ui_state.region_drag = None;
        self.update_viewport_texture();
        self.viewport.fit_pending = true;
    }

    fn update_viewport_texture(&mut self) {
        let Some(display) = self.state.display() else {
            return;
        };
        let image = frame_to_color_image(&display.frame);
        let size = image.size;
        let texture = self
            .ctx
            .load_texture("viewport", image, egui::TextureOptions::NEAREST);
        self.viewport.texture = Some(texture);
        self.viewport.image_size = Some(size);
        self.viewport.viewing_label = format!(
            "{} ({})",
            self.state.calibration.camera,
            self.state.calibration.display_mode()
        );
    }
}

impl eframe::App for LineProfileApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::profile_plot::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Line Profile")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Line Profile");
                        ui.label("Calibrated intensity profiles for microscope images");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
