use egui_plot::{Legend, Line, Plot, PlotPoints};
use lineprofile_core::profile::{AxisUnits, Channel};

use crate::app::LineProfileApp;

const PLOT_HEIGHT: f32 = 220.0;

fn channel_color(channel: Channel) -> egui::Color32 {
    match channel {
        Channel::Intensity => egui::Color32::from_gray(220),
        Channel::Red => egui::Color32::from_rgb(230, 70, 70),
        Channel::Green => egui::Color32::from_rgb(80, 200, 80),
        Channel::Blue => egui::Color32::from_rgb(80, 130, 240),
    }
}

/// Averaged intensity along the scan axis, redrawn from the latest profile.
pub fn show(ctx: &egui::Context, app: &mut LineProfileApp) {
    egui::TopBottomPanel::bottom("profile")
        .resizable(true)
        .default_height(PLOT_HEIGHT)
        .show(ctx, |ui| {
            let Some(profile) = app.state.profile() else {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new("No profile")
                            .color(egui::Color32::from_gray(100)),
                    );
                });
                return;
            };

            let x_label = match profile.units {
                AxisUnits::Microns(_) => "position (\u{b5}m)",
                AxisUnits::Pixels => "position (px)",
            };

            Plot::new("line_profile_plot")
                .legend(Legend::default())
                .x_axis_label(x_label)
                .y_axis_label("mean intensity")
                .show(ui, |plot_ui| {
                    for c in &profile.channels {
                        let points: PlotPoints = profile
                            .x
                            .iter()
                            .zip(&c.values)
                            .map(|(&x, &y)| [x, y])
                            .collect();
                        plot_ui.line(
                            Line::new(c.channel.to_string(), points).color(channel_color(c.channel)),
                        );
                    }
                });
        });
}
