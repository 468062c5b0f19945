use lineprofile_core::calibration::nice_scale_length;

use crate::app::LineProfileApp;
use crate::panels::region_interaction;

const MIN_ZOOM: f32 = 0.1;
const MAX_ZOOM: f32 = 40.0;
/// Longest scale bar as a fraction of the viewport width.
const SCALE_BAR_FRACTION: f32 = 0.25;

pub fn show(ctx: &egui::Context, app: &mut LineProfileApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let texture_info = app
            .viewport
            .texture
            .as_ref()
            .map(|t| (t.id(), [t.size()[0] as f32, t.size()[1] as f32]));

        if let Some((texture_id, tex_size)) = texture_info {
            let image_size = resolve_image_size(app, tex_size);
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            if app.viewport.fit_pending || response.double_clicked() {
                fit_to_rect(
                    &mut app.viewport.zoom,
                    &mut app.viewport.pan_offset,
                    image_size,
                    rect,
                );
                app.viewport.fit_pending = false;
            }

            handle_zoom(ui, &response, app, rect);
            handle_pan(ui, &response, app);

            let img_rect = compute_img_rect(rect, image_size, app);
            region_interaction::handle_region_interaction(
                ctx, &response, ui, app, img_rect, image_size,
            );

            draw_image(ui, texture_id, img_rect);

            if let Some(region) = app.state.region() {
                region_interaction::draw_region_overlay(ui, region, img_rect, image_size);
            }

            draw_scale_bar(ui, rect, app);
            draw_viewing_label(ui, rect, &app.viewport.viewing_label);
        } else {
            show_placeholder(ui);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn resolve_image_size(app: &LineProfileApp, tex_size: [f32; 2]) -> egui::Vec2 {
    if let Some(size) = app.viewport.image_size {
        egui::vec2(size[0] as f32, size[1] as f32)
    } else {
        egui::vec2(tex_size[0], tex_size[1])
    }
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut LineProfileApp, rect: egui::Rect) {
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll_delta == 0.0 || !response.hovered() {
        return;
    }

    let zoom_factor = (scroll_delta * 0.005).exp();
    let new_zoom = (app.viewport.zoom * zoom_factor).clamp(MIN_ZOOM, MAX_ZOOM);

    // Zoom toward mouse cursor
    if let Some(mouse_pos) = ui.input(|i| i.pointer.hover_pos()) {
        let center = rect.center().to_vec2() + app.viewport.pan_offset;
        let mouse_rel = mouse_pos.to_vec2() - center;
        let scale_change = new_zoom / app.viewport.zoom;
        app.viewport.pan_offset += mouse_rel * (1.0 - scale_change);
    }

    app.viewport.zoom = new_zoom;
}

fn handle_pan(ui: &egui::Ui, response: &egui::Response, app: &mut LineProfileApp) {
    if response.dragged_by(egui::PointerButton::Middle)
        || (response.dragged_by(egui::PointerButton::Primary) && ui.input(|i| i.modifiers.command))
    {
        app.viewport.pan_offset += response.drag_delta();
    }
}

fn compute_img_rect(rect: egui::Rect, image_size: egui::Vec2, app: &LineProfileApp) -> egui::Rect {
    let scaled = image_size * app.viewport.zoom;
    let center = rect.center() + app.viewport.pan_offset;
    egui::Rect::from_center_size(center, scaled)
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

/// Physical scale bar in the bottom-left corner, sized from the 1-2-5 series.
fn draw_scale_bar(ui: &egui::Ui, rect: egui::Rect, app: &LineProfileApp) {
    let Some(display) = app.state.display() else {
        return;
    };
    let microns_per_point = display.microns_per_pixel() / app.viewport.zoom as f64;
    let max_length = (rect.width() * SCALE_BAR_FRACTION) as f64 * microns_per_point;
    let Some(length) = nice_scale_length(max_length) else {
        return;
    };

    let bar_points = (length / microns_per_point) as f32;
    let start = rect.left_bottom() + egui::vec2(16.0, -16.0);
    let end = start + egui::vec2(bar_points, 0.0);
    let color = egui::Color32::from_white_alpha(230);
    let painter = ui.painter();

    painter.line_segment([start, end], egui::Stroke::new(3.0, color));
    painter.text(
        start + egui::vec2(bar_points / 2.0, -6.0),
        egui::Align2::CENTER_BOTTOM,
        format!("{} \u{b5}m", format_length(length)),
        egui::FontId::proportional(13.0),
        color,
    );
}

fn format_length(length: f64) -> String {
    // Strips float noise such as 0.30000000000000004.
    let rounded = (length * 1e6).round() / 1e6;
    format!("{rounded}")
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

fn fit_to_rect(zoom: &mut f32, pan: &mut egui::Vec2, image_size: egui::Vec2, rect: egui::Rect) {
    let available = rect.size();
    let fit_x = available.x / image_size.x;
    let fit_y = available.y / image_size.y;
    *zoom = fit_x.min(fit_y).clamp(MIN_ZOOM, MAX_ZOOM);
    *pan = egui::Vec2::ZERO;
}
