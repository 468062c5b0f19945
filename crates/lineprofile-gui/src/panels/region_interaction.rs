use lineprofile_core::region::Region;

use crate::app::LineProfileApp;
use crate::states::RegionDrag;

/// Pointer distance in screen points that grabs a corner handle.
const HANDLE_RADIUS: f32 = 8.0;
const HANDLE_SIZE: f32 = 6.0;
const REGION_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 255, 0);

/// Convert screen coordinates to image pixel coordinates.
pub fn screen_to_image(
    pos: egui::Pos2,
    img_rect: egui::Rect,
    image_size: egui::Vec2,
) -> egui::Pos2 {
    egui::pos2(
        (pos.x - img_rect.left()) / img_rect.width() * image_size.x,
        (pos.y - img_rect.top()) / img_rect.height() * image_size.y,
    )
}

/// Convert image pixel coordinates to screen coordinates.
fn image_to_screen(
    pos: egui::Pos2,
    img_rect: egui::Rect,
    image_size: egui::Vec2,
) -> egui::Pos2 {
    egui::pos2(
        pos.x / image_size.x * img_rect.width() + img_rect.left(),
        pos.y / image_size.y * img_rect.height() + img_rect.top(),
    )
}

/// Region as an egui rect in image pixels (x = column, y = row).
fn region_to_image_rect(region: &Region) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(region.col as f32, region.row as f32),
        egui::vec2(region.width as f32, region.height as f32),
    )
}

fn region_to_screen(region: &Region, img_rect: egui::Rect, image_size: egui::Vec2) -> egui::Rect {
    let r = region_to_image_rect(region);
    egui::Rect::from_min_max(
        image_to_screen(r.min, img_rect, image_size),
        image_to_screen(r.max, img_rect, image_size),
    )
}

fn corners(rect: egui::Rect) -> [egui::Pos2; 4] {
    [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ]
}

/// Index of the corner under `pos`, if any.
fn hit_corner(rect: egui::Rect, pos: egui::Pos2) -> Option<usize> {
    corners(rect)
        .iter()
        .position(|c| c.distance(pos) <= HANDLE_RADIUS)
}

/// Handle region input: drag inside to move, drag a corner to resize, drag
/// elsewhere to draw a new region. Every change goes through
/// `AppState::set_region`, which snaps and recomputes the profile.
pub fn handle_region_interaction(
    ctx: &egui::Context,
    response: &egui::Response,
    ui: &egui::Ui,
    app: &mut LineProfileApp,
    img_rect: egui::Rect,
    image_size: egui::Vec2,
) {
    handle_region_drag(response, ui, app, img_rect, image_size);
    update_region_cursor(ctx, response, ui, app, img_rect, image_size);
}

fn handle_region_drag(
    response: &egui::Response,
    ui: &egui::Ui,
    app: &mut LineProfileApp,
    img_rect: egui::Rect,
    image_size: egui::Vec2,
) {
    let is_primary = response.dragged_by(egui::PointerButton::Primary);
    let no_ctrl = !ui.input(|i| i.modifiers.command);

    if is_primary && no_ctrl {
        if app.ui_state.region_drag.is_none() {
            app.ui_state.region_drag = detect_drag_start(response, ui, app, img_rect, image_size);
        }

        if let (Some(drag), Some(current)) =
            (app.ui_state.region_drag, ui.input(|i| i.pointer.hover_pos()))
        {
            let img_pos = screen_to_image(current, img_rect, image_size);
            let region = match drag {
                RegionDrag::Move { offset } => app
                    .state
                    .region()
                    .map(|r| moved_region(r, img_pos, offset, image_size)),
                RegionDrag::Resize { anchor } => Some(resized_region(anchor, img_pos, image_size)),
            };
            if let Some(region) = region {
                app.state.set_region(region);
            }
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        app.ui_state.region_drag = None;
    }
}

fn detect_drag_start(
    response: &egui::Response,
    ui: &egui::Ui,
    app: &LineProfileApp,
    img_rect: egui::Rect,
    image_size: egui::Vec2,
) -> Option<RegionDrag> {
    // Drags register after a threshold; decide from where the press began.
    let pos = ui
        .input(|i| i.pointer.press_origin())
        .or_else(|| response.interact_pointer_pos())?;
    let img_pos = screen_to_image(pos, img_rect, image_size);

    let Some(region) = app.state.region() else {
        return Some(RegionDrag::Resize { anchor: img_pos });
    };
    let screen = region_to_screen(region, img_rect, image_size);
    let image = region_to_image_rect(region);

    if let Some(corner) = hit_corner(screen, pos) {
        // Pin the diagonally opposite corner.
        let anchor = corners(image)[(corner + 2) % 4];
        Some(RegionDrag::Resize { anchor })
    } else if screen.contains(pos) {
        Some(RegionDrag::Move {
            offset: img_pos - image.min,
        })
    } else {
        Some(RegionDrag::Resize { anchor: img_pos })
    }
}

/// Keep the region's size and place its top-left under the pointer, inside the image.
fn moved_region(
    current: &Region,
    pointer: egui::Pos2,
    offset: egui::Vec2,
    image_size: egui::Vec2,
) -> Region {
    let col = (pointer.x - offset.x)
        .min(image_size.x - current.width as f32)
        .max(0.0);
    let row = (pointer.y - offset.y)
        .min(image_size.y - current.height as f32)
        .max(0.0);
    Region::new(row as f64, col as f64, current.height, current.width)
}

fn resized_region(anchor: egui::Pos2, pointer: egui::Pos2, image_size: egui::Vec2) -> Region {
    let clamp = |p: egui::Pos2| {
        egui::pos2(
            p.x.clamp(0.0, image_size.x),
            p.y.clamp(0.0, image_size.y),
        )
    };
    let rect = egui::Rect::from_two_pos(clamp(anchor), clamp(pointer));
    Region::new(
        rect.top() as f64,
        rect.left() as f64,
        rect.height() as f64,
        rect.width() as f64,
    )
}

fn update_region_cursor(
    ctx: &egui::Context,
    response: &egui::Response,
    ui: &egui::Ui,
    app: &LineProfileApp,
    img_rect: egui::Rect,
    image_size: egui::Vec2,
) {
    match app.ui_state.region_drag {
        Some(RegionDrag::Move { .. }) => {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
            return;
        }
        Some(RegionDrag::Resize { .. }) => {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            return;
        }
        None => {}
    }

    let Some(hover) = ui.input(|i| i.pointer.hover_pos()) else {
        return;
    };
    if !response.rect.contains(hover) {
        return;
    }

    let screen = app
        .state
        .region()
        .map(|r| region_to_screen(r, img_rect, image_size));
    let icon = match screen {
        Some(rect) => match hit_corner(rect, hover) {
            Some(0 | 2) => egui::CursorIcon::ResizeNwSe,
            Some(_) => egui::CursorIcon::ResizeNeSw,
            None if rect.contains(hover) => egui::CursorIcon::Grab,
            None => egui::CursorIcon::Crosshair,
        },
        None => egui::CursorIcon::Crosshair,
    };
    ctx.set_cursor_icon(icon);
}

/// Draw the region overlay (dim surroundings, border, corner handles, size label).
pub fn draw_region_overlay(
    ui: &egui::Ui,
    region: &Region,
    img_rect: egui::Rect,
    image_size: egui::Vec2,
) {
    let region_screen = region_to_screen(region, img_rect, image_size).intersect(img_rect);
    if !region_screen.is_positive() {
        return;
    }

    draw_dim_regions(ui, img_rect, region_screen);
    draw_region_border(ui, region_screen);
    draw_size_label(ui, region, region_screen);
}

fn draw_dim_regions(ui: &egui::Ui, img_rect: egui::Rect, region_screen: egui::Rect) {
    let dim_color = egui::Color32::from_black_alpha(110);
    let painter = ui.painter();

    // Top
    painter.rect_filled(
        egui::Rect::from_min_max(img_rect.left_top(), egui::pos2(img_rect.right(), region_screen.top())),
        0.0,
        dim_color,
    );
    // Bottom
    painter.rect_filled(
        egui::Rect::from_min_max(egui::pos2(img_rect.left(), region_screen.bottom()), img_rect.right_bottom()),
        0.0,
        dim_color,
    );
    // Left
    painter.rect_filled(
        egui::Rect::from_min_max(
            egui::pos2(img_rect.left(), region_screen.top()),
            egui::pos2(region_screen.left(), region_screen.bottom()),
        ),
        0.0,
        dim_color,
    );
    // Right
    painter.rect_filled(
        egui::Rect::from_min_max(
            egui::pos2(region_screen.right(), region_screen.top()),
            egui::pos2(img_rect.right(), region_screen.bottom()),
        ),
        0.0,
        dim_color,
    );
}

fn draw_region_border(ui: &egui::Ui, region_screen: egui::Rect) {
    let painter = ui.painter();
    painter.rect_stroke(
        region_screen,
        0.0,
        egui::Stroke::new(1.5, REGION_COLOR),
        egui::epaint::StrokeKind::Outside,
    );
    for corner in corners(region_screen) {
        painter.rect_filled(
            egui::Rect::from_center_size(corner, egui::vec2(HANDLE_SIZE, HANDLE_SIZE)),
            0.0,
            REGION_COLOR,
        );
    }
}

fn draw_size_label(ui: &egui::Ui, region: &Region, region_screen: egui::Rect) {
    let label = format!("{:.1}x{:.1}", region.width, region.height);
    let label_pos = egui::pos2(region_screen.right() - 4.0, region_screen.bottom() + 4.0);
    ui.painter().text(
        label_pos,
        egui::Align2::RIGHT_TOP,
        label,
        egui::FontId::proportional(12.0),
        REGION_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_image_round_trip() {
        let img_rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(200.0, 100.0));
        let size = egui::vec2(100.0, 50.0);
        let p = egui::pos2(30.0, 12.0);
        let back = screen_to_image(image_to_screen(p, img_rect, size), img_rect, size);
        assert!((back.x - p.x).abs() < 1e-4);
        assert!((back.y - p.y).abs() < 1e-4);
    }

    #[test]
    fn test_moved_region_stays_inside_image() {
        let current = Region::new(0.0, 0.0, 10.0, 4.0);
        let size = egui::vec2(20.0, 30.0);
        let moved = moved_region(&current, egui::pos2(50.0, 50.0), egui::Vec2::ZERO, size);
        assert_eq!(moved, Region::new(20.0, 16.0, 10.0, 4.0));

        let moved = moved_region(&current, egui::pos2(-5.0, -5.0), egui::Vec2::ZERO, size);
        assert_eq!(moved, Region::new(0.0, 0.0, 10.0, 4.0));
    }

    #[test]
    fn test_resize_from_any_direction() {
        let size = egui::vec2(20.0, 30.0);
        let r = resized_region(egui::pos2(10.0, 10.0), egui::pos2(4.0, 2.0), size);
        assert_eq!(r, Region::new(2.0, 4.0, 8.0, 6.0));

        let clamped = resized_region(egui::pos2(10.0, 10.0), egui::pos2(40.0, 40.0), size);
        assert_eq!(clamped, Region::new(10.0, 10.0, 20.0, 10.0));
    }
}
