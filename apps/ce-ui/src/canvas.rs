//! Translation between egui screen space and the editor's surface, and
//! painting of the retained scene.

use ce_core::{Bounds, DisplayBox, Point, to_display, to_logical};
use ce_editor::{Rgb, Scene, Surface};

pub fn display_box(rect: egui::Rect) -> DisplayBox {
    Bounds::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.width() as f64,
        rect.height() as f64,
    )
}

pub fn to_point(pos: egui::Pos2) -> Point {
    Point::new(pos.x as f64, pos.y as f64)
}

fn to_pos(p: Point) -> egui::Pos2 {
    egui::pos2(p.x as f32, p.y as f32)
}

fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Logical position under the screen position `pos`, or `None` while the
/// canvas has no area.
pub fn logical(scene: &Scene, pos: egui::Pos2) -> Option<Point> {
    let display = scene.display_box();
    if display.is_degenerate() {
        return None;
    }
    Some(to_logical(to_point(pos), display, scene.view_box()))
}

pub fn paint(painter: &egui::Painter, scene: &Scene) {
    let display = scene.display_box();
    let view_box = scene.view_box();
    // Uniform scale; the canvas is allocated square
    let scale = (display.width / view_box.width) as f32;
    let screen = |p: Point| to_pos(to_display(p, display, view_box));

    let area = egui::Rect::from_min_size(
        to_pos(display.origin()),
        egui::vec2(display.width as f32, display.height as f32),
    );
    painter.rect_filled(area, 0.0, egui::Color32::WHITE);

    for marker in scene.markers() {
        painter.circle(
            screen(marker.center),
            marker.radius as f32 * scale,
            color(marker.style.fill),
            egui::Stroke::new(
                marker.style.stroke_width as f32 * scale,
                color(marker.style.stroke),
            ),
        );
    }

    for (_, handle) in scene.handles() {
        painter.circle_filled(
            screen(handle.center),
            handle.radius as f32 * scale,
            color(handle.fill),
        );
    }
}
