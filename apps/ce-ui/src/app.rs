use std::cell::RefCell;
use std::rc::Rc;

use ce_core::{Bounds, PointRole};
use ce_editor::{Document, DocumentEventKind, EditorConfig, EditorSession, PointerEvent, Scene};

use crate::canvas;

/// Extra grab distance around a handle, in view-box units.
const HIT_SLOP: f64 = 1.0;

fn hit_test(scene: &RefCell<Scene>, pos: egui::Pos2) -> Option<PointRole> {
    let scene = scene.borrow();
    canvas::logical(&scene, pos).and_then(|p| scene.handle_at(p, HIT_SLOP))
}

/// Where to deliver a pointer-up this frame, if anywhere.
///
/// A release outside the window can arrive without a position, or not at
/// all; a drag still listening while no button is held has ended.
fn release_at(
    released: bool,
    any_down: bool,
    listening: bool,
    latest: Option<egui::Pos2>,
    last_known: Option<egui::Pos2>,
) -> Option<egui::Pos2> {
    (released || (listening && !any_down)).then(|| latest.or(last_known).unwrap_or_default())
}

pub struct CurveEditorApp {
    scene: Rc<RefCell<Scene>>,
    document: Document,
    session: Option<EditorSession>,
    hovered: Option<PointRole>,
    last_pointer: Option<egui::Pos2>,
    status: String,
}

impl CurveEditorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EditorConfig, link: Option<String>) -> Self {
        let scene = Scene::new(Bounds::new(0.0, 0.0, 100.0, 100.0)).shared();
        let document = Document::new();

        let (session, status) =
            match EditorSession::start(config, link.as_deref(), scene.clone(), document.clone()) {
                Ok(session) => (Some(session), String::new()),
                Err(err) => {
                    tracing::error!(%err, "failed to start editor");
                    (None, format!("Failed to start editor: {err}"))
                }
            };

        Self {
            scene,
            document,
            session,
            hovered: None,
            last_pointer: None,
            status,
        }
    }

    fn handle_pointer(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let Some(session) = &self.session else {
            return;
        };

        let hovered = response
            .hover_pos()
            .and_then(|pos| hit_test(&self.scene, pos));
        if hovered != self.hovered {
            if let Some(role) = self.hovered {
                session.controller(role).pointer_leave();
            }
            if let Some(role) = hovered {
                session.controller(role).pointer_enter();
            }
            self.hovered = hovered;
        }

        if response.drag_started() {
            if let Some(origin) = ui.input(|i| i.pointer.press_origin()) {
                if let Some(role) = hit_test(&self.scene, origin) {
                    session
                        .controller(role)
                        .pointer_down(&PointerEvent::new(canvas::to_point(origin)));
                }
            }
        }

        // Moves and releases go to the whole document, so a drag keeps
        // tracking outside the canvas.
        let (latest, moved, released, any_down) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.delta() != egui::Vec2::ZERO,
                i.pointer.any_released(),
                i.pointer.any_down(),
            )
        });
        if let Some(pos) = latest {
            self.last_pointer = Some(pos);
            if moved {
                self.document
                    .dispatch_move(PointerEvent::new(canvas::to_point(pos)));
            }
        }
        let listening = self.document.listener_count(DocumentEventKind::Up) > 0;
        if let Some(pos) = release_at(released, any_down, listening, latest, self.last_pointer) {
            self.document
                .dispatch_up(PointerEvent::new(canvas::to_point(pos)));
        }
    }

    fn capture(&mut self, ctx: &egui::Context) {
        let Some(session) = &self.session else {
            return;
        };
        match session.capture_link() {
            Ok(url) => {
                ctx.copy_text(url.to_string());
                self.status = format!("Copied {url}");
            }
            Err(err) => {
                tracing::error!(%err, "link capture failed");
                self.status = format!("Capture failed: {err}");
            }
        }
    }
}

impl eframe::App for CurveEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(self.session.is_some(), egui::Button::new("Capture"))
                    .clicked()
                {
                    self.capture(ctx);
                }
                ui.separator();
                if let Some(session) = &self.session {
                    let values = session.values();
                    for role in PointRole::ALL {
                        ui.label(format!("{role}: {}", values[role.index()]));
                    }
                }
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            if self.status.is_empty() {
                ui.label("Drag a control point to reshape the curve");
            } else {
                ui.label(&self.status);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let side = ui.available_width().min(ui.available_height());
            let (response, painter) =
                ui.allocate_painter(egui::vec2(side, side), egui::Sense::click_and_drag());

            self.scene
                .borrow_mut()
                .set_display_box(canvas::display_box(response.rect));

            self.handle_pointer(ui, &response);
            canvas::paint(&painter, &self.scene.borrow());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_uses_the_current_position() {
        let at = release_at(true, false, true, Some(egui::pos2(3.0, 4.0)), None);
        assert_eq!(at, Some(egui::pos2(3.0, 4.0)));
    }

    #[test]
    fn release_outside_the_window_falls_back_to_last_known() {
        let at = release_at(true, false, true, None, Some(egui::pos2(7.0, 8.0)));
        assert_eq!(at, Some(egui::pos2(7.0, 8.0)));
    }

    #[test]
    fn missed_release_ends_a_listening_drag() {
        assert!(release_at(false, false, true, None, Some(egui::pos2(1.0, 1.0))).is_some());
        assert_eq!(release_at(false, true, true, None, None), None);
        assert_eq!(release_at(false, false, false, None, None), None);
    }
}
