//! Control-point interaction.
//!
//! Each control point runs a small state machine:
//!
//! ```text
//! Idle --enter--> Hovered --leave--> Idle
//! Idle | Hovered --down--> Dragging --up (anywhere)--> Idle
//! ```
//!
//! Only the y-axis is draggable. While dragging, pointer positions are
//! mapped into the surface's logical space on every move, clamped into the
//! value domain and pushed into the point's value stream.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use ce_core::{Point, PointRole, Real, clamp_value, to_logical};
use ce_signals::{Subscription, ValueStream};

use crate::document::{Document, DocumentEventKind, PointerEvent};
use crate::surface::SharedSurface;

/// Interaction state of one control point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovered,
    Dragging,
}

/// Inputs that move the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    Enter,
    Leave,
    Down,
    Up,
}

impl InteractionState {
    /// Next state for `input`. Inputs that do not apply leave the state as is.
    pub fn next(self, input: PointerInput) -> Self {
        use InteractionState::*;
        match (self, input) {
            (Idle, PointerInput::Enter) => Hovered,
            (Hovered, PointerInput::Leave) => Idle,
            (Idle | Hovered, PointerInput::Down) => Dragging,
            (Dragging, PointerInput::Up) => Idle,
            (state, _) => state,
        }
    }

    /// Whether the point is highlighted.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Hovered | Self::Dragging)
    }
}

/// One drag, from pointer-down to pointer-up.
///
/// Owns the two document listeners it registered; dropping the session
/// removes exactly those two.
struct DragSession {
    origin: Option<Point>,
    _on_move: Subscription,
    _on_up: Subscription,
}

struct ControllerInner {
    role: PointRole,
    value: ValueStream<Real>,
    state: ValueStream<InteractionState>,
    document: Document,
    surface: SharedSurface,
    drag: RefCell<Option<DragSession>>,
}

/// Binds pointer interaction on one control point to its value stream.
///
/// Cloning gives another handle to the same controller.
#[derive(Clone)]
pub struct ControlPointController {
    inner: Rc<ControllerInner>,
}

impl ControlPointController {
    /// Create the controller for `role`, seeded with `initial` (clamped into
    /// the value domain).
    pub fn new(role: PointRole, initial: Real, document: Document, surface: SharedSurface) -> Self {
        Self {
            inner: Rc::new(ControllerInner {
                role,
                value: ValueStream::new(clamp_value(initial)),
                state: ValueStream::new(InteractionState::Idle),
                document,
                surface,
                drag: RefCell::new(None),
            }),
        }
    }

    pub fn role(&self) -> PointRole {
        self.inner.role
    }

    /// Handle to the point's value stream.
    pub fn value_stream(&self) -> ValueStream<Real> {
        self.inner.value.clone()
    }

    /// Handle to the point's interaction-state stream.
    pub fn state_stream(&self) -> ValueStream<InteractionState> {
        self.inner.state.clone()
    }

    pub fn value(&self) -> Real {
        self.inner.value.current()
    }

    pub fn state(&self) -> InteractionState {
        self.inner.state.current()
    }

    /// Logical position captured at the start of the current drag. `None`
    /// when not dragging or when the surface had no area at pointer-down.
    pub fn drag_origin(&self) -> Option<Point> {
        self.inner.drag.borrow().as_ref().and_then(|d| d.origin)
    }

    pub fn pointer_enter(&self) {
        self.inner.apply(PointerInput::Enter);
    }

    pub fn pointer_leave(&self) {
        self.inner.apply(PointerInput::Leave);
    }

    /// Start a drag. Suppresses the host's default handling and starts
    /// listening for move/up on the whole document.
    pub fn pointer_down(&self, event: &PointerEvent) {
        event.prevent_default();

        // A drag that never saw its pointer-up is replaced, never stacked.
        let stale = self.inner.drag.borrow_mut().take();
        drop(stale);

        let origin = self.inner.map(event.position);
        let on_move = {
            let inner = Rc::downgrade(&self.inner);
            self.inner
                .document
                .listen(DocumentEventKind::Move, move |e| ControllerInner::on_move(&inner, e))
        };
        let on_up = {
            let inner = Rc::downgrade(&self.inner);
            self.inner
                .document
                .listen(DocumentEventKind::Up, move |e| ControllerInner::on_up(&inner, e))
        };
        *self.inner.drag.borrow_mut() = Some(DragSession {
            origin,
            _on_move: on_move,
            _on_up: on_up,
        });

        tracing::debug!(role = %self.inner.role, ?origin, "drag started");
        self.inner.apply(PointerInput::Down);
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.drag.borrow().is_some()
    }
}

impl ControllerInner {
    fn apply(&self, input: PointerInput) {
        let current = self.state.current();
        let next = current.next(input);
        if next != current {
            self.state.set(next);
        }
    }

    /// Map a viewport position through the surface's current geometry.
    /// A surface with no area (collapsed or hidden) maps nothing.
    fn map(&self, position: Point) -> Option<Point> {
        let (display, view_box) = {
            let surface = self.surface.borrow();
            (surface.display_box(), surface.view_box())
        };
        if display.is_degenerate() || view_box.is_degenerate() {
            return None;
        }
        Some(to_logical(position, display, view_box))
    }

    fn on_move(inner: &Weak<Self>, event: &PointerEvent) {
        let Some(inner) = inner.upgrade() else {
            return;
        };
        if inner.state.current() != InteractionState::Dragging {
            return;
        }
        let Some(logical) = inner.map(event.position) else {
            return;
        };
        inner.value.set(clamp_value(logical.y));
    }

    fn on_up(inner: &Weak<Self>, _event: &PointerEvent) {
        let Some(inner) = inner.upgrade() else {
            return;
        };
        let session = inner.drag.borrow_mut().take();
        drop(session);
        tracing::debug!(role = %inner.role, value = inner.value.current(), "drag ended");
        inner.apply(PointerInput::Up);
    }
}

impl std::fmt::Debug for ControlPointController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlPointController")
            .field("role", &self.inner.role)
            .field("value", &self.inner.value.current())
            .field("state", &self.inner.state.current())
            .finish()
    }
}
