//! Document-scoped pointer listeners.
//!
//! While a control point is being dragged, move and up events have to be
//! tracked on the whole document, not only on the point, or a fast drag
//! that leaves the point's hit area would be lost. These listeners are a
//! shared mutable resource: every registration hands back a
//! [`Subscription`], and releasing it removes exactly that handler.

use std::cell::Cell;

use ce_core::Point;
use ce_signals::{EventStream, Observable, Subscription};

/// A pointer event in viewport coordinates.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    pub position: Point,
    default_prevented: Cell<bool>,
}

impl PointerEvent {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            default_prevented: Cell::new(false),
        }
    }

    /// Ask the host to skip its own handling (text selection, native drag).
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// The document-level event kinds a drag listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentEventKind {
    Move,
    Up,
}

/// Document-wide pointer listener registry.
///
/// Cloning gives another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct Document {
    moves: EventStream<PointerEvent>,
    ups: EventStream<PointerEvent>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    fn stream(&self, kind: DocumentEventKind) -> &EventStream<PointerEvent> {
        match kind {
            DocumentEventKind::Move => &self.moves,
            DocumentEventKind::Up => &self.ups,
        }
    }

    /// Register `handler` for `kind`. Dropping the returned subscription
    /// removes this handler and no other.
    pub fn listen<F>(&self, kind: DocumentEventKind, handler: F) -> Subscription
    where
        F: Fn(&PointerEvent) + 'static,
    {
        self.stream(kind).subscribe(handler)
    }

    /// Deliver a move event to every registered move listener.
    pub fn dispatch_move(&self, event: PointerEvent) {
        self.moves.emit(event);
    }

    /// Deliver an up event to every registered up listener.
    pub fn dispatch_up(&self, event: PointerEvent) {
        self.ups.emit(event);
    }

    pub fn listener_count(&self, kind: DocumentEventKind) -> usize {
        self.stream(kind).subscriber_count()
    }

    /// Listeners of every kind currently registered.
    pub fn total_listeners(&self) -> usize {
        self.moves.subscriber_count() + self.ups.subscriber_count()
    }
}
