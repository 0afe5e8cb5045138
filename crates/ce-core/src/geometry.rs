//! Surface geometry and the pointer → logical coordinate mapper.
//!
//! A drawing surface has two boxes:
//! - the *displayed* box, in viewport pixels, which changes whenever the host
//!   window is resized or the surface is scaled
//! - the *logical* view box, the fixed coordinate space the editor draws in
//!
//! Pointer events arrive in viewport coordinates and have to be mapped into
//! the view box on every event. Nothing here caches the displayed box.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Real;

/// A 2D position, either in viewport or in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: Real,
    pub y: Real,
}

impl Point {
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box given by its origin (top-left) and size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    pub x: Real,
    pub y: Real,
    pub width: Real,
    pub height: Real,
}

impl Bounds {
    pub const fn new(x: Real, y: Real, width: Real, height: Real) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// True when either dimension is zero (or negative), i.e. mapping through
    /// this box would divide by zero.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// The surface's on-screen box, in viewport pixels.
pub type DisplayBox = Bounds;

/// The surface's logical coordinate space.
pub type ViewBox = Bounds;

/// The view box every editor surface uses unless configured otherwise.
pub const DEFAULT_VIEW_BOX: ViewBox = Bounds::new(0.0, 0.0, 100.0, 100.0);

/// Map a viewport position into the surface's logical coordinate space.
///
/// Per axis: `(pos - displayed_origin) * (logical_size / displayed_size) + logical_origin`,
/// rounded to the nearest integer.
///
/// The displayed box must not be degenerate. A zero-sized display yields
/// non-finite or meaningless coordinates; callers only map events against a
/// visibly sized surface.
pub fn to_logical(pos: Point, displayed: DisplayBox, view_box: ViewBox) -> Point {
    let sx = view_box.width / displayed.width;
    let sy = view_box.height / displayed.height;
    Point::new(
        ((pos.x - displayed.x) * sx + view_box.x).round(),
        ((pos.y - displayed.y) * sy + view_box.y).round(),
    )
}

/// Inverse of [`to_logical`] without rounding. Used to place logical content
/// on screen.
pub fn to_display(pos: Point, displayed: DisplayBox, view_box: ViewBox) -> Point {
    let sx = displayed.width / view_box.width;
    let sy = displayed.height / view_box.height;
    Point::new(
        (pos.x - view_box.x) * sx + displayed.x,
        (pos.y - view_box.y) * sy + displayed.y,
    )
}
