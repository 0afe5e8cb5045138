//! Drawing-surface abstraction and the retained scene the desktop app paints.

use std::cell::RefCell;
use std::rc::Rc;

use ce_core::{DEFAULT_VIEW_BOX, DisplayBox, Point, PointRole, Real, ViewBox};
use serde::{Deserialize, Serialize};

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 128, 0);
}

/// Fill and outline of a circular marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub fill: Rgb,
    pub stroke: Rgb,
    pub stroke_width: Real,
}

/// Small filled circle created by the renderer, grouped by `tag` so a whole
/// group can be removed at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub center: Point,
    pub radius: Real,
    pub style: MarkerStyle,
    pub tag: &'static str,
}

/// Where and how a control-point handle is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleVisual {
    pub center: Point,
    pub radius: Real,
    pub fill: Rgb,
}

/// A graphical element the editor draws on.
///
/// The surface has a logical coordinate space (its view box) distinct from
/// the box it currently occupies on screen. Both are queried on every pointer
/// event, never cached by callers.
pub trait Surface {
    /// Current on-screen box in viewport coordinates.
    fn display_box(&self) -> DisplayBox;

    /// Logical coordinate space.
    fn view_box(&self) -> ViewBox;

    /// Move/restyle the handle of `role`.
    fn place_handle(&mut self, role: PointRole, visual: HandleVisual);

    fn add_marker(&mut self, marker: Marker);

    /// Remove every marker carrying `tag`. Returns how many were removed.
    fn remove_tagged(&mut self, tag: &str) -> usize;
}

/// Surface handle shared by the controllers, bindings and renderer.
pub type SharedSurface = Rc<RefCell<dyn Surface>>;

/// In-memory retained surface.
///
/// Keeps the four handles and the tagged markers. The desktop app updates the
/// display box from its layout each frame and paints whatever is stored here;
/// tests read it back directly.
#[derive(Debug, Clone)]
pub struct Scene {
    display: DisplayBox,
    view_box: ViewBox,
    handles: [Option<HandleVisual>; 4],
    markers: Vec<Marker>,
    generation: u64,
}

impl Scene {
    pub fn new(display: DisplayBox) -> Self {
        Self {
            display,
            view_box: DEFAULT_VIEW_BOX,
            handles: [None; 4],
            markers: Vec::new(),
            generation: 0,
        }
    }

    /// Wrap in the shared handle the editor expects.
    pub fn shared(self) -> Rc<RefCell<Scene>> {
        Rc::new(RefCell::new(self))
    }

    pub fn set_display_box(&mut self, display: DisplayBox) {
        self.display = display;
    }

    pub fn handle(&self, role: PointRole) -> Option<HandleVisual> {
        self.handles[role.index()]
    }

    pub fn handles(&self) -> impl Iterator<Item = (PointRole, HandleVisual)> + '_ {
        PointRole::ALL
            .into_iter()
            .filter_map(|role| self.handles[role.index()].map(|h| (role, h)))
    }

    /// Bumped on every handle or marker mutation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn markers_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Marker> + 'a {
        self.markers.iter().filter(move |m| m.tag == tag)
    }

    /// Topmost handle whose circle (grown by `slop` logical units) contains
    /// the logical point `p`. Later roles win ties, matching paint order.
    pub fn handle_at(&self, p: Point, slop: Real) -> Option<PointRole> {
        self.handles()
            .filter(|(_, h)| {
                let dx = p.x - h.center.x;
                let dy = p.y - h.center.y;
                let r = h.radius + slop;
                dx * dx + dy * dy <= r * r
            })
            .map(|(role, _)| role)
            .last()
    }
}

impl Surface for Scene {
    fn display_box(&self) -> DisplayBox {
        self.display
    }

    fn view_box(&self) -> ViewBox {
        self.view_box
    }

    fn place_handle(&mut self, role: PointRole, visual: HandleVisual) {
        self.handles[role.index()] = Some(visual);
        self.generation += 1;
    }

    fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
        self.generation += 1;
    }

    fn remove_tagged(&mut self, tag: &str) -> usize {
        let before = self.markers.len();
        self.markers.retain(|m| m.tag != tag);
        self.generation += 1;
        before - self.markers.len()
    }
}
