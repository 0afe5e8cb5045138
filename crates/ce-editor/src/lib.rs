//! Interactive curve editing on top of the signal and curve crates.
//!
//! The editor owns four control points. Pointer events arriving on a point
//! drive its controller, the controller writes its value stream, and a
//! combined subscription over all four streams redraws the curve on the
//! drawing surface. A shareable link seeds the initial values and can be
//! captured back out at any time.
//!
//! # Architecture
//!
//! - [`document`]: document-scoped pointer listeners (the shared resource a
//!   drag holds while it lasts)
//! - [`controller`]: per-point interaction state machine and drag handling
//! - [`binding`]: applies handle visuals as a pure function of value and state
//! - [`surface`]: drawing-surface abstraction plus the retained [`Scene`]
//! - [`renderer`]: samples the curve and replaces the drawn markers
//! - [`session`]: startup wiring and link capture
//! - [`config`]: YAML-backed editor configuration
//!
//! # Design Principles
//!
//! - **Backend-first**: nothing here depends on a GUI toolkit; the desktop
//!   app and the tests drive the same code through [`Surface`] and
//!   [`Document`]
//! - **Scoped listeners**: a drag owns exactly the two document handlers it
//!   registered and releases them when it ends
//! - **Single-threaded**: every event handler runs to completion, including
//!   the redraw it triggers, before the next event is processed

pub mod binding;
pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod renderer;
pub mod session;
pub mod surface;

pub use binding::{bind_handle, handle_visual};
pub use config::{CurveStyle, EditorConfig, HandleStyle, InitialValues, StyleConfig};
pub use controller::{ControlPointController, InteractionState, PointerInput};
pub use document::{Document, DocumentEventKind, PointerEvent};
pub use error::{EditorError, EditorResult};
pub use renderer::{CURVE_TAG, CurveRenderer};
pub use session::EditorSession;
pub use surface::{HandleVisual, Marker, MarkerStyle, Rgb, Scene, SharedSurface, Surface};
