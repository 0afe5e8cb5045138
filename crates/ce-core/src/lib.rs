//! ce-core: shared foundation for the curve editor.
//!
//! Contains:
//! - numeric (Real + control-value domain helpers)
//! - geometry (surface boxes and the pointer → logical coordinate mapper)
//! - roles (the four fixed control-point identities)
//! - error (shared error types)

pub mod error;
pub mod geometry;
pub mod numeric;
pub mod roles;

pub use error::{CoreError, CoreResult};
pub use geometry::*;
pub use numeric::*;
pub use roles::PointRole;
