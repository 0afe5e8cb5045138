//! Push-based value propagation for the curve editor.
//!
//! This crate provides the small reactive layer that ties control points to
//! the curve: single-value holders that notify on change, and an operator
//! that fans several of them into one recomputation trigger.
//!
//! # Architecture
//!
//! - [`ValueStream`] holds one current value and replays it to new subscribers
//! - [`EventStream`] publishes values without holding one
//! - [`CombineLatest`] emits the tuple of latest values of N sources, once
//!   every source has emitted at least once
//! - [`Subscription`] is the deregistration handle returned by every subscribe
//!
//! # Execution model
//!
//! Everything is single-threaded and synchronous. A `set` runs every
//! subscriber to completion, in subscription order, before it returns.
//! Handles are `Rc`-based and deliberately `!Send`.

pub mod combine;
pub mod event;
pub mod observable;
pub mod subscription;
pub mod value;

mod subscribers;

pub use combine::{CombineLatest, combine_latest};
pub use event::EventStream;
pub use observable::{Observable, Observer};
pub use subscription::Subscription;
pub use value::ValueStream;
