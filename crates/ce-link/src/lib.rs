//! Shareable links for a curve shape.
//!
//! A link is a query-style URL carrying the four control values as numeric
//! fields named after their roles:
//!
//! ```text
//! http://localhost/?p0=75&p1=50&p2=90&p3=25
//! ```
//!
//! Decoding never fails. A field that is missing, empty or not a finite
//! number is reported as absent and the caller substitutes a default.

pub mod codec;
pub mod error;

pub use codec::{LinkValues, decode, decode_url, encode, encode_url};
pub use error::{LinkError, LinkResult};
