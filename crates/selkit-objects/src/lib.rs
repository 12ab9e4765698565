//! Small value objects and text helpers for selkit.
//!
//! - **Rectangle** - width, height and area
//! - **JSON** - typed wrappers around `serde_json`
//! - **ROT13** - the letter-rotation cipher

/// Errors from the JSON helpers.
pub mod error;
/// Typed JSON encoding and decoding.
pub mod json;
/// Rectangle value object.
pub mod rectangle;
/// ROT13 letter rotation.
pub mod rot13;

pub use error::ObjectError;
pub use json::{from_json, to_json};
pub use rectangle::Rectangle;
pub use rot13::rot13;
