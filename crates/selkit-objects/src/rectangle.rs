//! Rectangle value object.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle with the given width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
