//! Geometric primitives for node placement.
//!
//! This module provides the [`Point`] type used when assigning positions to
//! visual nodes through the drawing collaborator.
//!
//! # Coordinate System
//!
//! Crowfoot uses a screen-style coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use crowfoot_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = p1.translate(5.0, -5.0);
/// assert_eq!(p2.x(), 15.0);
/// assert_eq!(p2.y(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns a new point offset by the given deltas.
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_offsets_both_axes() {
        let p = Point::new(1.0, 2.0).translate(3.0, 4.0);
        assert_eq!(p, Point::new(4.0, 6.0));
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(Point::default(), Point::new(0.0, 0.0));
    }
}
