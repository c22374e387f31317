//! The drawing sink consumed by the evaluator.
//!
//! This module defines the [`Canvas`] trait — the entire surface the
//! evaluator depends on — plus [`RasterCanvas`], an implementation that
//! composes the drawing transform, buffers device-space points, and can
//! rasterize them into an RGB image.
//!
//! # Coordinate system
//!
//! ```text
//! +------------> X
//! |
//! |
//! V
//! Y
//! ```
//!
//! By default every integer coordinate maps to one screen pixel (scale
//! factor 1). Rotation is counter-clockwise in this screen frame, where +y
//! points downward.
//!
//! # Module Structure
//!
//! - [`transform`] - 3×3 affine transform composition
//! - [`raster`] - Point buffering and image rendering

mod raster;
mod transform;

pub use raster::{PlottedPoint, RasterCanvas};
pub use transform::Transform;

/// The abstract sink of drawing operations.
///
/// The evaluator takes any `&mut dyn Canvas`; implementations compose
/// origin/scale/rotation into an affine transform (scale, then rotate, then
/// translate) applied to every [`draw_point`](Canvas::draw_point). Transform
/// updates affect only subsequent points — earlier points are never
/// repositioned.
pub trait Canvas {
    /// Sets the origin of following draw operations.
    fn set_origin(&mut self, x: f64, y: f64);
    /// Sets the scale factors for the two axes.
    fn set_scale(&mut self, sx: f64, sy: f64);
    /// Sets the rotation of the drawing frame, counter-clockwise, in radians.
    fn set_rotation(&mut self, radians: f64);
    /// Sets the point size in pixels. Negative sizes are ignored.
    fn set_point_size(&mut self, pixels: i32);
    /// Sets the point color for subsequent points.
    fn set_point_color(&mut self, r: u8, g: u8, b: u8);
    /// Sets the background color. Used by the host, not the language.
    fn set_background_color(&mut self, r: u8, g: u8, b: u8);
    /// Draws a point at the given logical coordinates.
    fn draw_point(&mut self, x: f64, y: f64);
    /// Removes every buffered point.
    fn clear(&mut self);
}
