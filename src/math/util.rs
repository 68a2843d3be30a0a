use super::Vector2d;
use cgmath::prelude::*;

/// Rotates a vector 90 degrees counter-clockwise.
pub fn rot90(vec: Vector2d) -> Vector2d {
    Vector2d::new(-vec.y, vec.x)
}

/// The unit vector pointing along `heading`, in radians from the positive x-axis.
pub fn heading_vector(heading: f64) -> Vector2d {
    let (sin, cos) = heading.sin_cos();
    Vector2d::new(cos, sin)
}

/// The heading of a vector in radians, or `None` if the vector is (near) zero.
pub fn vector_heading(vec: Vector2d) -> Option<f64> {
    (vec.magnitude2() > 1e-18).then(|| vec.y.atan2(vec.x))
}
