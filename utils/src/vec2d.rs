//! basic 2D vector in screen space. Used for positions, velocities and render geometry.
//! x grows to the right, y grows downward.
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, PartialOrd, Copy, Clone, Serialize, Deserialize)]
pub struct Vec2D(pub f64, pub f64);

impl Vec2D {
    pub const fn new() -> Self {
        Self(0.0, 0.0)
    }

    pub fn add(&self, other: &Self) -> Self {
        //! composes two vectors.
        Self(self.0 + other.0, self.1 + other.1)
    }

    pub fn scale(&self, scale_factor: f64) -> Self {
        //! scales the vector by a given magnitude.
        Self(self.0 * scale_factor, self.1 * scale_factor)
    }

    pub fn rotated(&self, angle: f64) -> Self {
        //! rotates the vector by `angle` radians about the origin.
        //! with y pointing down this reads as a clockwise turn on screen.
        let (sin, cos) = angle.sin_cos();
        Self(self.0 * cos - self.1 * sin, self.0 * sin + self.1 * cos)
    }
}
