use std::ops::Neg;

use crate::data::Point;

/// A displacement in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
  pub x: f64,
  pub y: f64,
}

impl Vector {
  pub const fn new(x: f64, y: f64) -> Vector {
    Vector { x, y }
  }

  /// Unit vector pointing at `angle` radians, measured counter-clockwise from +x.
  pub fn from_angle(angle: f64) -> Vector {
    let (sin, cos) = angle.sin_cos();
    Vector::new(cos, sin)
  }

  pub fn dot(&self, other: &Vector) -> f64 {
    self.x * other.x + self.y * other.y
  }

  /// Z component of the 3D cross product. Zero iff the vectors are parallel.
  pub fn cross(&self, other: &Vector) -> f64 {
    self.x * other.y - self.y * other.x
  }

  pub fn squared_magnitude(&self) -> f64 {
    self.dot(self)
  }

  pub fn magnitude(&self) -> f64 {
    self.x.hypot(self.y)
  }

  /// Scaled to unit length. `None` for the zero vector and for non-finite input.
  pub fn normalize(&self) -> Option<Vector> {
    let magnitude = self.magnitude();
    if magnitude == 0.0 || !magnitude.is_finite() {
      return None;
    }
    Some(Vector::new(self.x / magnitude, self.y / magnitude))
  }
}

impl Neg for Vector {
  type Output = Vector;
  fn neg(self) -> Vector {
    Vector::new(-self.x, -self.y)
  }
}

impl From<Point> for Vector {
  fn from(point: Point) -> Vector {
    point.as_vec()
  }
}

mod mul;
