use std::ops::Mul;

use crate::data::Vector;

// vector * scalar = vector
impl Mul<f64> for Vector {
  type Output = Vector;

  fn mul(self, scalar: f64) -> Vector {
    Vector::new(self.x * scalar, self.y * scalar)
  }
}

// scalar * vector = vector
impl Mul<Vector> for f64 {
  type Output = Vector;

  fn mul(self, vector: Vector) -> Vector {
    vector * self
  }
}
