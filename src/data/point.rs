use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::Vector;
use crate::{Error, Result};

/// A location in the plane.
///
/// Serializes as `{"x": .., "y": ..}`, the shape used by wall import/export.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub const fn new(x: f64, y: f64) -> Point {
    Point { x, y }
  }

  /// Like [`Point::new`] but rejects NaN and infinite coordinates.
  pub fn try_new(x: f64, y: f64) -> Result<Point> {
    let point = Point::new(x, y);
    point.validate()?;
    Ok(point)
  }

  pub fn validate(&self) -> Result<()> {
    if self.is_finite() {
      Ok(())
    } else {
      Err(Error::NonFiniteCoordinate)
    }
  }

  pub fn is_finite(&self) -> bool {
    self.x.is_finite() && self.y.is_finite()
  }

  pub fn as_vec(&self) -> Vector {
    Vector::new(self.x, self.y)
  }

  /// Angle of `other` as seen from `self`, in radians in `(-pi, pi]`.
  pub fn angle_to(&self, other: &Point) -> f64 {
    (other.y - self.y).atan2(other.x - self.x)
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point) -> f64 {
    (*rhs - *self).squared_magnitude()
  }

  pub fn euclidean_distance(&self, rhs: &Point) -> f64 {
    self.squared_euclidean_distance(rhs).sqrt()
  }

  pub fn cmp_distance_to(&self, p: &Point, q: &Point) -> Ordering {
    self
      .squared_euclidean_distance(p)
      .total_cmp(&self.squared_euclidean_distance(q))
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point::new(point.0, point.1)
  }
}

impl From<Vector> for Point {
  fn from(vector: Vector) -> Point {
    Point::new(vector.x, vector.y)
  }
}

mod add;
mod sub;
