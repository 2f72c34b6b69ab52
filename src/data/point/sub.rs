use std::ops::Sub;

use crate::data::Point;
use crate::data::Vector;

// point - point = vector
impl Sub<Point> for Point {
  type Output = Vector;

  fn sub(self, other: Point) -> Vector {
    Vector::new(self.x - other.x, self.y - other.y)
  }
}

// &point - &point = vector
impl<'a, 'b> Sub<&'a Point> for &'b Point {
  type Output = Vector;

  fn sub(self, other: &'a Point) -> Vector {
    *self - *other
  }
}

// point - vector = point
impl Sub<Vector> for Point {
  type Output = Point;

  fn sub(self, other: Vector) -> Point {
    Point::new(self.x - other.x, self.y - other.y)
  }
}
