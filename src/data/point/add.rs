use std::ops::Add;
use std::ops::AddAssign;

use crate::data::Point;
use crate::data::Vector;

// point + vector = point
impl Add<Vector> for Point {
  type Output = Point;

  fn add(self, other: Vector) -> Point {
    Point::new(self.x + other.x, self.y + other.y)
  }
}

// &point + &vector = point
impl<'a, 'b> Add<&'a Vector> for &'b Point {
  type Output = Point;

  fn add(self, other: &'a Vector) -> Point {
    *self + *other
  }
}

// point += vector
impl AddAssign<Vector> for Point {
  fn add_assign(&mut self, other: Vector) {
    self.x += other.x;
    self.y += other.y;
  }
}
