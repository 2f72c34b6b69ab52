use super::{LineSegment, Point, Vector};

///////////////////////////////////////////////////////////////////////////////
// Direction

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
  Vector(Vector),
  Through(Point),
}

///////////////////////////////////////////////////////////////////////////////
// Half-line

/// A ray: starts at `origin` and extends forever along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfLine {
  pub origin: Point,
  pub direction: Direction,
}

impl HalfLine {
  pub fn new(origin: Point, direction: Direction) -> HalfLine {
    HalfLine { origin, direction }
  }

  pub fn new_directed(origin: Point, vector: Vector) -> HalfLine {
    HalfLine::new(origin, Direction::Vector(vector))
  }

  pub fn new_through(origin: Point, through: Point) -> HalfLine {
    HalfLine::new(origin, Direction::Through(through))
  }

  /// Unit-length ray leaving `origin` at `angle` radians.
  pub fn from_angle(origin: Point, angle: f64) -> HalfLine {
    HalfLine::new_directed(origin, Vector::from_angle(angle))
  }

  pub fn direction_vector(&self) -> Vector {
    match self.direction {
      Direction::Vector(vector) => vector,
      Direction::Through(through) => through - self.origin,
    }
  }
}

// The segment's first point is the origin and its second point fixes the direction.
impl From<LineSegment> for HalfLine {
  fn from(segment: LineSegment) -> HalfLine {
    HalfLine::new_through(segment.p1, segment.p2)
  }
}

impl From<&LineSegment> for HalfLine {
  fn from(segment: &LineSegment) -> HalfLine {
    HalfLine::from(*segment)
  }
}
