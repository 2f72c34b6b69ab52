use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::{Point, Vector};
use crate::{Error, Result};

///////////////////////////////////////////////////////////////////////////////
// LineSegment

/// Segment from `p1` to `p2`.
///
/// Serializes as `{"p1": {"x": .., "y": ..}, "p2": {"x": .., "y": ..}}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
  pub p1: Point,
  pub p2: Point,
}

impl LineSegment {
  pub const fn new(p1: Point, p2: Point) -> LineSegment {
    LineSegment { p1, p2 }
  }

  pub fn direction(&self) -> Vector {
    self.p2 - self.p1
  }

  pub fn length(&self) -> f64 {
    self.direction().magnitude()
  }

  pub fn endpoints(&self) -> [Point; 2] {
    [self.p1, self.p2]
  }

  /// Same points, opposite direction.
  #[must_use]
  pub fn reversed(&self) -> LineSegment {
    LineSegment::new(self.p2, self.p1)
  }

  /// Point at parameter `u`, where `u = 0` is `p1` and `u = 1` is `p2`.
  pub fn point_at(&self, u: f64) -> Point {
    self.p1 + self.direction() * u
  }

  /// Finite coordinates and distinct endpoints.
  pub fn validate(&self) -> Result<()> {
    self.p1.validate()?;
    self.p2.validate()?;
    if self.p1 == self.p2 {
      return Err(Error::DegenerateWall);
    }
    Ok(())
  }
}

impl From<Range<Point>> for LineSegment {
  fn from(range: Range<Point>) -> LineSegment {
    LineSegment::new(range.start, range.end)
  }
}

impl From<Range<(f64, f64)>> for LineSegment {
  fn from(range: Range<(f64, f64)>) -> LineSegment {
    LineSegment::new(range.start.into(), range.end.into())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
