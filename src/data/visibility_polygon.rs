use super::{LineSegment, Point};

/// Region visible from an observer, as boundary points in counter-clockwise angular
/// order. The ring is implicitly closed: the last point connects back to the first.
///
/// Consecutive points may coincide or nearly coincide, since every wall vertex is
/// sampled by three rays.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisibilityPolygon {
  pub points: Vec<Point>,
}

impl VisibilityPolygon {
  pub fn new(points: Vec<Point>) -> VisibilityPolygon {
    VisibilityPolygon { points }
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point> {
    self.points.iter()
  }

  /// Boundary edges, including the closing edge from the last point to the first.
  pub fn edges(&self) -> EdgeIter<'_> {
    EdgeIter {
      points: &self.points,
      index: 0,
    }
  }

  /// Shoelace area. Positive for counter-clockwise rings.
  pub fn signed_area(&self) -> f64 {
    self
      .edges()
      .map(|edge| edge.p1.as_vec().cross(&edge.p2.as_vec()))
      .sum::<f64>()
      / 2.0
  }

  pub fn into_points(self) -> Vec<Point> {
    self.points
  }
}

impl<'a> IntoIterator for &'a VisibilityPolygon {
  type Item = &'a Point;
  type IntoIter = std::slice::Iter<'a, Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

pub struct EdgeIter<'a> {
  points: &'a [Point],
  index: usize,
}

impl<'a> Iterator for EdgeIter<'a> {
  type Item = LineSegment;
  fn next(&mut self) -> Option<LineSegment> {
    let this_point = self.points.get(self.index)?;
    let next_point = self.points[(self.index + 1) % self.points.len()];
    self.index += 1;
    Some(LineSegment::new(*this_point, next_point))
  }
}
