use super::{LineSegment, Point};

/// Why a wall is in the scene. Every wall blocks rays regardless of kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallKind {
  /// One of the four edges of the viewport. Regenerated on resize, never drawn.
  Boundary,
  /// Drawn by the user or loaded by bulk import.
  User,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
  pub segment: LineSegment,
  pub kind: WallKind,
}

impl Wall {
  pub fn new(segment: LineSegment, kind: WallKind) -> Wall {
    Wall { segment, kind }
  }

  pub fn user(segment: LineSegment) -> Wall {
    Wall::new(segment, WallKind::User)
  }

  pub fn boundary(segment: LineSegment) -> Wall {
    Wall::new(segment, WallKind::Boundary)
  }

  pub fn is_boundary(&self) -> bool {
    self.kind == WallKind::Boundary
  }

  /// Whether the host should draw this wall.
  pub fn is_rendered(&self) -> bool {
    match self.kind {
      WallKind::Boundary => false,
      WallKind::User => true,
    }
  }

  /// Whether rays stop at this wall. Always true.
  pub fn is_opaque(&self) -> bool {
    true
  }
}

/// Boundary walls of the rectangle `(0,0)-(width,height)`, counter-clockwise.
pub fn boundary_walls(width: f64, height: f64) -> [Wall; 4] {
  let corners = [
    Point::new(0.0, 0.0),
    Point::new(width, 0.0),
    Point::new(width, height),
    Point::new(0.0, height),
  ];
  std::array::from_fn(|i| Wall::boundary(LineSegment::new(corners[i], corners[(i + 1) % 4])))
}
