use ordered_float::OrderedFloat;

use crate::data::{HalfLine, LineSegment, Point};

pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}

/// Normalized directions whose cross product is at most this far from zero are
/// treated as parallel.
pub const PARALLEL_TOLERANCE: f64 = 1e-12;

/// Slack on the segment parameter. A ray aimed exactly at the corner shared by two
/// walls can round to just outside both; this keeps it on at least one.
pub const PARAMETER_TOLERANCE: f64 = 1e-9;

/// Where a ray struck a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
  pub point: Point,
  /// Euclidean distance from the ray origin to `point`.
  pub distance: f64,
}

// Ray / segment intersection.
//
//   origin + t * d = a + u * e
//
// Solved with cross products. Valid when t >= 0 and u is in [0, 1].
impl Intersects<&LineSegment> for &HalfLine {
  type Result = RayHit;
  fn intersect(self, target: &LineSegment) -> Option<RayHit> {
    let d = self.direction_vector();
    let e = target.direction();

    let d_unit = d.normalize()?;
    let e_unit = e.normalize()?;
    // Equal or opposite unit directions: the lines never cross at a single point.
    if d_unit.cross(&e_unit).abs() <= PARALLEL_TOLERANCE {
      return None;
    }

    let denominator = d.cross(&e);
    if denominator == 0.0 {
      return None;
    }
    let w = target.p1 - self.origin;
    let t = w.cross(&e) / denominator;
    let u = w.cross(&d) / denominator;

    if !(t >= 0.0) || !(-PARAMETER_TOLERANCE..=1.0 + PARAMETER_TOLERANCE).contains(&u) {
      return None;
    }

    let offset = d * t;
    let point = self.origin + offset;
    let distance = offset.magnitude();
    if point.is_finite() && distance.is_finite() {
      Some(RayHit { point, distance })
    } else {
      None
    }
  }
}

impl Intersects<&LineSegment> for HalfLine {
  type Result = RayHit;
  fn intersect(self, target: &LineSegment) -> Option<RayHit> {
    (&self).intersect(target)
  }
}

/// Treats `ray` as a half-line from `ray.p1` through `ray.p2` and intersects it with
/// the bounded segment `target`.
pub fn intersect_ray(ray: &LineSegment, target: &LineSegment) -> Option<RayHit> {
  HalfLine::from(ray).intersect(target)
}

/// Closest hit of `ray` among `walls`. `None` if every wall is missed.
pub fn nearest_hit<'a, I>(ray: &HalfLine, walls: I) -> Option<RayHit>
where
  I: IntoIterator<Item = &'a LineSegment>,
{
  let mut nearest = NearestHit::new();
  for wall in walls {
    if let Some(hit) = ray.intersect(wall) {
      nearest.push(hit);
    }
  }
  nearest.take()
}

/// Keeps only the hit closest to the ray origin. Ties go to the first hit pushed.
#[derive(Debug, Default)]
pub struct NearestHit {
  nearest: Option<RayHit>,
}

impl NearestHit {
  pub fn new() -> NearestHit {
    NearestHit { nearest: None }
  }

  pub fn push(&mut self, hit: RayHit) {
    match &self.nearest {
      Some(previous) if OrderedFloat(previous.distance) <= OrderedFloat(hit.distance) => (),
      _ => self.nearest = Some(hit),
    }
  }

  pub fn take(self) -> Option<RayHit> {
    self.nearest
  }
}
