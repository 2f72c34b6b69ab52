use log::trace;
use ordered_float::OrderedFloat;

use super::VisibilityConfig;
use crate::data::{HalfLine, LineSegment, Point, VisibilityPolygon};
use crate::nearest_hit;

// Algorithm overview:
//   1. Collect both endpoints of every wall. Shared vertices are kept twice; the
//      duplicate rays land on (nearly) the same point and leave the outline unchanged.
//   2. For every vertex, take the angle from the observer and also the angles just
//      before and just after it:
//
//          a - eps  ----> passes beside the vertex, may continue past the wall
//          a        ----> hits the vertex itself (or whatever occludes it)
//          a + eps  ----> passes on the other side
//
//      A single ray at the vertex cannot tell whether an edge of the silhouette starts
//      or ends there. The two neighbours reveal whether the outline steps behind the
//      wall or stays in front of it.
//   3. Sort every angle, globally, ascending.
//   4. Cast a unit ray per angle and keep the nearest wall it strikes.
//   5. Rays that strike nothing are dropped. The remaining hit points, in angle
//      order, are the polygon.
//
// Complexity: 3V rays, each tested against all W walls, O(V * W).
//
/// Computes the polygon visible from `observer` among opaque `walls`.
///
/// The result is ordered by angle around the observer, starting near `-pi`. Rays that
/// hit no wall are skipped, so an observer that is not enclosed by walls yields a
/// partial outline.
///
/// Pure: the same inputs always produce bit-identical output.
///
/// # Examples
///
/// ```rust
/// use sightline::data::{LineSegment, Point};
/// use sightline::{compute_visibility, VisibilityConfig};
///
/// let walls = [
///   LineSegment::from((0.0, 0.0)..(10.0, 0.0)),
///   LineSegment::from((10.0, 0.0)..(10.0, 10.0)),
///   LineSegment::from((10.0, 10.0)..(0.0, 10.0)),
///   LineSegment::from((0.0, 10.0)..(0.0, 0.0)),
/// ];
/// let polygon = compute_visibility(&Point::new(5.0, 5.0), &walls, &VisibilityConfig::default());
/// // Eight vertices, three rays each, all of them land on the boundary.
/// assert_eq!(polygon.len(), 24);
/// ```
pub fn compute_visibility<'a, I>(
  observer: &Point,
  walls: I,
  config: &VisibilityConfig,
) -> VisibilityPolygon
where
  I: IntoIterator<Item = &'a LineSegment>,
{
  let walls: Vec<&LineSegment> = walls.into_iter().collect();
  let epsilon = config.epsilon;

  let mut angles: Vec<f64> = walls
    .iter()
    .flat_map(|wall| wall.endpoints())
    .map(|vertex| observer.angle_to(&vertex))
    .flat_map(|angle| [angle - epsilon, angle, angle + epsilon])
    .collect();
  angles.sort_unstable_by_key(|&angle| OrderedFloat(angle));

  let points: Vec<Point> = angles
    .iter()
    .filter_map(|&angle| {
      let ray = HalfLine::from_angle(*observer, angle);
      nearest_hit(&ray, walls.iter().copied())
    })
    .map(|hit| hit.point)
    .collect();

  trace!(
    "visibility from ({}, {}): {} walls, {} rays, {} hits",
    observer.x,
    observer.y,
    walls.len(),
    angles.len(),
    points.len()
  );

  VisibilityPolygon::new(points)
}

#[cfg(test)]
mod naive_testing {
  use super::*;
  use crate::data::boundary_walls;
  use crate::testing::*;

  use proptest::prelude::*;
  use std::f64::consts::PI;
  use test_strategy::proptest;

  fn rectangle(width: f64, height: f64) -> Vec<LineSegment> {
    boundary_walls(width, height)
      .iter()
      .map(|wall| wall.segment)
      .collect()
  }

  fn near(a: &Point, b: &Point, tolerance: f64) -> bool {
    a.euclidean_distance(b) <= tolerance
  }

  fn is_angle_sorted(observer: &Point, points: &[Point]) -> bool {
    points
      .windows(2)
      .all(|pair| observer.angle_to(&pair[0]) <= observer.angle_to(&pair[1]) + 1e-6)
  }

  #[test]
  fn empty_room_is_its_corners() {
    let observer = Point::new(30.0, 60.0);
    let corners = [
      Point::new(0.0, 0.0),
      Point::new(100.0, 0.0),
      Point::new(100.0, 100.0),
      Point::new(0.0, 100.0),
    ];
    let polygon = compute_visibility(&observer, &rectangle(100.0, 100.0), &Default::default());

    // Every vertex appears twice (once per adjacent wall), three rays each.
    assert_eq!(polygon.len(), 24);
    for point in &polygon {
      assert!(corners.iter().any(|corner| near(point, corner, 0.01)));
    }
    for corner in &corners {
      assert!(polygon.iter().any(|point| near(point, corner, 0.01)));
    }
    // Angular order around the observer: (0,0), (100,0), (100,100), (0,100).
    let mut order: Vec<usize> = polygon
      .iter()
      .map(|p| corners.iter().position(|c| near(p, c, 0.01)).unwrap())
      .collect();
    order.dedup();
    assert_eq!(order, vec![0, 1, 2, 3]);
    assert!((polygon.signed_area() - 10_000.0).abs() < 1.0);
  }

  #[test]
  fn wall_casts_shadow() {
    let observer = Point::new(50.0, 50.0);
    let mut walls = rectangle(100.0, 100.0);
    walls.push(LineSegment::from((60.0, 40.0)..(60.0, 60.0)));
    let polygon = compute_visibility(&observer, &walls, &Default::default());

    let expected = [
      Point::new(0.0, 0.0),
      Point::new(0.0, 100.0),
      Point::new(100.0, 0.0),
      Point::new(100.0, 100.0),
      Point::new(60.0, 40.0),
      Point::new(60.0, 60.0),
    ];
    for point in &expected {
      assert!(
        polygon.iter().any(|p| near(p, point, 0.01)),
        "missing {:?}",
        point
      );
    }
    // Nothing strictly inside the shadow cone behind the wall.
    for point in &polygon {
      let dx = point.x - observer.x;
      let dy = point.y - observer.y;
      let behind = point.x > 60.01 && dy.abs() < dx - 0.1;
      assert!(!behind, "{:?} is behind the wall", point);
    }
    assert!(is_angle_sorted(&observer, &polygon.points));
  }

  #[test]
  fn shadow_reaches_far_wall() {
    // Rays grazing the wall ends continue to the far boundary.
    let observer = Point::new(50.0, 50.0);
    let mut walls = rectangle(100.0, 100.0);
    walls.push(LineSegment::from((60.0, 45.0)..(60.0, 55.0)));
    let polygon = compute_visibility(&observer, &walls, &Default::default());
    // Line from (50,50) through (60,45) meets x = 100 at y = 25.
    assert!(polygon.iter().any(|p| near(p, &Point::new(100.0, 25.0), 0.01)));
    assert!(polygon.iter().any(|p| near(p, &Point::new(100.0, 75.0), 0.01)));
  }

  #[test]
  fn unenclosed_observer_drops_misses() {
    let walls = [LineSegment::from((1.0, -1.0)..(1.0, 1.0))];
    let polygon = compute_visibility(&Point::new(0.0, 0.0), &walls, &Default::default());
    // Only rays towards the wall hit; the outward-perturbed ones miss.
    assert!(!polygon.is_empty());
    assert!(polygon.len() < 6);
    for point in &polygon {
      assert!((point.x - 1.0).abs() < 1e-9);
    }
  }

  #[test]
  fn no_walls_no_polygon() {
    let walls: Vec<LineSegment> = Vec::new();
    assert!(compute_visibility(&Point::new(0.0, 0.0), &walls, &Default::default()).is_empty());
  }

  #[test]
  fn larger_epsilon_moves_side_rays() {
    let observer = Point::new(50.0, 50.0);
    let walls = rectangle(100.0, 100.0);
    let fine = compute_visibility(&observer, &walls, &Default::default());
    let coarse = compute_visibility(&observer, &walls, &VisibilityConfig::new(1e-2).unwrap());
    assert_eq!(fine.len(), coarse.len());
    assert_ne!(fine, coarse);
  }

  #[proptest]
  fn idempotent(#[strategy(any_scene())] scene: ArbitraryScene) {
    let first = compute_visibility(&scene.observer, &scene.walls, &Default::default());
    let second = compute_visibility(&scene.observer, &scene.walls, &Default::default());
    prop_assert_eq!(
      first.points.iter().map(|p| (p.x.to_bits(), p.y.to_bits())).collect::<Vec<_>>(),
      second.points.iter().map(|p| (p.x.to_bits(), p.y.to_bits())).collect::<Vec<_>>()
    );
  }

  #[proptest]
  fn enclosed_observer_hits_every_ray(#[strategy(any_scene())] scene: ArbitraryScene) {
    let polygon = compute_visibility(&scene.observer, &scene.walls, &Default::default());
    prop_assert_eq!(polygon.len(), scene.walls.len() * 2 * 3);
    // Star-shaped around the observer and counter-clockwise.
    prop_assert!(polygon.signed_area() > 0.0);
  }

  #[proptest]
  fn rotation_keeps_point_set(
    #[strategy(any_scene())] scene: ArbitraryScene,
    #[strategy(0..64usize)] shift: usize,
  ) {
    let mut rotated = scene.walls.clone();
    let len = rotated.len();
    rotated.rotate_left(shift % len);

    let original = compute_visibility(&scene.observer, &scene.walls, &Default::default());
    let shifted = compute_visibility(&scene.observer, &rotated, &Default::default());
    // Walls meeting at a vertex tie on distance and may round the shared hit point
    // differently, so compare as sets up to rounding.
    prop_assert_eq!(original.len(), shifted.len());
    for point in &original {
      prop_assert!(shifted.iter().any(|q| near(point, q, 1e-9)));
    }
    for point in &shifted {
      prop_assert!(original.iter().any(|q| near(point, q, 1e-9)));
    }
  }

  #[proptest]
  fn points_stay_in_room(#[strategy(any_scene())] scene: ArbitraryScene) {
    let polygon = compute_visibility(&scene.observer, &scene.walls, &Default::default());
    for point in &polygon {
      prop_assert!(point.x >= -1e-6 && point.x <= scene.width + 1e-6);
      prop_assert!(point.y >= -1e-6 && point.y <= scene.height + 1e-6);
    }
  }

  #[test]
  fn rotating_room() {
    // Square room rotated in small steps around an observer at its centre.
    for i in 0..100 {
      let theta = PI / 2.0 * f64::from(i) / 100.0;
      let corner = |k: i32| {
        let a = theta + PI / 2.0 * f64::from(k);
        Point::new(a.cos(), a.sin())
      };
      let walls: Vec<LineSegment> = (0..4)
        .map(|k| LineSegment::new(corner(k), corner(k + 1)))
        .collect();
      let polygon = compute_visibility(&Point::new(0.0, 0.0), &walls, &Default::default());
      assert_eq!(polygon.len(), 24);
      for point in &polygon {
        let r = point.as_vec().magnitude();
        assert!(r <= 1.0 + 1e-9 && r >= std::f64::consts::FRAC_1_SQRT_2 - 1e-9);
      }
    }
  }
}
