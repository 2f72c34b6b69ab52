// This module contains strategies for:
//  * points
//  * line segments
//  * enclosed scenes (observer inside a boundary rectangle with interior walls)
// A Strategy is a way to generate a shrinkable value.
use crate::data::{boundary_walls, LineSegment, Point};

use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;

// Coordinates stay in a range where products of differences are exact enough for the
// tolerances used by the tests.
const COORD_RANGE: std::ops::Range<f64> = -1000.0..1000.0;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

fn to_point((x, y): (f64, f64)) -> Point {
  Point::new(x, y)
}

impl Arbitrary for Point {
  type Strategy = Map<(std::ops::Range<f64>, std::ops::Range<f64>), fn((f64, f64)) -> Point>;
  type Parameters = ();
  fn arbitrary_with(_params: ()) -> Self::Strategy {
    (COORD_RANGE, COORD_RANGE).prop_map(to_point as fn(_) -> _)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary line segment

impl Arbitrary for LineSegment {
  type Strategy = Mapped<(Point, Point), LineSegment>;
  type Parameters = ();
  fn arbitrary_with(_params: ()) -> Self::Strategy {
    any::<(Point, Point)>()
      .prop_map((|(p1, p2): (Point, Point)| LineSegment::new(p1, p2)) as fn(_) -> _)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Enclosed scenes

/// Observer strictly inside a `width` x `height` room whose first four walls are the
/// boundary. Interior walls lie inside the room.
#[derive(Debug, Clone)]
pub struct ArbitraryScene {
  pub width: f64,
  pub height: f64,
  pub observer: Point,
  pub walls: Vec<LineSegment>,
}

fn inside(width: f64, height: f64) -> impl Strategy<Value = Point> {
  (0.01..0.99f64, 0.01..0.99f64).prop_map(move |(fx, fy)| Point::new(fx * width, fy * height))
}

pub fn any_scene() -> impl Strategy<Value = ArbitraryScene> {
  (10.0..1000.0f64, 10.0..1000.0f64).prop_flat_map(|(width, height)| {
    (
      inside(width, height),
      vec((inside(width, height), inside(width, height)), 0..8),
    )
      .prop_map(move |(observer, interior)| {
        let mut walls: Vec<LineSegment> = boundary_walls(width, height)
          .iter()
          .map(|wall| wall.segment)
          .collect();
        walls.extend(interior.into_iter().map(|(p1, p2)| LineSegment::new(p1, p2)));
        ArbitraryScene {
          width,
          height,
          observer,
          walls,
        }
      })
  })
}
