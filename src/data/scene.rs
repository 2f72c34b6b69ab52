use claims::debug_assert_ok;
use log::{debug, warn};
use rand::Rng;
use std::ops::Range;

use super::{boundary_walls, LineSegment, Point, VisibilityPolygon, Wall};
use crate::algorithms::visibility::{compute_visibility, VisibilityConfig};
use crate::{Error, Result};

///////////////////////////////////////////////////////////////////////////////
// Viewport

/// The rectangle `(0,0)-(width,height)` that encloses the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
  pub width: f64,
  pub height: f64,
}

impl Viewport {
  pub fn new(width: f64, height: f64) -> Result<Viewport> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if valid(width) && valid(height) {
      Ok(Viewport { width, height })
    } else {
      Err(Error::InvalidViewport { width, height })
    }
  }

  /// Closed containment: points on the border are inside.
  pub fn contains(&self, point: &Point) -> bool {
    (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
  }

  /// Open containment: points on the border are outside.
  pub fn contains_strictly(&self, point: &Point) -> bool {
    point.x > 0.0 && point.x < self.width && point.y > 0.0 && point.y < self.height
  }

  pub fn contains_segment(&self, segment: &LineSegment) -> bool {
    self.contains(&segment.p1) && self.contains(&segment.p2)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Scene

/// The wall set and viewport the host mutates through UI events.
///
/// Always holds the four boundary walls of the current viewport. User walls are kept
/// in insertion order and addressed by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
  viewport: Viewport,
  walls: Vec<Wall>,
  config: VisibilityConfig,
}

impl Scene {
  pub fn new(width: f64, height: f64) -> Result<Scene> {
    let viewport = Viewport::new(width, height)?;
    let scene = Scene {
      viewport,
      walls: boundary_walls(width, height).to_vec(),
      config: VisibilityConfig::default(),
    };
    debug_assert_ok!(scene.validate());
    Ok(scene)
  }

  pub fn with_config(mut self, config: VisibilityConfig) -> Result<Scene> {
    config.validate()?;
    self.config = config;
    Ok(self)
  }

  /// A scene with `n` random user walls inside the viewport.
  pub fn random<R>(width: f64, height: f64, n: usize, rng: &mut R) -> Result<Scene>
  where
    R: Rng + ?Sized,
  {
    let mut scene = Scene::new(width, height)?;
    let random_point =
      |rng: &mut R| Point::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
    while scene.user_walls().count() < n {
      let segment = LineSegment::new(random_point(rng), random_point(rng));
      // Skip zero-length draws.
      if segment.validate().is_ok() {
        scene.add_wall(segment)?;
      }
    }
    Ok(scene)
  }

  pub fn viewport(&self) -> &Viewport {
    &self.viewport
  }

  pub fn config(&self) -> &VisibilityConfig {
    &self.config
  }

  pub fn walls(&self) -> &[Wall] {
    &self.walls
  }

  pub fn user_walls(&self) -> impl Iterator<Item = &Wall> + '_ {
    self.walls.iter().filter(|wall| !wall.is_boundary())
  }

  /// Every wall that blocks rays, boundary included.
  pub fn segments(&self) -> impl Iterator<Item = &LineSegment> + '_ {
    self
      .walls
      .iter()
      .filter(|wall| wall.is_opaque())
      .map(|wall| &wall.segment)
  }

  /// Appends a user wall and returns its position in [`Scene::walls`].
  pub fn add_wall(&mut self, segment: LineSegment) -> Result<usize> {
    self.check_user_segment(&segment)?;
    self.walls.push(Wall::user(segment));
    Ok(self.walls.len() - 1)
  }

  /// Removes the user wall at `index`. Later walls shift down by one.
  pub fn remove_wall(&mut self, index: usize) -> Result<Wall> {
    match self.walls.get(index) {
      None => Err(Error::WallIndexOutOfRange {
        index,
        len: self.walls.len(),
      }),
      Some(wall) if wall.is_boundary() => Err(Error::BoundaryWall { index }),
      Some(_) => Ok(self.walls.remove(index)),
    }
  }

  /// Removes every user wall. Boundary walls stay.
  pub fn clear_walls(&mut self) {
    let before = self.walls.len();
    self.walls.retain(Wall::is_boundary);
    debug!("cleared {} user walls", before - self.walls.len());
    debug_assert_ok!(self.validate());
  }

  /// Replaces the boundary walls with those of a `width` x `height` viewport. User walls
  /// are kept even if they no longer fit.
  pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
    let viewport = Viewport::new(width, height)?;
    self.viewport = viewport;
    self.walls.retain(|wall| !wall.is_boundary());
    for wall in self.walls.iter() {
      if !viewport.contains_segment(&wall.segment) {
        warn!(
          "wall {:?} extends outside the {}x{} viewport",
          wall.segment, width, height
        );
      }
    }
    self.walls.extend(boundary_walls(width, height));
    debug!(
      "resized viewport to {}x{}, {} user walls kept",
      width,
      height,
      self.walls.len() - 4
    );
    debug_assert_ok!(self.validate());
    Ok(())
  }

  /// Appends every record as a user wall. Either all records are imported or none:
  /// the first invalid record aborts the import and leaves the scene untouched.
  pub fn import_records<I>(&mut self, records: I) -> Result<usize>
  where
    I: IntoIterator<Item = LineSegment>,
  {
    let records: Vec<LineSegment> = records.into_iter().collect();
    for (index, record) in records.iter().enumerate() {
      self
        .check_user_segment(record)
        .map_err(|source| Error::InvalidRecord {
          index,
          source: Box::new(source),
        })?;
    }
    let count = records.len();
    self.walls.extend(records.into_iter().map(Wall::user));
    debug!("imported {} walls", count);
    Ok(count)
  }

  /// Chains `points` into user walls sharing endpoints. With `closed`, a last wall
  /// joins the final point back to the first. Either every wall is added or none.
  ///
  /// Returns the positions of the new walls in [`Scene::walls`].
  pub fn add_polyline<I>(&mut self, points: I, closed: bool) -> Result<Range<usize>>
  where
    I: IntoIterator<Item = Point>,
  {
    let points: Vec<Point> = points.into_iter().collect();
    let min = if closed { 3 } else { 2 };
    if points.len() < min {
      return Err(Error::ShortPolyline {
        len: points.len(),
        min,
      });
    }
    let mut records: Vec<LineSegment> = points
      .windows(2)
      .map(|pair| LineSegment::new(pair[0], pair[1]))
      .collect();
    if closed {
      records.push(LineSegment::new(points[points.len() - 1], points[0]));
    }
    let start = self.walls.len();
    let count = self.import_records(records)?;
    Ok(start..start + count)
  }

  /// Imports a JSON array of `{"p1": {"x", "y"}, "p2": {"x", "y"}}` records.
  pub fn import_json(&mut self, json: &str) -> Result<usize> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let records = values
      .into_iter()
      .enumerate()
      .map(|(index, value)| {
        serde_json::from_value::<LineSegment>(value).map_err(|err| Error::InvalidRecord {
          index,
          source: Box::new(Error::Json(err)),
        })
      })
      .collect::<Result<Vec<LineSegment>>>()?;
    self.import_records(records)
  }

  /// User walls in insertion order, in the shape accepted by [`Scene::import_records`].
  /// Boundary walls are derived from the viewport and not exported.
  pub fn export_records(&self) -> Vec<LineSegment> {
    self.user_walls().map(|wall| wall.segment).collect()
  }

  pub fn export_json(&self) -> Result<String> {
    Ok(serde_json::to_string(&self.export_records())?)
  }

  /// Visibility polygon seen from `observer`, which must lie strictly inside the
  /// viewport. An observer on the border sits on a boundary wall and would see nothing.
  pub fn visibility(&self, observer: &Point) -> Result<VisibilityPolygon> {
    observer.validate()?;
    if !self.viewport.contains_strictly(observer) {
      return Err(Error::ObserverOutsideViewport);
    }
    let polygon = compute_visibility(observer, self.segments(), &self.config);
    let rays = self.segments().count() * 2 * 3;
    if polygon.len() < rays {
      warn!(
        "{} of {} rays from ({}, {}) hit no wall",
        rays - polygon.len(),
        rays,
        observer.x,
        observer.y
      );
    }
    Ok(polygon)
  }

  /// Checks that the scene holds exactly the boundary walls of its viewport.
  pub fn validate(&self) -> Result<()> {
    let boundary: Vec<&Wall> = self.walls.iter().filter(|wall| wall.is_boundary()).collect();
    let expected = boundary_walls(self.viewport.width, self.viewport.height);
    if boundary.len() != expected.len()
      || boundary.iter().zip(expected.iter()).any(|(a, b)| *a != b)
    {
      return Err(Error::MissingBoundary);
    }
    Ok(())
  }

  fn check_user_segment(&self, segment: &LineSegment) -> Result<()> {
    segment.validate()?;
    if !self.viewport.contains_segment(segment) {
      return Err(Error::WallOutsideViewport {
        width: self.viewport.width,
        height: self.viewport.height,
      });
    }
    Ok(())
  }
}
