// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Visibility polygons for a 2D scene of opaque line-segment walls.
//!
//! Rays are cast from an observer towards every wall vertex (and slightly to either
//! side of it). The nearest wall each ray strikes becomes a vertex of the visibility
//! polygon.
//!
//! ```rust
//! use sightline::data::{LineSegment, Point, Scene};
//!
//! let mut scene = Scene::new(100.0, 100.0)?;
//! scene.add_wall(LineSegment::new(Point::new(60.0, 40.0), Point::new(60.0, 60.0)))?;
//! let polygon = scene.visibility(&Point::new(50.0, 50.0))?;
//! assert!(!polygon.is_empty());
//! # Ok::<(), sightline::Error>(())
//! ```
pub mod algorithms;
pub mod data;
mod error;
mod intersection;

pub use error::{Error, Result};

pub use intersection::{
  intersect_ray, nearest_hit, Intersects, NearestHit, RayHit, PARALLEL_TOLERANCE,
  PARAMETER_TOLERANCE,
};

pub use algorithms::visibility::{compute_visibility, VisibilityConfig, DEFAULT_EPSILON};

#[cfg(test)]
pub mod testing;
