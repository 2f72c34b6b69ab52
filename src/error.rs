use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
  #[error("Invalid viewport {width}x{height}: dimensions must be finite and positive")]
  InvalidViewport { width: f64, height: f64 },
  #[error("Coordinates must be finite")]
  NonFiniteCoordinate,
  #[error("Wall endpoints coincide")]
  DegenerateWall,
  #[error("Wall extends outside the {width}x{height} viewport")]
  WallOutsideViewport { width: f64, height: f64 },
  #[error("Observer lies outside the viewport")]
  ObserverOutsideViewport,
  #[error("Scene does not hold the boundary walls of its viewport")]
  MissingBoundary,
  #[error("Wall {index} is a boundary wall and cannot be removed")]
  BoundaryWall { index: usize },
  #[error("Polyline needs at least {min} points, got {len}")]
  ShortPolyline { len: usize, min: usize },
  #[error("Wall index {index} out of range for {len} walls")]
  WallIndexOutOfRange { index: usize, len: usize },
  /// A bulk-import record was rejected. Nothing was imported.
  #[error("Record {index} rejected: {source}")]
  InvalidRecord {
    index: usize,
    #[source]
    source: Box<Error>,
  },
  #[error("Epsilon must be finite and in (0, pi/4), got {0}")]
  InvalidEpsilon(f64),
  #[error("Malformed wall records: {0}")]
  Json(#[from] serde_json::Error),
  #[error("Malformed configuration: {0}")]
  Config(#[from] toml::de::Error),
}
