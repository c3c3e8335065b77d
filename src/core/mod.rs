//! Core-Domänentypen: Punkte, Pfade, Routen-Pipeline, Tour-Zustand, Kamera, Spatial-Index.

pub mod camera;
pub mod error;
pub mod geodesy;
pub mod locator;
pub mod path;
/// Routen-Pipeline
///
/// Baut aus einer Quell-Geometrie die abspielbare Route:
/// - Vereinfachen, Distanz entlang, Verdichten
/// - Chaikin-Glättung
/// - Höhenversatz
pub mod pipeline;
pub mod point;
pub mod positioner;
pub mod spatial;
pub mod tour_state;

pub use camera::{Camera3D, CameraPose};
pub use error::{ConfigError, TourError, MAX_SMOOTHING_ITERATIONS};
pub use geodesy::{inverse_geodetic, normalize_degrees, GeodesicInverse, LatLon, SpatialReference};
pub use locator::nearest_vertex_index;
pub use path::Path;
pub use pipeline::{
    build_route, ChaikinVariant, RouteParams, SmoothingOptions, DEFAULT_DENSIFY_INTERVAL,
    DEFAULT_SIMPLIFY_TOLERANCE,
};
pub use point::Point3M;
pub use positioner::{lookahead_index, pose_at};
pub use spatial::{RouteIndex, VertexMatch};
pub use tour_state::TourState;
