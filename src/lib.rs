//! Pipeline-Tour Library.
//! Routen-Pipeline, Kamera-Positionierung und Tour-Animation als Library
//! exportiert für Hosts, Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod json;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CameraOwner, FrameScheduler,
    ManualScheduler, PlaybackState, RealtimeScheduler, SpinDirection, TourEvent,
};
pub use core::{
    build_route, nearest_vertex_index, pose_at, Camera3D, CameraPose, ChaikinVariant, ConfigError,
    Path, Point3M, RouteIndex, RouteParams, SmoothingOptions, SpatialReference, TourError,
    TourState,
};
pub use json::{load_route_file, parse_route_document, write_route_document};
pub use shared::TourOptions;
