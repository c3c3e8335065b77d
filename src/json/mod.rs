//! JSON Import/Export für Routen-Geometrien.
//!
//! Format: `{ "spatial_reference", "has_z", "has_m", "paths": [[[x, y, z?, m?], ...], ...] }`.
//! Die Koordinaten-Tupel folgen den Dimensions-Flags: `z` nur mit `has_z`,
//! `m` immer an letzter Stelle.

pub mod parser;
pub mod writer;

pub use parser::{load_route_file, parse_route_document, RouteDocument};
pub use writer::write_route_document;
