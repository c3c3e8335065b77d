//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod options;
pub mod playback;
pub mod positioning;
pub mod route;
pub mod spin;
