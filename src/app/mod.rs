//! Application-Layer: Controller, State, Events, Animatoren und Use-Cases.

pub mod animation;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod scheduler;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Tour-Sitzung (Route, Tour, Kamera, Animatoren).
pub mod state;
pub mod use_cases;

pub use crate::core::Camera3D;
pub use animation::{CameraOwner, PlaybackState, SpinDirection};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, TourEvent};
pub use scheduler::{FrameScheduler, ManualScheduler, RealtimeScheduler};
pub use state::AppState;
