//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app` und die Binary gemeinsam nutzen.

pub mod options;

pub use options::TourOptions;
pub use options::{LOOP_PAUSE_MS, PLAYBACK_FPS_FAST, PLAYBACK_FPS_SLOW};
