//! Langlebiger Tour-Zustand: aktueller Index, Grenzen und Tour-Parameter.

use super::error::{ensure_densify_interval, ensure_finite, ensure_fps, ensure_non_negative};
use super::pipeline::DEFAULT_DENSIFY_INTERVAL;
use super::ConfigError;

/// Standard-Vorausschau-Distanz in Metern.
pub const DEFAULT_LOOKAHEAD_DISTANCE: f64 = 25.0;
/// Standard-Neigung der Kamera in Grad (90 = Horizont).
pub const DEFAULT_LOOKDOWN_TILT_DEG: f64 = 85.0;
/// Standard-Bildrate der Tour (langsam).
pub const DEFAULT_PLAYBACK_FPS: f64 = 3.0;

/// Index-Zustand und Parameter der Tour.
///
/// Invariante: `-1 <= point_index <= max_index`. `point_index == -1`
/// bedeutet "keine Route geladen".
#[derive(Debug, Clone, PartialEq)]
pub struct TourState {
    /// Aktueller Vertex-Index im ersten Part der Route
    pub point_index: i64,
    /// Letzter gültiger Index (`len - 1`)
    pub max_index: i64,
    /// Höhenversatz der Route in Metern
    pub offset_z: f64,
    /// Verdichtungsintervall in Metern
    pub densify_interval: f64,
    /// Vorausschau-Distanz für die Blickrichtung in Metern
    pub lookahead_distance: f64,
    /// Kamera-Neigung in Grad
    pub lookdown_tilt_deg: f64,
    /// Aktuelle Bildrate der Wiedergabe
    pub playback_fps: f64,
}

impl Default for TourState {
    fn default() -> Self {
        Self {
            point_index: -1,
            max_index: -1,
            offset_z: 0.0,
            densify_interval: DEFAULT_DENSIFY_INTERVAL,
            lookahead_distance: DEFAULT_LOOKAHEAD_DISTANCE,
            lookdown_tilt_deg: DEFAULT_LOOKDOWN_TILT_DEG,
            playback_fps: DEFAULT_PLAYBACK_FPS,
        }
    }
}

impl TourState {
    /// Erstellt einen Zustand ohne geladene Route.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` wenn eine Route geladen ist (auch eine degenerierte).
    pub fn has_route(&self) -> bool {
        self.point_index >= 0
    }

    /// Setzt den Index nach einem Neuaufbau zurück.
    ///
    /// Degenerierte Routen (0 oder 1 Vertex) erhalten `max_index = 0`.
    pub fn reset_for_route(&mut self, vertex_count: usize) {
        self.point_index = 0;
        self.max_index = vertex_count.saturating_sub(1) as i64;
    }

    /// Entfernt die Route aus dem Zustand.
    pub fn clear_route(&mut self) {
        self.point_index = -1;
        self.max_index = -1;
    }

    /// Setzt den Index, begrenzt auf `[0, max_index]`. Gibt den neuen Index zurück.
    pub fn seek(&mut self, index: i64) -> i64 {
        if self.has_route() {
            self.point_index = index.clamp(0, self.max_index.max(0));
        }
        self.point_index
    }

    /// Verschiebt den Index relativ, begrenzt auf die Route.
    pub fn step(&mut self, delta: i64) -> i64 {
        self.seek(self.point_index.saturating_add(delta))
    }

    /// Aktueller Index als Vertex-Position (immer innerhalb der Route).
    pub fn clamped_index(&self) -> usize {
        self.point_index.clamp(0, self.max_index.max(0)) as usize
    }

    /// Normale Wartezeit zwischen zwei Tour-Frames in Millisekunden.
    pub fn frame_delay_ms(&self) -> f64 {
        1000.0 / self.playback_fps
    }

    /// Setzt den Höhenversatz (Neuaufbau durch den Aufrufer).
    pub fn set_offset_z(&mut self, value: f64) -> Result<(), ConfigError> {
        self.offset_z = ensure_finite("offset_z", value)?;
        Ok(())
    }

    /// Setzt das Verdichtungsintervall (Neuaufbau durch den Aufrufer).
    pub fn set_densify_interval(&mut self, value: f64) -> Result<(), ConfigError> {
        self.densify_interval = ensure_densify_interval(value)?;
        Ok(())
    }

    /// Setzt die Vorausschau-Distanz.
    pub fn set_lookahead_distance(&mut self, value: f64) -> Result<(), ConfigError> {
        self.lookahead_distance = ensure_non_negative("lookahead_distance", value)?;
        Ok(())
    }

    /// Setzt die Kamera-Neigung.
    pub fn set_lookdown_tilt(&mut self, value: f64) -> Result<(), ConfigError> {
        self.lookdown_tilt_deg = ensure_finite("lookdown_tilt_deg", value)?;
        Ok(())
    }

    /// Setzt die Bildrate.
    pub fn set_playback_fps(&mut self, value: f64) -> Result<(), ConfigError> {
        self.playback_fps = ensure_fps(value)?;
        Ok(())
    }
}
