//! Zentrale Konfiguration der Pipeline-Tour.
//!
//! `TourOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::error::{
    ensure_densify_interval, ensure_finite, ensure_fps, ensure_non_negative,
};
use crate::core::pipeline::{DEFAULT_DENSIFY_INTERVAL, DEFAULT_SIMPLIFY_TOLERANCE};
use crate::core::tour_state::{DEFAULT_LOOKAHEAD_DISTANCE, DEFAULT_LOOKDOWN_TILT_DEG};
use crate::core::{
    ChaikinVariant, ConfigError, RouteParams, SmoothingOptions, MAX_SMOOTHING_ITERATIONS,
};

// ── Tour ────────────────────────────────────────────────────────────

/// Bildrate der langsamen Wiedergabe.
pub const PLAYBACK_FPS_SLOW: f64 = 3.0;
/// Bildrate der schnellen Wiedergabe.
pub const PLAYBACK_FPS_FAST: f64 = 9.0;
/// Pause am Rundenende, bevor die Tour wieder bei Index 0 beginnt (ms).
pub const LOOP_PAUSE_MS: f64 = 1500.0;

// ── Glättung ────────────────────────────────────────────────────────

/// Standard-Anzahl Chaikin-Durchläufe.
pub const SMOOTHING_ITERATIONS: u32 = 2;

// ── Kamera-Drehung ──────────────────────────────────────────────────

/// Drehschritt pro Dreh-Frame in Grad.
pub const SPIN_STEP_DEG: f64 = 0.1;
/// Bildrate der Kamera-Drehung.
pub const SPIN_FPS: f64 = 90.0;
/// Schrittweite der Heading-Buttons in Grad.
pub const HEADING_NUDGE_DEG: f64 = 5.0;

// ── Clip-Distanzen ──────────────────────────────────────────────────

/// Nahe Clip-Distanz in Metern.
pub const CLIP_NEAR: f64 = 0.1;
/// Ferne Clip-Distanz in Metern.
pub const CLIP_FAR: f64 = 5000.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Tour-Optionen.
/// Wird als `pipeline_tour.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourOptions {
    // ── Route ───────────────────────────────────────────────────
    /// Konstanter Höhenversatz der Route in Metern
    pub offset_z: f64,
    /// Maximaler Vertex-Abstand nach dem Verdichten (Meter)
    pub densify_interval: f64,
    /// Toleranz der Vereinfachung (Einheiten des Raumbezugs)
    pub simplify_tolerance: f64,

    // ── Glättung ────────────────────────────────────────────────
    /// Anzahl Chaikin-Durchläufe
    pub smoothing_iterations: u32,
    /// Z-Werte mitglätten
    pub smooth_z: bool,
    /// M-Werte mitglätten
    pub smooth_m: bool,
    /// Ausgabeform der Glättung
    pub chaikin_variant: ChaikinVariant,

    // ── Kamera ──────────────────────────────────────────────────
    /// Vorausschau-Distanz für die Blickrichtung (Meter)
    pub lookahead_distance: f64,
    /// Kamera-Neigung in Grad
    pub lookdown_tilt_deg: f64,
    /// Schrittweite der Heading-Buttons in Grad
    pub heading_nudge_deg: f64,
    /// Nahe Clip-Distanz (Meter)
    pub clip_near: f64,
    /// Ferne Clip-Distanz (Meter)
    pub clip_far: f64,

    // ── Wiedergabe ──────────────────────────────────────────────
    /// Bildrate langsam
    pub playback_fps_slow: f64,
    /// Bildrate schnell
    pub playback_fps_fast: f64,
    /// Schnelle Wiedergabe aktiv
    pub fast_playback: bool,
    /// Pause am Rundenende (ms)
    pub loop_pause_ms: f64,

    // ── Drehung ─────────────────────────────────────────────────
    /// Drehschritt pro Frame (Grad)
    pub spin_step_deg: f64,
    /// Bildrate der Drehung
    pub spin_fps: f64,
}

impl Default for TourOptions {
    fn default() -> Self {
        Self {
            offset_z: 0.0,
            densify_interval: DEFAULT_DENSIFY_INTERVAL,
            simplify_tolerance: DEFAULT_SIMPLIFY_TOLERANCE,

            smoothing_iterations: SMOOTHING_ITERATIONS,
            smooth_z: false,
            smooth_m: false,
            chaikin_variant: ChaikinVariant::InPlace,

            lookahead_distance: DEFAULT_LOOKAHEAD_DISTANCE,
            lookdown_tilt_deg: DEFAULT_LOOKDOWN_TILT_DEG,
            heading_nudge_deg: HEADING_NUDGE_DEG,
            clip_near: CLIP_NEAR,
            clip_far: CLIP_FAR,

            playback_fps_slow: PLAYBACK_FPS_SLOW,
            playback_fps_fast: PLAYBACK_FPS_FAST,
            fast_playback: false,
            loop_pause_ms: LOOP_PAUSE_MS,

            spin_step_deg: SPIN_STEP_DEG,
            spin_fps: SPIN_FPS,
        }
    }
}

impl TourOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("pipeline-tour"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("pipeline_tour.toml")
    }

    /// Prüft alle Werte. Erster Fehler gewinnt.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.route_params().validate()?;
        ensure_non_negative("lookahead_distance", self.lookahead_distance)?;
        ensure_finite("lookdown_tilt_deg", self.lookdown_tilt_deg)?;
        ensure_finite("heading_nudge_deg", self.heading_nudge_deg)?;
        ensure_non_negative("clip_near", self.clip_near)?;
        ensure_non_negative("clip_far", self.clip_far)?;
        ensure_fps(self.playback_fps_slow)?;
        ensure_fps(self.playback_fps_fast)?;
        ensure_non_negative("loop_pause_ms", self.loop_pause_ms)?;
        ensure_finite("spin_step_deg", self.spin_step_deg)?;
        ensure_fps(self.spin_fps)?;
        Ok(())
    }

    /// Form-Parameter für den Routen-Neuaufbau.
    pub fn route_params(&self) -> RouteParams {
        RouteParams {
            offset_z: self.offset_z,
            densify_interval: self.densify_interval,
            simplify_tolerance: self.simplify_tolerance,
            smoothing: SmoothingOptions {
                iterations: self.smoothing_iterations,
                smooth_z: self.smooth_z,
                smooth_m: self.smooth_m,
                variant: self.chaikin_variant,
            },
        }
    }

    /// Bildrate der aktuell gewählten Geschwindigkeit.
    pub fn current_fps(&self) -> f64 {
        if self.fast_playback {
            self.playback_fps_fast
        } else {
            self.playback_fps_slow
        }
    }

    /// Setzt das Verdichtungsintervall; bei Fehler bleibt der alte Wert.
    pub fn set_densify_interval(&mut self, value: f64) -> Result<(), ConfigError> {
        self.densify_interval = ensure_densify_interval(value)?;
        Ok(())
    }

    /// Setzt die Anzahl der Glättungsdurchläufe; bei Fehler bleibt der alte Wert.
    pub fn set_smoothing_iterations(&mut self, value: u32) -> Result<(), ConfigError> {
        if value > MAX_SMOOTHING_ITERATIONS {
            return Err(ConfigError::InvalidSmoothingIterations(value));
        }
        self.smoothing_iterations = value;
        Ok(())
    }
}
