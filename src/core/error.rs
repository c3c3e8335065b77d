//! Fehlertypen für Routen-Pipeline, Parameter und Tour-Steuerung.

use thiserror::Error;

/// Ungültige Konfiguration an der Parameter-Grenze.
///
/// Wird beim Ändern eines Parameters zurückgegeben; der vorherige gültige
/// Wert bleibt in diesem Fall erhalten.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Verdichtungsintervall muss > 0 sein
    #[error("Verdichtungsintervall muss positiv sein (erhalten: {0})")]
    NonPositiveDensifyInterval(f64),
    /// Parameter ist NaN oder unendlich
    #[error("Parameter `{name}` ist nicht endlich")]
    NonFinite {
        /// Name des Parameters
        name: &'static str,
    },
    /// Wiedergabe-Rate muss > 0 sein
    #[error("Bildrate muss positiv sein (erhalten: {0})")]
    NonPositiveFps(f64),
    /// Glättung erlaubt höchstens [`MAX_SMOOTHING_ITERATIONS`] Durchläufe
    #[error("Ungültige Anzahl Glättungs-Iterationen: {0}")]
    InvalidSmoothingIterations(u32),
    /// Verdichtung würde mehr als [`MAX_ROUTE_VERTICES`] Vertices erzeugen
    #[error("Verdichtungsintervall {interval} m ergibt {requested} Vertices (maximal {limit})")]
    TooManyVertices {
        /// Gewähltes Intervall in Metern
        interval: f64,
        /// Geschätzte Vertex-Anzahl
        requested: u64,
        /// Obergrenze
        limit: usize,
    },
    /// Negative Distanz dort, wo nur Werte >= 0 erlaubt sind
    #[error("Parameter `{name}` darf nicht negativ sein")]
    Negative {
        /// Name des Parameters
        name: &'static str,
    },
}

/// Obergrenze für Glättungs-Iterationen (Vertex-Anzahl wächst bei `Subdivide` exponentiell).
pub const MAX_SMOOTHING_ITERATIONS: u32 = 8;

/// Obergrenze für die Vertex-Anzahl einer verdichteten Route.
pub const MAX_ROUTE_VERTICES: usize = 2_000_000;

/// Fehler der Tour- und Routen-Verarbeitung.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourError {
    /// Ungültiger Parameter
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Route hat weniger als 2 nutzbare Vertices
    #[error("Route ist degeneriert ({vertex_count} Vertices, mindestens 2 benötigt)")]
    DegenerateRoute {
        /// Anzahl der Vertices im ersten Part
        vertex_count: usize,
    },
    /// Keine Route geladen
    #[error("Keine Route geladen")]
    NoRoute,
    /// Eingabe-Geometrie verletzt die Dimensions-Invarianten
    #[error("Ungültiger Pfad: {0}")]
    InvalidPath(String),
}

/// Prüft, dass ein Wert endlich ist.
pub fn ensure_finite(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { name })
    }
}

/// Prüft, dass ein Wert endlich und nicht negativ ist.
pub fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { name });
    }
    Ok(value)
}

/// Prüft das Verdichtungsintervall (endlich und > 0).
pub fn ensure_densify_interval(value: f64) -> Result<f64, ConfigError> {
    ensure_finite("densify_interval", value)?;
    if value <= 0.0 {
        return Err(ConfigError::NonPositiveDensifyInterval(value));
    }
    Ok(value)
}

/// Prüft eine Bildrate (endlich und > 0).
pub fn ensure_fps(value: f64) -> Result<f64, ConfigError> {
    ensure_finite("playback_fps", value)?;
    if value <= 0.0 {
        return Err(ConfigError::NonPositiveFps(value));
    }
    Ok(value)
}
