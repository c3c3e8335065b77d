//! Routen-Pipeline: aus einer Quell-Geometrie eine glatte, distanzparametrisierte Route bauen.
//!
//! Reihenfolge (nicht vertauschbar):
//! 1. Vereinfachen (doppelte und kollineare Vertices entfernen)
//! 2. Distanz entlang als M setzen (vorhandene M-Werte je Part auf 0 verschieben)
//! 3. Verdichten auf maximal `densify_interval` Meter je Segment
//! 4. Chaikin-Glättung (planar, Z/M optional)
//! 5. Höhenversatz zuletzt, damit er Distanz und Glättung nicht beeinflusst
//!
//! Alle Schritte sind reine Transformationen ohne versteckten Zustand.

mod densify;
mod measure;
mod offset;
mod simplify;
mod smooth;


pub use densify::densify;
pub use measure::{assign_distance_along, rebase_distance_along};
pub use offset::offset_z;
pub use simplify::simplify;
pub use smooth::{smooth, ChaikinVariant, SmoothingOptions};

use super::error::{ensure_densify_interval, ensure_finite, ensure_non_negative};
use super::{ConfigError, Path, MAX_SMOOTHING_ITERATIONS};

/// Standard-Verdichtungsintervall in Metern.
pub const DEFAULT_DENSIFY_INTERVAL: f64 = 5.0;
/// Standard-Toleranz der Vereinfachung (Einheiten des Raumbezugs).
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 1e-9;

/// Form-Parameter der Route. Jede Änderung erfordert einen Neuaufbau.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteParams {
    /// Konstanter Höhenversatz in Metern
    pub offset_z: f64,
    /// Maximaler Vertex-Abstand nach dem Verdichten (Meter, > 0)
    pub densify_interval: f64,
    /// Abstandstoleranz für doppelte/kollineare Vertices
    pub simplify_tolerance: f64,
    /// Chaikin-Parameter
    pub smoothing: SmoothingOptions,
}

impl Default for RouteParams {
    fn default() -> Self {
        Self {
            offset_z: 0.0,
            densify_interval: DEFAULT_DENSIFY_INTERVAL,
            simplify_tolerance: DEFAULT_SIMPLIFY_TOLERANCE,
            smoothing: SmoothingOptions::default(),
        }
    }
}

impl RouteParams {
    /// Prüft alle Parameter; Fehler werden an der Parameter-Grenze gemeldet.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("offset_z", self.offset_z)?;
        ensure_densify_interval(self.densify_interval)?;
        ensure_non_negative("simplify_tolerance", self.simplify_tolerance)?;
        if self.smoothing.iterations > MAX_SMOOTHING_ITERATIONS {
            return Err(ConfigError::InvalidSmoothingIterations(
                self.smoothing.iterations,
            ));
        }
        Ok(())
    }
}

/// Baut die Route aus der Quell-Geometrie.
///
/// Idempotent: gleiche Eingaben liefern eine identische Route. Eine Route
/// mit weniger als 2 Vertices im ersten Part ist kein Fehler dieser
/// Funktion; Aufrufer prüfen [`Path::is_tourable`].
pub fn build_route(source: &Path, params: &RouteParams) -> Result<Path, ConfigError> {
    params.validate()?;

    let simplified = simplify(source, params.simplify_tolerance);
    let measured = if simplified.has_m() {
        rebase_distance_along(&simplified)
    } else {
        assign_distance_along(&simplified)
    };
    let densified = densify(&measured, params.densify_interval)?;
    let smoothed = smooth(&densified, &params.smoothing);
    Ok(offset_z(&smoothed, params.offset_z))
}
