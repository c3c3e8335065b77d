use std::sync::Arc;

use crate::core::{Path, RouteIndex};

/// Quell-Geometrie und daraus gebaute Route.
#[derive(Default)]
pub struct RouteState {
    /// Quell-Geometrie der aktuellen Auswahl (unverändert seit Auswahl)
    pub source: Option<Arc<Path>>,
    /// Gebaute Route (bei jedem Neuaufbau komplett ersetzt)
    pub geometry: Option<Arc<Path>>,
    /// Spatial-Index über den ersten Part der Route
    pub index: RouteIndex,
    /// Gesamtlänge der Route in Metern
    pub total_length_m: f64,
}

impl RouteState {
    /// Erstellt einen leeren Routen-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` wenn eine abspielbare Route (≥ 2 Vertices) vorliegt.
    pub fn is_tourable(&self) -> bool {
        self.geometry.as_ref().is_some_and(|g| g.is_tourable())
    }

    /// Anzahl Vertices im ersten Part der Route.
    pub fn vertex_count(&self) -> usize {
        self.geometry.as_ref().map_or(0, |g| g.first_part().len())
    }

    /// Gesamtlänge in Kilometern.
    pub fn total_km(&self) -> f64 {
        self.total_length_m / 1000.0
    }
}
