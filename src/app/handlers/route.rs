//! Handler für Routen-Auswahl, Neuaufbau und Form-Parameter.

use glam::DVec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Path;

/// Übernimmt eine neue Quell-Geometrie.
pub fn load(state: &mut AppState, source: Path) -> anyhow::Result<()> {
    use_cases::route::load_route(state, source)
}

/// Lädt eine Routen-Datei und propagiert Fehler an den Aufrufer.
pub fn load_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    use_cases::route::load_route_file(state, path)
}

/// Entfernt die Route.
pub fn clear(state: &mut AppState) {
    use_cases::route::clear_route(state);
}

/// Setzt den Tour-Index auf den nächsten Routen-Vertex.
pub fn reseed(state: &mut AppState, location: DVec2) {
    use_cases::positioning::reseed_from_location(state, location);
}

/// Setzt den Höhenversatz.
pub fn set_offset_z(state: &mut AppState, value: f64) -> anyhow::Result<()> {
    use_cases::route::set_offset_z(state, value)
}

/// Setzt das Verdichtungsintervall.
pub fn set_densify_interval(state: &mut AppState, value: f64) -> anyhow::Result<()> {
    use_cases::route::set_densify_interval(state, value)
}
