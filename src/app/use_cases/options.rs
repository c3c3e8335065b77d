//! Use-Case-Funktionen für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::TourOptions;

/// Übernimmt neue Optionen; Form-Änderungen lösen einen Neuaufbau aus.
///
/// Ungültige Optionen werden komplett abgelehnt, der alte Stand bleibt.
/// Das gilt auch, wenn der Neuaufbau der Route scheitert.
pub fn apply_options(state: &mut AppState, options: TourOptions) -> anyhow::Result<()> {
    options.validate()?;
    let rebuild = options.route_params() != state.options.route_params();

    let previous = std::mem::replace(&mut state.options, options);
    let previous_tour = state.tour.clone();
    let previous_camera = state.camera.clone();
    state.sync_tour_from_options();

    if rebuild {
        if let Err(e) = super::route::rebuild_route(state) {
            state.options = previous;
            state.tour = previous_tour;
            state.camera = previous_camera;
            return Err(e);
        }
    }
    log::info!("Optionen übernommen");
    Ok(())
}

/// Setzt alle Optionen auf Standardwerte zurück.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, TourOptions::default())
}
