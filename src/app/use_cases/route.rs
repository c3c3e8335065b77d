//! Use-Case-Funktionen für Routen-Auswahl und Neuaufbau.

use std::sync::Arc;

use anyhow::Context;

use crate::app::{AppState, TourEvent};
use crate::core::{build_route, Path, RouteIndex};

/// Übernimmt eine neue Quell-Geometrie und baut die Route.
///
/// Eine laufende Tour wird angehalten; der Index beginnt wieder bei 0.
pub fn load_route(state: &mut AppState, source: Path) -> anyhow::Result<()> {
    log::info!(
        "Quell-Geometrie gewählt: {} Parts, {} Vertices",
        source.part_count(),
        source.vertex_count()
    );
    super::playback::pause(state);
    state.route.source = Some(Arc::new(source));
    rebuild_route(state)
}

/// Lädt eine Routen-Datei und übernimmt sie als Quell-Geometrie.
pub fn load_route_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let source = crate::json::load_route_file(std::path::Path::new(path))?;
    load_route(state, source)
}

/// Entfernt Quell-Geometrie und Route; die Tour geht in den Leerlauf.
pub fn clear_route(state: &mut AppState) {
    super::playback::pause(state);
    state.route.source = None;
    state.route.geometry = None;
    state.route.index = RouteIndex::empty();
    state.route.total_length_m = 0.0;
    state.tour.clear_route();
    state
        .animation
        .tour
        .clear_route(state.scheduler.as_mut());
    state.emit(TourEvent::SliderBoundsUpdated { max_index: -1 });
    log::info!("Route entfernt");
}

/// Baut die Route aus der aktuellen Quell-Geometrie komplett neu.
///
/// Ohne Quell-Geometrie passiert nichts. Ein geplanter Tour-Frame wird
/// abgebrochen, der Index auf 0 gesetzt.
pub fn rebuild_route(state: &mut AppState) -> anyhow::Result<()> {
    let Some(source) = state.route.source.clone() else {
        return Ok(());
    };

    let params = state.route_params();
    let geometry = build_route(&source, &params).context("Route konnte nicht gebaut werden")?;

    let was_playing = state.animation.tour.is_playing();
    let vertex_count = geometry.first_part().len();

    state.route.index = RouteIndex::from_route(&geometry);
    state.route.total_length_m = geometry.length_m();
    state.route.geometry = Some(Arc::new(geometry));
    state.tour.reset_for_route(vertex_count);
    state
        .animation
        .tour
        .load_route(state.scheduler.as_mut(), vertex_count);
    state.animation.owner = state
        .animation
        .owner
        .released_by(crate::app::CameraOwner::Tour);

    log::info!(
        "Route gebaut: {} Vertices, {:.3} km",
        vertex_count,
        state.route.total_km()
    );

    if was_playing {
        state.emit(TourEvent::PlaybackStateChanged {
            state: state.animation.tour.state(),
        });
    }
    state.emit(TourEvent::SliderBoundsUpdated {
        max_index: state.tour.max_index,
    });

    if state.route.is_tourable() {
        super::positioning::update_pose(state);
    } else {
        log::warn!("Route degeneriert: {} Vertices", vertex_count);
        state.emit(TourEvent::RouteInvalid { vertex_count });
    }
    Ok(())
}

/// Setzt den Höhenversatz und baut die Route neu.
pub fn set_offset_z(state: &mut AppState, value: f64) -> anyhow::Result<()> {
    let previous = state.tour.offset_z;
    state.tour.set_offset_z(value)?;
    if let Err(e) = rebuild_route(state) {
        state.tour.offset_z = previous;
        return Err(e);
    }
    state.options.offset_z = value;
    Ok(())
}

/// Setzt das Verdichtungsintervall und baut die Route neu.
///
/// Bei ungültigem Wert bleibt das bisherige Intervall samt Route erhalten.
pub fn set_densify_interval(state: &mut AppState, value: f64) -> anyhow::Result<()> {
    let previous = state.tour.densify_interval;
    if let Err(e) = state.tour.set_densify_interval(value) {
        log::warn!("Verdichtungsintervall abgelehnt: {}", e);
        return Err(e.into());
    }
    if let Err(e) = rebuild_route(state) {
        log::warn!("Verdichtungsintervall abgelehnt: {:#}", e);
        state.tour.densify_interval = previous;
        return Err(e);
    }
    state.options.densify_interval = value;
    Ok(())
}
