//! Use-Case-Funktionen für Kamera-Pose, Slider und Distanz-Anzeige.

use glam::DVec2;

use crate::app::{AppState, TourEvent};
use crate::core::{pose_at, TourError};

/// Berechnet die Pose für den aktuellen Index und meldet sie samt Anzeigen.
pub fn update_pose(state: &mut AppState) {
    let Some(route) = state.route.geometry.clone() else {
        return;
    };
    let Some(pose) = pose_at(&route, &state.tour, state.camera.heading_deg) else {
        return;
    };

    state.camera.apply_pose(&pose);
    let pose = state.camera.pose();
    state.emit(TourEvent::PoseUpdated {
        pose,
        clip_far: state.camera.clip_far,
    });
    state.emit(TourEvent::DistanceLabelUpdated {
        total_km: state.route.total_km(),
        current_km: pose.position.m_or_zero() / 1000.0,
    });
    state.emit(TourEvent::SliderValueUpdated {
        index: state.tour.point_index,
    });
}

/// Meldet eine nicht abspielbare Route an den Host.
pub(crate) fn report_untourable(state: &mut AppState, err: &TourError) {
    match err {
        TourError::DegenerateRoute { vertex_count } => {
            log::warn!("{}", err);
            state.emit(TourEvent::RouteInvalid {
                vertex_count: *vertex_count,
            });
        }
        _ => log::warn!("Tour nicht möglich: {}", err),
    }
}

/// Setzt den Index (begrenzt auf die Route) und aktualisiert die Pose sofort.
///
/// Der Wiedergabe-Zustand bleibt unverändert.
pub fn seek(state: &mut AppState, index: i64) {
    if let Err(e) = state.animation.tour.ensure_tourable() {
        report_untourable(state, &e);
        return;
    }
    let clamped = state.tour.seek(index);
    log::debug!("Seek {} → {}", index, clamped);
    update_pose(state);
}

/// Setzt den Index auf den Routen-Vertex, der `location` am nächsten liegt.
pub fn reseed_from_location(state: &mut AppState, location: DVec2) {
    match state.route.index.nearest(location) {
        Some(hit) => {
            log::debug!(
                "Nächster Routen-Vertex {} ({:.2} m entfernt)",
                hit.index,
                hit.distance
            );
            seek(state, hit.index as i64);
        }
        None => log::debug!("Keine Route für Nearest-Abfrage"),
    }
}

/// Setzt die Vorausschau-Distanz und aktualisiert die Pose.
pub fn set_lookahead(state: &mut AppState, value: f64) -> anyhow::Result<()> {
    state.tour.set_lookahead_distance(value)?;
    state.options.lookahead_distance = value;
    if state.route.is_tourable() {
        update_pose(state);
    }
    Ok(())
}

/// Setzt die Kamera-Neigung und aktualisiert die Pose.
pub fn set_lookdown(state: &mut AppState, value: f64) -> anyhow::Result<()> {
    state.tour.set_lookdown_tilt(value)?;
    state.options.lookdown_tilt_deg = value;
    if state.route.is_tourable() {
        update_pose(state);
    }
    Ok(())
}
