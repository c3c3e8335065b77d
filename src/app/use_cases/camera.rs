//! Use-Case-Funktionen für Blickrichtung und Clip-Distanz.

use crate::app::{AppState, TourEvent};
use crate::core::error::{ensure_finite, ensure_non_negative};

fn publish_camera(state: &mut AppState) {
    state.emit(TourEvent::HeadingChanged {
        heading_deg: state.camera.heading_deg,
    });
    state.emit(TourEvent::PoseUpdated {
        pose: state.camera.pose(),
        clip_far: state.camera.clip_far,
    });
}

/// Setzt die Blickrichtung (normalisiert auf [0, 360)).
pub fn set_heading(state: &mut AppState, heading_deg: f64) -> anyhow::Result<()> {
    let heading_deg = ensure_finite("heading_deg", heading_deg)?;
    state.camera.set_heading(heading_deg);
    publish_camera(state);
    Ok(())
}

/// Dreht die Blickrichtung relativ.
pub fn nudge_heading(state: &mut AppState, delta_deg: f64) -> anyhow::Result<()> {
    let delta_deg = ensure_finite("heading_delta_deg", delta_deg)?;
    state.camera.rotate_heading(delta_deg);
    publish_camera(state);
    Ok(())
}

/// Setzt die ferne Clip-Distanz.
pub fn set_clip_far(state: &mut AppState, far: f64) -> anyhow::Result<()> {
    let far = ensure_non_negative("clip_far", far)?;
    if !state.camera.set_clip_far(far) {
        anyhow::bail!(
            "Ferne Clip-Distanz {} muss größer als die nahe ({}) sein",
            far,
            state.camera.clip_near
        );
    }
    state.options.clip_far = far;
    state.emit(TourEvent::PoseUpdated {
        pose: state.camera.pose(),
        clip_far: far,
    });
    Ok(())
}
