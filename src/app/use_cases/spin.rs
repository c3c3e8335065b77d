//! Use-Case-Funktionen für die Kamera-Drehung.

use crate::app::animation::{CameraOwner, SpinDirection};
use crate::app::scheduler::TaskHandle;
use crate::app::{AppState, TourEvent};

/// Übernimmt den Kamera-Besitz für die Drehung (pausiert die Tour).
fn claim_camera(state: &mut AppState) {
    if state.animation.owner.displaced_by(CameraOwner::Spin) == Some(CameraOwner::Tour) {
        super::playback::pause(state);
    }
}

fn publish_direction(state: &mut AppState) {
    let direction = state.animation.spin.direction();
    state.animation.owner = if direction == SpinDirection::None {
        state.animation.owner.released_by(CameraOwner::Spin)
    } else {
        CameraOwner::Spin
    };
    state.emit(TourEvent::SpinStateChanged { direction });
}

/// Links/Rechts-Umschalter: gleiche Richtung erneut schaltet ab.
pub fn toggle_spin(state: &mut AppState, direction: SpinDirection) {
    if direction != SpinDirection::None && state.animation.spin.direction() != direction {
        claim_camera(state);
    }
    let active = state
        .animation
        .spin
        .toggle(direction, state.scheduler.as_mut());
    log::debug!("Drehung: {:?}", active);
    publish_direction(state);
}

/// Pausiert die Drehung und merkt sich die Richtung.
pub fn pause_spin(state: &mut AppState) {
    if !state.animation.spin.is_active() {
        return;
    }
    state.animation.spin.pause(state.scheduler.as_mut());
    publish_direction(state);
}

/// Setzt eine pausierte Drehung fort.
pub fn resume_spin(state: &mut AppState) {
    if state.animation.spin.is_active()
        || state.animation.spin.previous_direction() == SpinDirection::None
    {
        return;
    }
    claim_camera(state);
    state.animation.spin.resume(state.scheduler.as_mut());
    publish_direction(state);
}

/// Führt einen fälligen Dreh-Frame aus.
pub fn run_frame(state: &mut AppState, handle: TaskHandle) {
    let heading = state.animation.spin.on_frame(
        handle,
        state.scheduler.as_mut(),
        &mut state.camera,
        state.options.spin_step_deg,
        state.options.spin_fps,
    );
    if let Some(heading_deg) = heading {
        state.emit(TourEvent::HeadingChanged { heading_deg });
        state.emit(TourEvent::PoseUpdated {
            pose: state.camera.pose(),
            clip_far: state.camera.clip_far,
        });
    }
}
