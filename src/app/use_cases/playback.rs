//! Use-Case-Funktionen für die Tour-Wiedergabe.

use crate::app::animation::CameraOwner;
use crate::app::scheduler::TaskHandle;
use crate::app::{AppState, TourEvent};

/// Startet die Tour. Eine aktive Drehung wird pausiert.
///
/// Bei nicht abspielbarer Route wird nur gemeldet, kein Fehler.
pub fn play(state: &mut AppState) {
    if let Err(e) = state.animation.tour.ensure_tourable() {
        super::positioning::report_untourable(state, &e);
        return;
    }

    if state.animation.owner.displaced_by(CameraOwner::Tour) == Some(CameraOwner::Spin) {
        super::spin::pause_spin(state);
    }

    if let Err(e) = state.animation.tour.play(state.scheduler.as_mut()) {
        super::positioning::report_untourable(state, &e);
        return;
    }
    state.animation.owner = CameraOwner::Tour;
    log::info!(
        "Tour gestartet bei Index {} ({} fps)",
        state.tour.point_index,
        state.tour.playback_fps
    );
    state.emit(TourEvent::PlaybackStateChanged {
        state: state.animation.tour.state(),
    });
}

/// Hält die Tour an und bricht den geplanten Frame ab.
pub fn pause(state: &mut AppState) {
    if state.animation.tour.pause(state.scheduler.as_mut()) {
        state.animation.owner = state.animation.owner.released_by(CameraOwner::Tour);
        log::info!("Tour angehalten bei Index {}", state.tour.point_index);
        state.emit(TourEvent::PlaybackStateChanged {
            state: state.animation.tour.state(),
        });
    }
}

/// Play/Pause-Umschalter.
pub fn toggle(state: &mut AppState) {
    if state.animation.tour.is_playing() {
        pause(state);
    } else {
        play(state);
    }
}

/// Führt einen fälligen Tour-Frame aus.
pub fn run_frame(state: &mut AppState, handle: TaskHandle) {
    let outcome = state.animation.tour.on_frame(
        handle,
        state.scheduler.as_mut(),
        &mut state.tour,
        state.options.loop_pause_ms,
    );
    let Some(outcome) = outcome else {
        return;
    };

    if outcome.wrapped {
        log::debug!(
            "Runde {} beendet, Pause {} ms",
            state.animation.tour.laps(),
            outcome.next_delay_ms
        );
    }
    super::positioning::update_pose(state);
}

/// Setzt die Bildrate direkt; der nächste geplante Frame nutzt sie.
pub fn set_playback_fps(state: &mut AppState, fps: f64) -> anyhow::Result<()> {
    state.tour.set_playback_fps(fps)?;
    if state.options.fast_playback {
        state.options.playback_fps_fast = fps;
    } else {
        state.options.playback_fps_slow = fps;
    }
    Ok(())
}

/// Wechselt zwischen schneller und langsamer Wiedergabe.
pub fn set_fast_playback(state: &mut AppState, fast: bool) -> anyhow::Result<()> {
    let fps = if fast {
        state.options.playback_fps_fast
    } else {
        state.options.playback_fps_slow
    };
    state.tour.set_playback_fps(fps)?;
    state.options.fast_playback = fast;
    log::debug!("Wiedergabe {} ({} fps)", if fast { "schnell" } else { "langsam" }, fps);
    Ok(())
}
