//! Handler für Wiedergabe, Seek und Tour-Frames.

use crate::app::scheduler::TaskHandle;
use crate::app::use_cases;
use crate::app::AppState;

/// Startet die Tour.
pub fn play(state: &mut AppState) {
    use_cases::playback::play(state);
}

/// Hält die Tour an.
pub fn pause(state: &mut AppState) {
    use_cases::playback::pause(state);
}

/// Setzt den Tour-Index.
pub fn seek(state: &mut AppState, index: i64) {
    use_cases::positioning::seek(state, index);
}

/// Führt einen fälligen Tour-Frame aus.
pub fn run_tour_frame(state: &mut AppState, handle: TaskHandle) {
    use_cases::playback::run_frame(state, handle);
}

/// Setzt die Vorausschau-Distanz.
pub fn set_lookahead(state: &mut AppState, value: f64) -> anyhow::Result<()> {
    use_cases::positioning::set_lookahead(state, value)
}

/// Setzt die Kamera-Neigung.
pub fn set_lookdown(state: &mut AppState, value: f64) -> anyhow::Result<()> {
    use_cases::positioning::set_lookdown(state, value)
}

/// Setzt die Bildrate.
pub fn set_playback_fps(state: &mut AppState, fps: f64) -> anyhow::Result<()> {
    use_cases::playback::set_playback_fps(state, fps)
}

/// Wählt schnelle oder langsame Wiedergabe.
pub fn set_fast_playback(state: &mut AppState, fast: bool) -> anyhow::Result<()> {
    use_cases::playback::set_fast_playback(state, fast)
}
