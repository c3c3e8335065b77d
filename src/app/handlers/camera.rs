//! Handler für Blickrichtung, Drehung und Clip-Distanz.

use crate::app::animation::SpinDirection;
use crate::app::scheduler::TaskHandle;
use crate::app::use_cases;
use crate::app::AppState;

/// Schaltet die Drehrichtung um.
pub fn toggle_spin(state: &mut AppState, direction: SpinDirection) {
    use_cases::spin::toggle_spin(state, direction);
}

/// Pausiert die Drehung.
pub fn pause_spin(state: &mut AppState) {
    use_cases::spin::pause_spin(state);
}

/// Setzt die Drehung fort.
pub fn resume_spin(state: &mut AppState) {
    use_cases::spin::resume_spin(state);
}

/// Führt einen fälligen Dreh-Frame aus.
pub fn run_spin_frame(state: &mut AppState, handle: TaskHandle) {
    use_cases::spin::run_frame(state, handle);
}

/// Setzt die Blickrichtung.
pub fn set_heading(state: &mut AppState, heading_deg: f64) -> anyhow::Result<()> {
    use_cases::camera::set_heading(state, heading_deg)
}

/// Dreht die Blickrichtung relativ.
pub fn nudge_heading(state: &mut AppState, delta_deg: f64) -> anyhow::Result<()> {
    use_cases::camera::nudge_heading(state, delta_deg)
}

/// Setzt die ferne Clip-Distanz.
pub fn set_clip_far(state: &mut AppState, far: f64) -> anyhow::Result<()> {
    use_cases::camera::set_clip_far(state, far)
}
