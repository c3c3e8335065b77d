//! Handler für Options-Änderungen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::TourOptions;

/// Wendet Optionen an.
pub fn apply(state: &mut AppState, options: TourOptions) -> anyhow::Result<()> {
    use_cases::options::apply_options(state, options)
}

/// Setzt Optionen auf Standardwerte zurück.
pub fn reset(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::options::reset_options(state)
}
