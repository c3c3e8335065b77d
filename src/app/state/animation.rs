use crate::app::animation::{CameraOwner, SpinAnimator, TourAnimator};

/// Animatoren und Kamera-Besitz.
#[derive(Debug, Default)]
pub struct AnimationState {
    /// Tour entlang der Route
    pub tour: TourAnimator,
    /// Freie Kamera-Drehung
    pub spin: SpinAnimator,
    /// Aktueller Besitzer der Kamera
    pub owner: CameraOwner,
}

impl AnimationState {
    /// Erstellt inaktive Animatoren.
    pub fn new() -> Self {
        Self::default()
    }
}
