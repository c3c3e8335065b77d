use crate::app::animation::{PlaybackState, SpinDirection};
use crate::core::CameraPose;

/// Ausgehende Benachrichtigungen an den Host.
///
/// Werden in Auslösereihenfolge im [`AppState`](crate::app::AppState)
/// gesammelt und vom Host mit `drain_events` abgeholt.
#[derive(Debug, Clone, PartialEq)]
pub enum TourEvent {
    /// Neue Kamera-Pose
    PoseUpdated {
        /// Pose für den Renderer
        pose: CameraPose,
        /// Ferne Clip-Distanz (Meter)
        clip_far: f64,
    },
    /// Distanz-Anzeige
    DistanceLabelUpdated {
        /// Gesamtlänge der Route (km)
        total_km: f64,
        /// Distanz entlang bis zur aktuellen Position (km)
        current_km: f64,
    },
    /// Slider-Grenzen nach Neuaufbau
    SliderBoundsUpdated { max_index: i64 },
    /// Slider-Position
    SliderValueUpdated { index: i64 },
    /// Route hat weniger als 2 Vertices und ist nicht abspielbar
    RouteInvalid { vertex_count: usize },
    /// Wiedergabe-Zustand geändert
    PlaybackStateChanged { state: PlaybackState },
    /// Drehrichtung geändert
    SpinStateChanged { direction: SpinDirection },
    /// Blickrichtung geändert (Heading-Anzeige)
    HeadingChanged { heading_deg: f64 },
}
