use glam::DVec2;

use crate::app::animation::SpinDirection;
use crate::core::Path;
use crate::shared::TourOptions;

/// App-Intents sind Eingaben des Hosts ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neue Quell-Geometrie gewählt (`None` = Auswahl aufgehoben)
    RouteSelected { source: Option<Path> },
    /// Routen-Datei gewählt
    RouteFileSelected { path: String },
    /// Klick auf die Karte: Tour-Index auf den nächsten Routen-Vertex setzen
    NearestAlongRouteRequested { location: DVec2 },

    /// Höhenversatz geändert (Meter)
    OffsetChanged { value: f64 },
    /// Verdichtungsintervall geändert (Meter)
    DensifyIntervalChanged { value: f64 },
    /// Vorausschau-Distanz geändert (Meter)
    LookaheadChanged { value: f64 },
    /// Kamera-Neigung geändert (Grad)
    LookdownChanged { value: f64 },
    /// Bildrate direkt gesetzt
    PlaybackFpsChanged { fps: f64 },
    /// Zwischen schneller und langsamer Wiedergabe umgeschaltet
    PlaybackSpeedToggled { fast: bool },

    /// Play/Pause-Button
    PlayPauseToggled,
    /// Wiedergabe starten
    PlayRequested,
    /// Wiedergabe anhalten
    PauseRequested,
    /// Slider auf Index gezogen
    SeekRequested { index: i64 },
    /// Zum Routenanfang springen
    GoToStartRequested,
    /// Einen Vertex vorwärts
    StepForwardRequested,
    /// Einen Vertex zurück
    StepBackRequested,

    /// Links/Rechts-Drehung umgeschaltet
    SpinToggled { direction: SpinDirection },
    /// Drehung pausieren (z.B. während Routen-Bearbeitung)
    SpinPauseRequested,
    /// Pausierte Drehung fortsetzen
    SpinResumeRequested,

    /// Absolute Blickrichtung (Kompass-Presets, Heading-Slider)
    HeadingSetRequested { heading_deg: f64 },
    /// Blickrichtung um eine Stufe drehen
    HeadingNudged { clockwise: bool },
    /// Ferne Clip-Distanz geändert (Meter)
    ClipDistanceChanged { far: f64 },

    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: TourOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
