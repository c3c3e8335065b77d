use glam::DVec2;

use crate::app::animation::SpinDirection;
use crate::app::scheduler::TaskHandle;
use crate::core::Path;
use crate::shared::TourOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Quell-Geometrie übernehmen und Route neu bauen
    LoadRoute { source: Path },
    /// Routen-Datei laden
    LoadRouteFile { path: String },
    /// Route entfernen
    ClearRoute,
    /// Tour-Index auf den nächsten Routen-Vertex setzen
    ReseedFromLocation { location: DVec2 },

    /// Höhenversatz setzen (Neuaufbau)
    SetOffsetZ { value: f64 },
    /// Verdichtungsintervall setzen (Neuaufbau)
    SetDensifyInterval { value: f64 },
    /// Vorausschau-Distanz setzen
    SetLookahead { value: f64 },
    /// Kamera-Neigung setzen
    SetLookdown { value: f64 },
    /// Bildrate setzen
    SetPlaybackFps { fps: f64 },
    /// Schnelle/langsame Wiedergabe wählen
    SetFastPlayback { fast: bool },

    /// Wiedergabe starten
    Play,
    /// Wiedergabe anhalten
    Pause,
    /// Index setzen (begrenzt)
    Seek { index: i64 },
    /// Fälligen Tour-Frame ausführen
    RunTourFrame { handle: TaskHandle },

    /// Drehrichtung umschalten
    ToggleSpin { direction: SpinDirection },
    /// Drehung pausieren
    PauseSpin,
    /// Drehung fortsetzen
    ResumeSpin,
    /// Fälligen Dreh-Frame ausführen
    RunSpinFrame { handle: TaskHandle },

    /// Blickrichtung setzen
    SetHeading { heading_deg: f64 },
    /// Blickrichtung relativ drehen
    NudgeHeading { delta_deg: f64 },
    /// Ferne Clip-Distanz setzen
    SetClipFar { far: f64 },

    /// Optionen anwenden
    ApplyOptions { options: TourOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
