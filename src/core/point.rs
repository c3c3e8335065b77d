//! Routen-Vertex mit X/Y/Z und optionaler Distanz entlang der Route (M).

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Einzelner Vertex einer Route.
///
/// Die Koordinaten sind je nach Raumbezug des Pfads projiziert (Meter)
/// oder geographisch (x = Länge, y = Breite in Grad). Der Raumbezug wird
/// am [`Path`](super::Path) geführt, nicht am Punkt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3M {
    /// X-Koordinate (bzw. Länge)
    pub x: f64,
    /// Y-Koordinate (bzw. Breite)
    pub y: f64,
    /// Höhe
    pub z: f64,
    /// Kumulierte Distanz entlang des Parts in Metern
    pub m: Option<f64>,
}

impl Point3M {
    /// Erstellt einen Punkt ohne M-Wert.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, m: None }
    }

    /// Erstellt einen Punkt mit M-Wert.
    pub fn with_m(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z,
            m: Some(m),
        }
    }

    /// Planare Position.
    pub fn xy(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Position inklusive Höhe.
    pub fn xyz(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// M-Wert, fehlende Werte zählen als 0.
    pub fn m_or_zero(&self) -> f64 {
        self.m.unwrap_or(0.0)
    }

    /// Lineare Interpolation aller Kanäle (t ∈ [0, 1]).
    ///
    /// M wird nur interpoliert, wenn beide Endpunkte einen M-Wert tragen.
    pub fn lerp(&self, other: &Point3M, t: f64) -> Point3M {
        let p = self.xyz().lerp(other.xyz(), t);
        let m = match (self.m, other.m) {
            (Some(a), Some(b)) => Some(a + (b - a) * t),
            _ => None,
        };
        Point3M {
            x: p.x,
            y: p.y,
            z: p.z,
            m,
        }
    }

    /// `true` wenn alle vorhandenen Kanäle endlich sind.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.z.is_finite()
            && self.m.map_or(true, f64::is_finite)
    }
}
