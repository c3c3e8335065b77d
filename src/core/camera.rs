//! 3D-Tour-Kamera: Position, Blickrichtung (Heading) und Neigung (Tilt).

use super::geodesy::normalize_degrees;
use super::Point3M;

/// Kamera-Pose, die der externe Renderer in eine Kamera-Transformation umsetzt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Kamera-Position (im Raumbezug der Route)
    pub position: Point3M,
    /// Blickrichtung in Grad, Nord = 0, im Uhrzeigersinn
    pub heading_deg: f64,
    /// Neigung in Grad (0 = senkrecht nach unten, 90 = Horizont)
    pub tilt_deg: f64,
}

/// Geteilte Kamera-Ressource von Tour- und Dreh-Animator.
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Position der Kamera
    pub position: Point3M,
    /// Blickrichtung in Grad [0, 360)
    pub heading_deg: f64,
    /// Neigung in Grad
    pub tilt_deg: f64,
    /// Nahe Clip-Distanz in Metern
    pub clip_near: f64,
    /// Ferne Clip-Distanz in Metern
    pub clip_far: f64,
}

impl Camera3D {
    /// Minimale Neigung.
    pub const TILT_MIN: f64 = 0.0;
    /// Maximale Neigung.
    pub const TILT_MAX: f64 = 180.0;
    /// Standard nahe Clip-Distanz.
    pub const CLIP_NEAR_DEFAULT: f64 = 0.1;
    /// Standard ferne Clip-Distanz.
    pub const CLIP_FAR_DEFAULT: f64 = 5000.0;

    /// Erstellt eine Kamera im Ursprung mit Blick nach Norden.
    pub fn new() -> Self {
        Self {
            position: Point3M::new(0.0, 0.0, 0.0),
            heading_deg: 0.0,
            tilt_deg: 90.0,
            clip_near: Self::CLIP_NEAR_DEFAULT,
            clip_far: Self::CLIP_FAR_DEFAULT,
        }
    }

    /// Übernimmt eine komplette Pose.
    pub fn apply_pose(&mut self, pose: &CameraPose) {
        self.position = pose.position;
        self.set_heading(pose.heading_deg);
        self.set_tilt(pose.tilt_deg);
    }

    /// Aktuelle Pose.
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            heading_deg: self.heading_deg,
            tilt_deg: self.tilt_deg,
        }
    }

    /// Setzt die Blickrichtung, normalisiert auf [0, 360).
    pub fn set_heading(&mut self, heading_deg: f64) {
        if heading_deg.is_finite() {
            self.heading_deg = normalize_degrees(heading_deg);
        }
    }

    /// Dreht die Blickrichtung relativ (positiv = im Uhrzeigersinn).
    pub fn rotate_heading(&mut self, delta_deg: f64) {
        self.set_heading(self.heading_deg + delta_deg);
    }

    /// Setzt die Neigung, begrenzt auf [TILT_MIN, TILT_MAX].
    pub fn set_tilt(&mut self, tilt_deg: f64) {
        if tilt_deg.is_finite() {
            self.tilt_deg = tilt_deg.clamp(Self::TILT_MIN, Self::TILT_MAX);
        }
    }

    /// Setzt die ferne Clip-Distanz. Werte unterhalb der nahen Distanz werden ignoriert.
    pub fn set_clip_far(&mut self, far: f64) -> bool {
        if far.is_finite() && far > self.clip_near {
            self.clip_far = far;
            true
        } else {
            false
        }
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new()
    }
}
