//! Chaikin-Eckenschnitt auf den planaren Koordinaten.
//!
//! Je Segment `(p0, p1)` entstehen die Viertelpunkte
//! `q = 0.75·p0 + 0.25·p1` und `r = 0.25·p0 + 0.75·p1`.
//! Z und M werden nur mitgeglättet, wenn der Kanal dafür markiert ist;
//! sonst übernimmt jeder neue Vertex den Wert des nächstgelegenen
//! Original-Endpunkts.

use serde::{Deserialize, Serialize};

use crate::core::{Path, Point3M};

/// Schnittfaktor der Viertelpunkte.
const CUT: f64 = 0.25;
/// Standard-Anzahl Glättungsdurchläufe.
pub const DEFAULT_SMOOTHING_ITERATIONS: u32 = 2;

/// Ausgabeform der Glättung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChaikinVariant {
    /// Ein Vertex je Eingabe-Vertex: Vertex `i` wird durch `q` des Segments
    /// `(i, i+1)` ersetzt, der letzte durch `r` des letzten Segments.
    /// Die Vertex-Anzahl bleibt gleich; das `r` der inneren Segmente wird
    /// nicht ausgegeben. Das ist die Ausgabeform bestehender Routen.
    #[default]
    InPlace,
    /// Klassischer Chaikin: `q` und `r` je Segment, die Vertex-Anzahl
    /// verdoppelt sich pro Durchlauf auf `2·(n-1)`.
    Subdivide,
}

/// Parameter der Chaikin-Glättung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingOptions {
    /// Anzahl Durchläufe (0 = keine Glättung)
    pub iterations: u32,
    /// Z-Werte mitglätten
    pub smooth_z: bool,
    /// M-Werte mitglätten
    pub smooth_m: bool,
    /// Ausgabeform
    pub variant: ChaikinVariant,
}

impl Default for SmoothingOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_SMOOTHING_ITERATIONS,
            smooth_z: false,
            smooth_m: false,
            variant: ChaikinVariant::InPlace,
        }
    }
}

/// Glättet jeden Part des Pfads. Parts mit weniger als 2 Vertices bleiben unverändert.
pub fn smooth(path: &Path, options: &SmoothingOptions) -> Path {
    let smooth_z = options.smooth_z && path.has_z();
    let smooth_m = options.smooth_m && path.has_m();

    let parts = path
        .parts()
        .iter()
        .map(|part| {
            let mut current = part.clone();
            for _ in 0..options.iterations {
                if current.len() < 2 {
                    break;
                }
                current = match options.variant {
                    ChaikinVariant::InPlace => chaikin_in_place(&current, smooth_z, smooth_m),
                    ChaikinVariant::Subdivide => chaikin_subdivide(&current, smooth_z, smooth_m),
                };
            }
            current
        })
        .collect();

    path.with_parts(parts, path.has_z(), path.has_m())
}

/// Punkt bei `t` zwischen `p0` und `p1`; Z/M aus `channel_source`, wenn nicht geglättet.
fn cut_point(
    p0: &Point3M,
    p1: &Point3M,
    t: f64,
    channel_source: &Point3M,
    smooth_z: bool,
    smooth_m: bool,
) -> Point3M {
    let xy = p0.xy().lerp(p1.xy(), t);
    let z = if smooth_z {
        p0.z + (p1.z - p0.z) * t
    } else {
        channel_source.z
    };
    let m = if smooth_m {
        match (p0.m, p1.m) {
            (Some(a), Some(b)) => Some(a + (b - a) * t),
            _ => channel_source.m,
        }
    } else {
        channel_source.m
    };
    Point3M {
        x: xy.x,
        y: xy.y,
        z,
        m,
    }
}

fn chaikin_in_place(part: &[Point3M], smooth_z: bool, smooth_m: bool) -> Vec<Point3M> {
    let mut out = Vec::with_capacity(part.len());
    for w in part.windows(2) {
        out.push(cut_point(&w[0], &w[1], CUT, &w[0], smooth_z, smooth_m));
    }
    if let [.., p0, p1] = part {
        out.push(cut_point(p0, p1, 1.0 - CUT, p1, smooth_z, smooth_m));
    }
    out
}

fn chaikin_subdivide(part: &[Point3M], smooth_z: bool, smooth_m: bool) -> Vec<Point3M> {
    let mut out = Vec::with_capacity(2 * part.len().saturating_sub(1));
    for w in part.windows(2) {
        out.push(cut_point(&w[0], &w[1], CUT, &w[0], smooth_z, smooth_m));
        out.push(cut_point(&w[0], &w[1], 1.0 - CUT, &w[1], smooth_z, smooth_m));
    }
    out
}
