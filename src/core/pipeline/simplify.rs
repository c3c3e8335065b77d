//! Vereinfachung: doppelte und exakt kollineare Vertices entfernen.

use glam::DVec3;

use crate::core::{Path, Point3M};

/// Entfernt aufeinanderfolgende Duplikate und redundante kollineare Innen-Vertices.
///
/// Ein Innen-Vertex ist redundant, wenn er höchstens `tolerance` von der
/// Verbindungslinie seiner Nachbarn entfernt liegt, zwischen ihnen liegt
/// und (bei hasM) sein M-Wert linear interpoliert werden kann.
/// Start- und End-Vertex eines Parts bleiben immer erhalten.
pub fn simplify(path: &Path, tolerance: f64) -> Path {
    let parts = path
        .parts()
        .iter()
        .map(|part| simplify_part(part, tolerance, path.has_z()))
        .collect();
    path.with_parts(parts, path.has_z(), path.has_m())
}

fn position(p: &Point3M, use_z: bool) -> DVec3 {
    DVec3::new(p.x, p.y, if use_z { p.z } else { 0.0 })
}

fn simplify_part(part: &[Point3M], tolerance: f64, use_z: bool) -> Vec<Point3M> {
    let mut deduped: Vec<Point3M> = Vec::with_capacity(part.len());
    for p in part {
        let duplicate = deduped.last().is_some_and(|last| {
            position(last, use_z).distance(position(p, use_z)) <= tolerance
        });
        if !duplicate {
            deduped.push(*p);
        }
    }

    if deduped.len() < 3 {
        return deduped;
    }

    let mut result = Vec::with_capacity(deduped.len());
    result.push(deduped[0]);
    for window in deduped.windows(2).skip(1) {
        let (current, next) = (&window[0], &window[1]);
        let Some(prev) = result.last() else {
            continue;
        };
        if !is_redundant(prev, current, next, tolerance, use_z) {
            result.push(*current);
        }
    }
    if let Some(last) = deduped.last() {
        result.push(*last);
    }
    result
}

fn is_redundant(prev: &Point3M, current: &Point3M, next: &Point3M, tolerance: f64, use_z: bool) -> bool {
    let a = position(prev, use_z);
    let b = position(current, use_z);
    let c = position(next, use_z);

    let ab = b - a;
    let bc = c - b;
    // Richtungsumkehr ist kein kollinearer Zwischenpunkt
    if ab.dot(bc) <= 0.0 {
        return false;
    }

    let ac = c - a;
    let ac_len = ac.length();
    if ac_len <= f64::EPSILON {
        return false;
    }
    let off_line = ab.cross(ac).length() / ac_len;
    if off_line > tolerance {
        return false;
    }

    match (prev.m, current.m, next.m) {
        (Some(ma), Some(mb), Some(mc)) => {
            let t = ab.length() / ac_len;
            (ma + (mc - ma) * t - mb).abs() <= tolerance.max(1e-9)
        }
        _ => true,
    }
}
