//! Distanz entlang der Route als M-Wert.

use crate::core::{Path, Point3M};

/// Setzt M je Part als kumulierte Distanz in Metern.
///
/// `m[0] = 0`, `m[i] = m[i-1] + distance(p[i-1], p[i])`. Die Distanz ist
/// geodätisch bei geographischem Raumbezug, sonst planar. Jeder Part
/// beginnt wieder bei 0.
pub fn assign_distance_along(path: &Path) -> Path {
    let sr = path.spatial_reference();
    let parts = path
        .parts()
        .iter()
        .map(|part| {
            let mut along = 0.0;
            let mut prev: Option<&Point3M> = None;
            part.iter()
                .map(|p| {
                    if let Some(prev) = prev {
                        along += sr.distance_m(prev, p);
                    }
                    prev = Some(p);
                    Point3M { m: Some(along), ..*p }
                })
                .collect()
        })
        .collect();
    path.with_parts(parts, path.has_z(), true)
}

/// Verschiebt vorhandene M-Werte je Part, sodass jeder Part bei 0 beginnt.
///
/// Abstände zwischen den M-Werten bleiben erhalten.
pub fn rebase_distance_along(path: &Path) -> Path {
    let parts = path
        .parts()
        .iter()
        .map(|part| {
            let start = part.first().map(Point3M::m_or_zero).unwrap_or(0.0);
            part.iter()
                .map(|p| Point3M {
                    m: p.m.map(|m| m - start),
                    ..*p
                })
                .collect()
        })
        .collect();
    path.with_parts(parts, path.has_z(), path.has_m())
}
