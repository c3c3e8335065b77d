//! Konstanter Höhenversatz.

use crate::core::{Path, Point3M};

/// Addiert `offset_z` auf jeden Z-Wert. Der Pfad führt danach immer Z.
pub fn offset_z(path: &Path, offset_z: f64) -> Path {
    let parts = path
        .parts()
        .iter()
        .map(|part| {
            part.iter()
                .map(|p| Point3M {
                    z: p.z + offset_z,
                    ..*p
                })
                .collect()
        })
        .collect();
    path.with_parts(parts, true, path.has_m())
}
