//! Verdichtung: Zwischen-Vertices einfügen, bis kein Segment länger als das Intervall ist.

use crate::core::error::{ensure_densify_interval, MAX_ROUTE_VERTICES};
use crate::core::{ConfigError, Path};

/// Fügt linear interpolierte Vertices ein (X/Y/Z und M).
///
/// Ursprüngliche Vertices bleiben bitgenau erhalten. Ein Segment der Länge
/// `len` wird in `ceil(len / interval)` gleich lange Stücke geteilt.
///
/// Würde das Ergebnis mehr als [`MAX_ROUTE_VERTICES`] Vertices haben, wird
/// vor jeder Allokation abgelehnt.
pub fn densify(path: &Path, interval: f64) -> Result<Path, ConfigError> {
    let interval = ensure_densify_interval(interval)?;
    let sr = path.spatial_reference();

    let requested: f64 = path
        .parts()
        .iter()
        .map(|part| {
            let inserted: f64 = part
                .windows(2)
                .map(|w| (sr.distance_m(&w[0], &w[1]) / interval).ceil().max(1.0))
                .sum();
            inserted + if part.is_empty() { 0.0 } else { 1.0 }
        })
        .sum();
    if requested > MAX_ROUTE_VERTICES as f64 {
        return Err(ConfigError::TooManyVertices {
            interval,
            requested: requested as u64,
            limit: MAX_ROUTE_VERTICES,
        });
    }

    let parts = path
        .parts()
        .iter()
        .map(|part| {
            let mut out = Vec::with_capacity(part.len());
            for window in part.windows(2) {
                let (a, b) = (&window[0], &window[1]);
                out.push(*a);
                let len = sr.distance_m(a, b);
                if len > interval {
                    let pieces = (len / interval).ceil() as usize;
                    for k in 1..pieces {
                        out.push(a.lerp(b, k as f64 / pieces as f64));
                    }
                }
            }
            if let Some(last) = part.last() {
                out.push(*last);
            }
            out
        })
        .collect();

    Ok(path.with_parts(parts, path.has_z(), path.has_m()))
}
