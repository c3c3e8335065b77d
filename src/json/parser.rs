//! Parser für Routen-Dokumente.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{Path, Point3M, SpatialReference};

/// Rohes Routen-Dokument, wie es auf der Platte liegt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDocument {
    /// Raumbezug der Koordinaten
    #[serde(default)]
    pub spatial_reference: SpatialReference,
    /// Koordinaten tragen Z
    #[serde(default)]
    pub has_z: bool,
    /// Koordinaten tragen M
    #[serde(default)]
    pub has_m: bool,
    /// Parts als Listen von Koordinaten-Tupeln
    pub paths: Vec<Vec<Vec<f64>>>,
}

impl RouteDocument {
    /// Anzahl Werte je Koordinaten-Tupel laut Dimensions-Flags.
    pub fn tuple_len(&self) -> usize {
        2 + usize::from(self.has_z) + usize::from(self.has_m)
    }

    /// Wandelt das Dokument in einen geprüften [`Path`].
    pub fn into_path(self) -> Result<Path> {
        let expected = self.tuple_len();
        let mut parts = Vec::with_capacity(self.paths.len());

        for (part_idx, coords) in self.paths.iter().enumerate() {
            let mut part = Vec::with_capacity(coords.len());
            for (idx, c) in coords.iter().enumerate() {
                if c.len() != expected {
                    bail!(
                        "Part {part_idx}, Koordinate {idx}: {} Werte, erwartet {expected}",
                        c.len()
                    );
                }
                let z = if self.has_z { c[2] } else { 0.0 };
                let point = if self.has_m {
                    Point3M::with_m(c[0], c[1], z, c[expected - 1])
                } else {
                    Point3M::new(c[0], c[1], z)
                };
                part.push(point);
            }
            parts.push(part);
        }

        let path = Path::new(parts, self.has_z, self.has_m, self.spatial_reference)?;
        Ok(path)
    }
}

/// Parsed ein Routen-Dokument aus einem JSON-String.
pub fn parse_route_document(json: &str) -> Result<Path> {
    let document: RouteDocument =
        serde_json::from_str(json).context("Routen-Dokument ist kein gültiges JSON")?;
    if document.paths.is_empty() {
        bail!("Routen-Dokument enthält keine Parts");
    }
    document.into_path()
}

/// Lädt ein Routen-Dokument von der Platte.
pub fn load_route_file(path: &std::path::Path) -> Result<Path> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Routen-Datei nicht lesbar: {}", path.display()))?;
    parse_route_document(&content)
        .with_context(|| format!("Routen-Datei fehlerhaft: {}", path.display()))
}
