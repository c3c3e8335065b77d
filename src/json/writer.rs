//! Writer für Routen-Dokumente.

use anyhow::Result;

use super::RouteDocument;
use crate::core::Path;

impl From<&Path> for RouteDocument {
    fn from(path: &Path) -> Self {
        let paths = path
            .parts()
            .iter()
            .map(|part| {
                part.iter()
                    .map(|p| {
                        let mut tuple = vec![p.x, p.y];
                        if path.has_z() {
                            tuple.push(p.z);
                        }
                        if path.has_m() {
                            tuple.push(p.m_or_zero());
                        }
                        tuple
                    })
                    .collect()
            })
            .collect();

        Self {
            spatial_reference: path.spatial_reference(),
            has_z: path.has_z(),
            has_m: path.has_m(),
            paths,
        }
    }
}

/// Serialisiert einen Pfad als formatiertes JSON-Dokument.
pub fn write_route_document(path: &Path) -> Result<String> {
    let document = RouteDocument::from(path);
    Ok(serde_json::to_string_pretty(&document)?)
}
