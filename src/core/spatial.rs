//! Spatial-Index (KD-Tree) über den Vertices einer gebauten Route.

use std::collections::HashSet;

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::Path;

/// Drehwinkel des Index-Koordinatensystems (Radiant).
///
/// Achsparallele Routen liefern sonst viele identische Split-Werte
/// auf einer Achse, die ein Bucket nicht aufnehmen kann.
const INDEX_ROTATION_RAD: f64 = 0.618_033_988_749_895;

/// Ergebnis einer Distanzabfrage gegen den Routen-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexMatch {
    /// Vertex-Index im ersten Part
    pub index: usize,
    /// Planare Distanz zum Suchpunkt
    pub distance: f64,
}

/// Read-only Spatial-Index über dem ersten Part einer Route.
#[derive(Debug, Clone)]
pub struct RouteIndex {
    tree: KdTree<f64, 2>,
    /// Vertex-Index je Tree-Eintrag
    vertex_ids: Vec<usize>,
    len: usize,
    rotation: DVec2,
}

impl RouteIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            vertex_ids: Vec::new(),
            len: 0,
            rotation: DVec2::from_angle(INDEX_ROTATION_RAD),
        }
    }

    /// Baut den Index aus den Vertices des ersten Parts.
    ///
    /// Vertices mit identischer XY-Lage (z.B. senkrechte Schächte) werden
    /// zu einem Eintrag mit dem kleinsten Vertex-Index zusammengefasst;
    /// ein Bucket kann beliebig viele gleiche Punkte nicht aufnehmen.
    pub fn from_route(route: &Path) -> Self {
        let rotation = DVec2::from_angle(INDEX_ROTATION_RAD);
        let part = route.first_part();

        let mut seen = HashSet::with_capacity(part.len());
        let mut entries: Vec<[f64; 2]> = Vec::with_capacity(part.len());
        let mut vertex_ids = Vec::with_capacity(part.len());
        for (index, point) in part.iter().enumerate() {
            // `+ 0.0` vereinheitlicht -0.0 und 0.0
            let entry = (rotation.rotate(point.xy()) + 0.0).to_array();
            if seen.insert([entry[0].to_bits(), entry[1].to_bits()]) {
                entries.push(entry);
                vertex_ids.push(index);
            }
        }
        let tree: KdTree<f64, 2> = (&entries).into();

        if entries.len() < part.len() {
            log::debug!(
                "Routen-Index: {} von {} Vertices mit gleicher XY-Lage zusammengefasst",
                part.len() - entries.len(),
                part.len()
            );
        }

        Self {
            tree,
            vertex_ids,
            len: part.len(),
            rotation,
        }
    }

    /// Anzahl indexierter Vertices.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Gibt `true` zurück, wenn keine Vertices im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Findet den nächsten Vertex zur gegebenen Position.
    pub fn nearest(&self, query: DVec2) -> Option<VertexMatch> {
        if self.is_empty() {
            return None;
        }

        let q = self.rotation.rotate(query);
        let result = self.tree.nearest_one::<SquaredEuclidean>(&q.to_array());
        let index = *self.vertex_ids.get(result.item as usize)?;

        Some(VertexMatch {
            index,
            distance: result.distance.sqrt(),
        })
    }
}

impl Default for RouteIndex {
    fn default() -> Self {
        Self::empty()
    }
}
