//! Mehrteiliger 3D-Pfad mit expliziten Dimensions-Flags (hasZ / hasM).

use super::{Point3M, SpatialReference, TourError};

/// Geordnete Folge von Parts, jeder Part eine geordnete Folge von Vertices.
///
/// Invarianten (bei [`Path::new`] geprüft):
/// - alle Koordinaten endlich
/// - `has_m == true` ⇔ jeder Vertex trägt einen M-Wert
/// - mit `has_m` sind die M-Werte je Part nicht fallend
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    parts: Vec<Vec<Point3M>>,
    has_z: bool,
    has_m: bool,
    spatial_reference: SpatialReference,
}

impl Path {
    /// Erstellt einen Pfad und prüft die Invarianten.
    pub fn new(
        parts: Vec<Vec<Point3M>>,
        has_z: bool,
        has_m: bool,
        spatial_reference: SpatialReference,
    ) -> Result<Self, TourError> {
        for (part_idx, part) in parts.iter().enumerate() {
            if let Some(idx) = part.iter().position(|p| !p.is_finite()) {
                return Err(TourError::InvalidPath(format!(
                    "Part {part_idx}, Vertex {idx}: Koordinate nicht endlich"
                )));
            }
            if has_m {
                if let Some(idx) = part.iter().position(|p| p.m.is_none()) {
                    return Err(TourError::InvalidPath(format!(
                        "Part {part_idx}, Vertex {idx}: M-Wert fehlt trotz hasM"
                    )));
                }
                let decreasing = part
                    .windows(2)
                    .position(|w| w[1].m_or_zero() < w[0].m_or_zero());
                if let Some(idx) = decreasing {
                    return Err(TourError::InvalidPath(format!(
                        "Part {part_idx}, Vertex {}: M-Werte fallend",
                        idx + 1
                    )));
                }
            }
        }

        let parts = if has_m {
            parts
        } else {
            // Ohne hasM werden eventuell mitgelieferte M-Werte verworfen
            parts
                .into_iter()
                .map(|part| part.into_iter().map(|p| Point3M { m: None, ..p }).collect())
                .collect()
        };

        Ok(Self {
            parts,
            has_z,
            has_m,
            spatial_reference,
        })
    }

    /// Einteiliger planarer Pfad aus XYZ-Tripeln (Meter).
    pub fn planar(coords: &[[f64; 3]]) -> Self {
        Self::from_trusted_parts(
            vec![coords.iter().map(|c| Point3M::new(c[0], c[1], c[2])).collect()],
            true,
            false,
            SpatialReference::Planar,
        )
    }

    /// Pipeline-intern: Parts ohne erneute Prüfung übernehmen.
    pub(crate) fn from_trusted_parts(
        parts: Vec<Vec<Point3M>>,
        has_z: bool,
        has_m: bool,
        spatial_reference: SpatialReference,
    ) -> Self {
        Self {
            parts,
            has_z,
            has_m,
            spatial_reference,
        }
    }

    /// Neuer Pfad mit gleichem Raumbezug und ersetzten Parts.
    pub(crate) fn with_parts(&self, parts: Vec<Vec<Point3M>>, has_z: bool, has_m: bool) -> Self {
        Self::from_trusted_parts(parts, has_z, has_m, self.spatial_reference)
    }

    /// Alle Parts.
    pub fn parts(&self) -> &[Vec<Point3M>] {
        &self.parts
    }

    /// Einzelner Part.
    pub fn part(&self, index: usize) -> Option<&[Point3M]> {
        self.parts.get(index).map(Vec::as_slice)
    }

    /// Erster Part, leer wenn keiner existiert. Die Tour läuft über diesen Part.
    pub fn first_part(&self) -> &[Point3M] {
        self.part(0).unwrap_or(&[])
    }

    /// Anzahl der Parts.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Anzahl aller Vertices über alle Parts.
    pub fn vertex_count(&self) -> usize {
        self.parts.iter().map(Vec::len).sum()
    }

    /// Vertex im ersten Part; Index wird auf den letzten Vertex begrenzt.
    pub fn route_vertex(&self, index: usize) -> Option<&Point3M> {
        let part = self.first_part();
        part.get(index.min(part.len().checked_sub(1)?))
    }

    /// Ob Z-Werte geführt werden.
    pub fn has_z(&self) -> bool {
        self.has_z
    }

    /// Ob M-Werte (Distanz entlang) geführt werden.
    pub fn has_m(&self) -> bool {
        self.has_m
    }

    /// Raumbezug des Pfads.
    pub fn spatial_reference(&self) -> SpatialReference {
        self.spatial_reference
    }

    /// Höchster gültiger Tour-Index (`-1` ohne Vertices).
    pub fn max_index(&self) -> i64 {
        self.first_part().len() as i64 - 1
    }

    /// `true` wenn der erste Part für eine Tour reicht (≥ 2 Vertices).
    pub fn is_tourable(&self) -> bool {
        self.first_part().len() >= 2
    }

    /// Gesamtlänge über alle Parts in Metern (geodätisch bei geographischem Raumbezug).
    pub fn length_m(&self) -> f64 {
        self.parts
            .iter()
            .flat_map(|part| part.windows(2))
            .map(|w| self.spatial_reference.distance_m(&w[0], &w[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_rejects_missing_m_when_flagged() {
        let parts = vec![vec![
            Point3M::with_m(0.0, 0.0, 0.0, 0.0),
            Point3M::new(1.0, 0.0, 0.0),
        ]];
        let result = Path::new(parts, true, true, SpatialReference::Planar);
        assert!(matches!(result, Err(TourError::InvalidPath(_))));
    }

    #[test]
    fn new_rejects_decreasing_m() {
        let parts = vec![vec![
            Point3M::with_m(0.0, 0.0, 0.0, 5.0),
            Point3M::with_m(1.0, 0.0, 0.0, 2.0),
        ]];
        assert!(Path::new(parts, true, true, SpatialReference::Planar).is_err());
    }

    #[test]
    fn new_strips_m_without_flag() {
        let parts = vec![vec![Point3M::with_m(0.0, 0.0, 0.0, 3.0)]];
        let path = Path::new(parts, false, false, SpatialReference::Planar)
            .expect("Pfad sollte gültig sein");
        assert_eq!(path.first_part()[0].m, None);
    }

    #[test]
    fn route_vertex_clamps_to_last() {
        let path = Path::planar(&[[0.0, 0.0, 0.0], [5.0, 0.0, 0.0]]);
        assert_eq!(path.route_vertex(10).map(|p| p.x), Some(5.0));
        assert_eq!(path.max_index(), 1);
        assert!(path.is_tourable());
    }

    #[test]
    fn empty_path_has_no_route_vertex() {
        let path = Path::from_trusted_parts(vec![], true, false, SpatialReference::Planar);
        assert!(path.route_vertex(0).is_none());
        assert_eq!(path.max_index(), -1);
        assert!(!path.is_tourable());
    }

    #[test]
    fn planar_length_sums_segments() {
        let path = Path::planar(&[[0.0, 0.0, 0.0], [3.0, 4.0, 0.0], [3.0, 10.0, 0.0]]);
        assert_relative_eq!(path.length_m(), 11.0);
    }
}
