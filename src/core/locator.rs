//! Nächster Routen-Vertex zu einem beliebigen Punkt (planare Distanz).

use glam::DVec2;

use super::Path;

/// Index des Vertex im ersten Part mit minimaler planarer Distanz zu `query`.
///
/// Bei gleicher Distanz gewinnt der kleinere Index. `None` für leere Routen.
pub fn nearest_vertex_index(route: &Path, query: DVec2) -> Option<usize> {
    route
        .first_part()
        .iter()
        .enumerate()
        .map(|(idx, p)| (idx, p.xy().distance_squared(query)))
        .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_on_straight_three_point_path() {
        let route = Path::planar(&[[0.0, 0.0, 0.0], [5.0, 0.0, 0.0], [10.0, 0.0, 0.0]]);
        assert_eq!(nearest_vertex_index(&route, DVec2::new(4.0, 1.0)), Some(1));
    }

    #[test]
    fn nearest_prefers_lower_index_on_tie() {
        let route = Path::planar(&[[0.0, 0.0, 0.0], [10.0, 0.0, 0.0]]);
        assert_eq!(nearest_vertex_index(&route, DVec2::new(5.0, 3.0)), Some(0));
    }

    #[test]
    fn nearest_on_empty_route_is_none() {
        let route = Path::planar(&[]);
        assert_eq!(nearest_vertex_index(&route, DVec2::ZERO), None);
    }
}
