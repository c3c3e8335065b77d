//! Kamera-Pose für den aktuellen Tour-Index mit Vorausschau-Steuerung.

use super::{CameraPose, Path, Point3M, TourState};

/// Sucht vorwärts ab `index` den Vorausschau-Vertex.
///
/// Erster Vertex mit `m > m[index] + lookahead_m`, sonst der letzte Vertex.
/// Lineare Suche: der relevante Bereich liegt immer dicht hinter dem
/// aktuellen Index. `None`, wenn hinter `index` kein Vertex mehr liegt.
pub fn lookahead_index(part: &[Point3M], index: usize, lookahead_m: f64) -> Option<usize> {
    let max_index = part.len().checked_sub(1)?;
    if index >= max_index {
        return None;
    }

    let ahead_m = part[index].m_or_zero() + lookahead_m;
    let mut ahead = index + 1;
    while ahead < max_index && part[ahead].m_or_zero() <= ahead_m {
        ahead += 1;
    }
    Some(ahead)
}

/// Berechnet die Pose für `state.point_index`.
///
/// Die Blickrichtung ist das geodätische Azimut zum Vorausschau-Vertex.
/// Ohne Vorausschau-Vertex (Routenende) oder bei zusammenfallenden Punkten
/// bleibt `previous_heading_deg` erhalten. `None` für leere Routen.
pub fn pose_at(route: &Path, state: &TourState, previous_heading_deg: f64) -> Option<CameraPose> {
    let part = route.first_part();
    let index = state.clamped_index().min(part.len().checked_sub(1)?);
    let position = part[index];

    let heading_deg = lookahead_index(part, index, state.lookahead_distance)
        .and_then(|ahead| {
            route
                .spatial_reference()
                .azimuth_deg(&position, &part[ahead])
        })
        .unwrap_or(previous_heading_deg);

    Some(CameraPose {
        position,
        heading_deg,
        tilt_deg: state.lookdown_tilt_deg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipeline::assign_distance_along;
    use approx::assert_relative_eq;

    /// Route nach Osten, dann nach Norden (planar, M = Distanz).
    fn corner_route() -> Path {
        assign_distance_along(&Path::planar(&[
            [0.0, 0.0, 0.0],
            [10.0, 0.0, 0.0],
            [20.0, 0.0, 0.0],
            [20.0, 10.0, 0.0],
            [20.0, 20.0, 0.0],
        ]))
    }

    fn state_at(index: i64, lookahead: f64, route: &Path) -> TourState {
        let mut state = TourState::new();
        state.reset_for_route(route.first_part().len());
        state.lookahead_distance = lookahead;
        state.seek(index);
        state
    }

    #[test]
    fn zero_lookahead_targets_next_vertex() {
        let route = corner_route();
        assert_eq!(lookahead_index(route.first_part(), 1, 0.0), Some(2));

        let pose = pose_at(&route, &state_at(2, 0.0, &route), 0.0).expect("Pose erwartet");
        assert_eq!(pose.position, route.first_part()[2]);
        assert_relative_eq!(pose.heading_deg, 0.0);
    }

    #[test]
    fn lookahead_skips_vertices_within_distance() {
        let route = corner_route();
        // m: 0, 10, 20, 30, 40 → erster Vertex mit m > 0 + 15 ist Index 2
        assert_eq!(lookahead_index(route.first_part(), 0, 15.0), Some(2));
        // Vorausschau über das Ende hinaus → letzter Vertex
        assert_eq!(lookahead_index(route.first_part(), 1, 500.0), Some(4));
    }

    #[test]
    fn heading_follows_direction_of_travel() {
        let route = corner_route();
        let east = pose_at(&route, &state_at(0, 0.0, &route), 123.0).expect("Pose");
        assert_relative_eq!(east.heading_deg, 90.0);

        // Vorausschau um die Ecke: von (10,0) auf (20,10) → Nordost
        let corner = pose_at(&route, &state_at(1, 15.0, &route), 0.0).expect("Pose");
        assert_relative_eq!(corner.heading_deg, 45.0, epsilon = 1e-9);
    }

    #[test]
    fn last_vertex_keeps_previous_heading() {
        let route = corner_route();
        assert_eq!(lookahead_index(route.first_part(), 4, 10.0), None);

        let pose = pose_at(&route, &state_at(4, 10.0, &route), 77.0).expect("Pose");
        assert_relative_eq!(pose.heading_deg, 77.0);
        assert_eq!(pose.position, route.first_part()[4]);
    }

    #[test]
    fn pose_uses_lookdown_tilt() {
        let route = corner_route();
        let mut state = state_at(0, 0.0, &route);
        state.lookdown_tilt_deg = 70.0;
        let pose = pose_at(&route, &state, 0.0).expect("Pose");
        assert_relative_eq!(pose.tilt_deg, 70.0);
    }

    #[test]
    fn empty_route_has_no_pose() {
        let route = Path::planar(&[]);
        assert!(pose_at(&route, &TourState::new(), 0.0).is_none());
    }
}
