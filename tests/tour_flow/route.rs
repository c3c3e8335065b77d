use approx::assert_relative_eq;
use glam::DVec2;
use pipeline_tour::{AppController, AppIntent, AppState, Path, TourEvent};

use super::{loaded_state, slider_values};

#[test]
fn test_route_load_emits_bounds_pose_and_labels_in_order() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::OptionsChanged {
                options: super::exact_options(),
            },
        )
        .expect("ok");
    controller
        .handle_intent(
            &mut state,
            AppIntent::RouteSelected {
                source: Some(super::zigzag()),
            },
        )
        .expect("Route sollte laden");

    let events = state.drain_events();
    assert!(matches!(
        events[..],
        [
            TourEvent::SliderBoundsUpdated { max_index: 4 },
            TourEvent::PoseUpdated { .. },
            TourEvent::DistanceLabelUpdated { .. },
            TourEvent::SliderValueUpdated { index: 0 },
        ]
    ));

    let TourEvent::DistanceLabelUpdated {
        total_km,
        current_km,
    } = &events[2]
    else {
        panic!("Distanz-Anzeige erwartet");
    };
    assert_relative_eq!(*total_km, 4.0 * 125.0_f64.sqrt() / 1000.0, epsilon = 1e-12);
    assert_relative_eq!(*current_km, 0.0);
}

#[test]
fn test_nearest_click_reseeds_index() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(
            &mut state,
            AppIntent::NearestAlongRouteRequested {
                location: DVec2::new(29.0, 4.0),
            },
        )
        .expect("ok");

    assert_eq!(state.point_index(), 3);
    assert_eq!(slider_values(&state.drain_events()), vec![3]);
}

#[test]
fn test_degenerate_route_is_reported_not_played() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::RouteSelected {
                source: Some(Path::planar(&[[1.0, 1.0, 0.0]])),
            },
        )
        .expect("Degenerierte Route ist kein Fehler");
    let events = state.drain_events();
    assert!(events.contains(&TourEvent::RouteInvalid { vertex_count: 1 }));
    assert_eq!(state.max_index(), 0);

    controller
        .handle_intent(&mut state, AppIntent::PlayRequested)
        .expect("Play wird abgelehnt, nicht abgebrochen");
    controller
        .handle_intent(&mut state, AppIntent::SeekRequested { index: 3 })
        .expect("Seek wird abgelehnt, nicht abgebrochen");

    assert!(!state.is_playing());
    assert_eq!(state.scheduler.pending_count(), 0);
    let invalid = state
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, TourEvent::RouteInvalid { .. }))
        .count();
    assert_eq!(invalid, 2);
}

#[test]
fn test_rejected_densify_interval_keeps_route() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    let before = state.route.geometry.clone();

    let result =
        controller.handle_intent(&mut state, AppIntent::DensifyIntervalChanged { value: 0.0 });

    assert!(result.is_err());
    assert_eq!(state.tour.densify_interval, 50.0);
    assert_eq!(state.route.geometry, before);
    assert!(state.drain_events().is_empty());
}

#[test]
fn test_densify_change_rebuilds_with_more_vertices() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::DensifyIntervalChanged { value: 2.0 })
        .expect("ok");

    // 4 Segmente à 11.18 m / 2 m → je 6 Stücke
    assert_eq!(state.max_index(), 24);
    assert_eq!(state.point_index(), 0);
}

#[test]
fn test_offset_change_during_playback_stops_and_resets() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::PlayRequested)
        .expect("ok");
    controller.run_until(&mut state, 150.0).expect("ok");
    assert_eq!(state.point_index(), 2);
    state.drain_events();

    controller
        .handle_intent(&mut state, AppIntent::OffsetChanged { value: 5.0 })
        .expect("ok");

    assert!(!state.is_playing());
    assert_eq!(state.point_index(), 0);
    assert_eq!(state.scheduler.pending_count(), 0);

    let pose_z = state.drain_events().into_iter().find_map(|e| match e {
        TourEvent::PoseUpdated { pose, .. } => Some(pose.position.z),
        _ => None,
    });
    assert_eq!(pose_z, Some(5.0));
}

#[test]
fn test_lookahead_zero_heads_to_next_vertex() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::LookaheadChanged { value: 0.0 })
        .expect("ok");

    // (0,0) → (10,5): Azimut atan2(10, 5)
    let expected = 10.0_f64.atan2(5.0).to_degrees();
    assert_relative_eq!(state.camera.heading_deg, expected, epsilon = 1e-9);

    controller
        .handle_intent(&mut state, AppIntent::SeekRequested { index: 4 })
        .expect("ok");
    assert_relative_eq!(state.camera.heading_deg, expected, epsilon = 1e-9);
}

#[test]
fn test_route_file_loads_geographic_route() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_route.json");

    controller
        .handle_intent(
            &mut state,
            AppIntent::RouteFileSelected {
                path: path.to_string(),
            },
        )
        .expect("Routen-Datei sollte laden");

    assert!(state.route.is_tourable());
    assert!(state.route.total_km() > 0.3 && state.route.total_km() < 0.6);
    let heading = state.camera.heading_deg;
    assert!((0.0..360.0).contains(&heading));
    // Route läuft nach Nordosten
    assert!(heading > 0.0 && heading < 90.0, "Heading {heading}");
}

#[test]
fn test_missing_route_file_is_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::RouteFileSelected {
            path: "/nonexistent/route.json".to_string(),
        },
    );

    assert!(result.is_err());
    assert!(!state.route.is_tourable());
}

#[test]
fn test_densify_interval_exceeding_vertex_limit_keeps_route() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    let before = state.route.geometry.clone();

    let result =
        controller.handle_intent(&mut state, AppIntent::DensifyIntervalChanged { value: 1e-6 });

    assert!(result.is_err());
    assert_eq!(state.tour.densify_interval, 50.0);
    assert_eq!(state.options.densify_interval, 50.0);
    assert_eq!(state.route.geometry, before);
    assert_eq!(state.max_index(), 4);
}

#[test]
fn test_vertical_shaft_route_loads_and_reseeds() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut coords: Vec<[f64; 3]> = (0..80)
        .map(|i| [0.0, 0.0, if i % 2 == 0 { 0.0 } else { 10.0 }])
        .collect();
    coords.push([1.0, 0.0, 0.0]);

    controller
        .handle_intent(
            &mut state,
            AppIntent::RouteSelected {
                source: Some(Path::planar(&coords)),
            },
        )
        .expect("Route mit Schacht sollte laden");
    assert!(state.max_index() > 32);

    controller
        .handle_intent(&mut state, AppIntent::SeekRequested { index: 40 })
        .expect("ok");
    controller
        .handle_intent(
            &mut state,
            AppIntent::NearestAlongRouteRequested {
                location: DVec2::new(-1.0, 0.0),
            },
        )
        .expect("ok");
    assert_eq!(state.point_index(), 0);
}

#[test]
fn test_fixture_parses_to_single_part_path() {
    let json = include_str!("../fixtures/sample_route.json");

    let path = pipeline_tour::parse_route_document(json).expect("Fixture sollte parsen");

    assert_eq!(path.part_count(), 1);
    assert_eq!(path.vertex_count(), 6);
    assert!(path.has_z());
}
