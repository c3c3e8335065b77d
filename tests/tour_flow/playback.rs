use pipeline_tour::{AppController, AppIntent, PlaybackState, TourEvent};

use super::{loaded_state, slider_values};

#[test]
fn test_tour_advances_and_pauses_once_per_lap() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    assert_eq!(state.max_index(), 4);

    controller
        .handle_intent(&mut state, AppIntent::PlayRequested)
        .expect("Play sollte durchlaufen");
    let frames = controller
        .run_until(&mut state, 400.0)
        .expect("Frames sollten laufen");

    let indices = slider_values(&state.drain_events());
    assert_eq!(frames, 4);
    assert_eq!(indices, vec![1, 2, 3, 0]);
    assert!(indices.iter().all(|i| (0..=state.max_index()).contains(i)));
    assert_eq!(state.animation.tour.laps(), 1);
    assert_eq!(
        state.scheduler.next_due_ms(),
        Some(1800.0),
        "Nach dem Rundenende folgt die lange Pause"
    );

    // Während der Pause passiert nichts
    assert_eq!(controller.run_until(&mut state, 1799.0).expect("ok"), 0);

    // Zweite Runde: wieder drei Schritte, dann genau eine Pause
    controller.run_until(&mut state, 2100.0).expect("ok");
    assert_eq!(slider_values(&state.drain_events()), vec![1, 2, 3, 0]);
    assert_eq!(state.animation.tour.laps(), 2);
    assert_eq!(state.scheduler.next_due_ms(), Some(3600.0));
}

#[test]
fn test_seek_clamps_to_route_bounds() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::SeekRequested { index: 9 })
        .expect("Seek ok");
    assert_eq!(state.point_index(), state.max_index());

    controller
        .handle_intent(&mut state, AppIntent::SeekRequested { index: -5 })
        .expect("Seek ok");
    assert_eq!(state.point_index(), 0);

    assert_eq!(slider_values(&state.drain_events()), vec![4, 0]);
}

#[test]
fn test_seek_keeps_playback_state() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::PlayRequested)
        .expect("Play ok");
    controller
        .handle_intent(&mut state, AppIntent::SeekRequested { index: 2 })
        .expect("Seek ok");

    assert!(state.is_playing());
    controller.run_until(&mut state, 0.0).expect("ok");
    assert_eq!(state.point_index(), 3, "Frame liest den gesetzten Index");
}

#[test]
fn test_play_pause_play_keeps_single_frame_chain() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    for intent in [
        AppIntent::PlayRequested,
        AppIntent::PauseRequested,
        AppIntent::PlayRequested,
        AppIntent::PlayRequested,
    ] {
        controller.handle_intent(&mut state, intent).expect("ok");
    }
    assert_eq!(state.scheduler.pending_count(), 1);

    let frames = controller.run_until(&mut state, 250.0).expect("ok");
    assert_eq!(frames, 3, "Frames bei 0, 100 und 200 ms");
}

#[test]
fn test_pause_stops_pose_emission() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::PlayPauseToggled)
        .expect("ok");
    controller.run_until(&mut state, 100.0).expect("ok");
    controller
        .handle_intent(&mut state, AppIntent::PlayPauseToggled)
        .expect("ok");
    state.drain_events();

    let frames = controller.run_until(&mut state, 5000.0).expect("ok");
    assert_eq!(frames, 0);
    assert!(state.drain_events().is_empty());
    assert_eq!(state.animation.tour.state(), PlaybackState::Stopped);
}

#[test]
fn test_speed_toggle_changes_cadence() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::PlaybackSpeedToggled { fast: true })
        .expect("ok");
    assert_eq!(state.tour.playback_fps, 9.0);

    controller
        .handle_intent(&mut state, AppIntent::PlayRequested)
        .expect("ok");
    controller.run_until(&mut state, 0.0).expect("ok");
    let next = state.scheduler.next_due_ms().expect("Folgeframe geplant");
    assert!((next - 1000.0 / 9.0).abs() < 1e-9);

    controller
        .handle_intent(&mut state, AppIntent::PlaybackSpeedToggled { fast: false })
        .expect("ok");
    assert_eq!(state.tour.playback_fps, 10.0, "Langsame Rate bleibt wie gesetzt");
}

#[test]
fn test_step_buttons_move_one_vertex() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::StepForwardRequested)
        .expect("ok");
    controller
        .handle_intent(&mut state, AppIntent::StepForwardRequested)
        .expect("ok");
    assert_eq!(state.point_index(), 2);

    controller
        .handle_intent(&mut state, AppIntent::StepBackRequested)
        .expect("ok");
    assert_eq!(state.point_index(), 1);

    controller
        .handle_intent(&mut state, AppIntent::GoToStartRequested)
        .expect("ok");
    assert_eq!(state.point_index(), 0);

    let states: Vec<_> = state
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, TourEvent::PlaybackStateChanged { .. }))
        .collect();
    assert!(states.is_empty(), "Schritte ändern den Wiedergabe-Zustand nicht");
}
