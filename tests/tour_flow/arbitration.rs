use approx::assert_relative_eq;
use pipeline_tour::{AppController, AppIntent, CameraOwner, SpinDirection, TourEvent};

use super::loaded_state;

#[test]
fn test_spin_displaces_tour_and_tour_displaces_spin() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::PlayRequested)
        .expect("ok");
    assert_eq!(state.animation.owner, CameraOwner::Tour);

    controller
        .handle_intent(
            &mut state,
            AppIntent::SpinToggled {
                direction: SpinDirection::Right,
            },
        )
        .expect("ok");
    assert!(!state.is_playing(), "Drehung pausiert die Tour");
    assert_eq!(state.animation.owner, CameraOwner::Spin);

    controller
        .handle_intent(&mut state, AppIntent::PlayRequested)
        .expect("ok");
    assert!(state.is_playing());
    assert!(!state.animation.spin.is_active(), "Tour pausiert die Drehung");
    assert_eq!(state.animation.owner, CameraOwner::Tour);
    assert_eq!(state.scheduler.pending_count(), 1);

    controller
        .handle_intent(&mut state, AppIntent::SpinResumeRequested)
        .expect("ok");
    assert_eq!(state.animation.spin.direction(), SpinDirection::Right);
    assert!(!state.is_playing());
    assert_eq!(state.scheduler.pending_count(), 1);
}

#[test]
fn test_spin_rotates_heading_at_spin_rate() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    controller
        .handle_intent(&mut state, AppIntent::HeadingSetRequested { heading_deg: 0.0 })
        .expect("ok");

    controller
        .handle_intent(
            &mut state,
            AppIntent::SpinToggled {
                direction: SpinDirection::Left,
            },
        )
        .expect("ok");
    controller.run_until(&mut state, 50.0).expect("ok");

    // Frames bei 0, 11.1, 22.2, 33.3, 44.4 ms
    assert_relative_eq!(state.camera.heading_deg, 359.5, epsilon = 1e-9);

    controller
        .handle_intent(&mut state, AppIntent::SpinPauseRequested)
        .expect("ok");
    let heading = state.camera.heading_deg;
    controller.run_until(&mut state, 500.0).expect("ok");
    assert_relative_eq!(state.camera.heading_deg, heading);
    assert_eq!(state.animation.owner, CameraOwner::None);
}

#[test]
fn test_heading_presets_and_nudges_are_normalized() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::HeadingSetRequested { heading_deg: 360.0 })
        .expect("ok");
    assert_relative_eq!(state.camera.heading_deg, 0.0);

    controller
        .handle_intent(&mut state, AppIntent::HeadingNudged { clockwise: false })
        .expect("ok");
    assert_relative_eq!(state.camera.heading_deg, 355.0);

    let headings: Vec<f64> = state
        .drain_events()
        .into_iter()
        .filter_map(|e| match e {
            TourEvent::HeadingChanged { heading_deg } => Some(heading_deg),
            _ => None,
        })
        .collect();
    assert_eq!(headings, vec![0.0, 355.0]);

    assert!(controller
        .handle_intent(&mut state, AppIntent::HeadingSetRequested { heading_deg: f64::NAN })
        .is_err());
    assert_relative_eq!(state.camera.heading_deg, 355.0);
}

#[test]
fn test_clip_distance_is_forwarded_with_pose() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::ClipDistanceChanged { far: 12_000.0 })
        .expect("ok");
    controller
        .handle_intent(&mut state, AppIntent::SeekRequested { index: 1 })
        .expect("ok");

    let clip = state.drain_events().into_iter().rev().find_map(|e| match e {
        TourEvent::PoseUpdated { clip_far, .. } => Some(clip_far),
        _ => None,
    });
    assert_eq!(clip, Some(12_000.0));
    assert!(controller
        .handle_intent(&mut state, AppIntent::ClipDistanceChanged { far: -1.0 })
        .is_err());
    assert_eq!(state.options.clip_far, 12_000.0);
}
