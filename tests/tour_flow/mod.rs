use pipeline_tour::{
    AppController, AppIntent, AppState, Path, TourEvent, TourOptions,
};

mod arbitration;
mod playback;
mod route;

/// Zickzack-Route mit 5 Vertices (kein Vertex kollinear).
pub fn zigzag() -> Path {
    Path::planar(&[
        [0.0, 0.0, 0.0],
        [10.0, 5.0, 0.0],
        [20.0, 0.0, 0.0],
        [30.0, 5.0, 0.0],
        [40.0, 0.0, 0.0],
    ])
}

/// Optionen, unter denen die Zickzack-Route unverändert bleibt.
pub fn exact_options() -> TourOptions {
    TourOptions {
        densify_interval: 50.0,
        smoothing_iterations: 0,
        ..TourOptions::default()
    }
}

/// State mit geladener Zickzack-Route bei 10 fps; Events bereits abgeholt.
pub fn loaded_state(controller: &mut AppController) -> AppState {
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::OptionsChanged {
                options: exact_options(),
            },
        )
        .expect("Optionen sollten gültig sein");
    controller
        .handle_intent(
            &mut state,
            AppIntent::RouteSelected {
                source: Some(zigzag()),
            },
        )
        .expect("Route sollte laden");
    controller
        .handle_intent(&mut state, AppIntent::PlaybackFpsChanged { fps: 10.0 })
        .expect("Bildrate sollte gültig sein");
    state.drain_events();
    state
}

/// Slider-Werte aus einer Event-Liste.
pub fn slider_values(events: &[TourEvent]) -> Vec<i64> {
    events
        .iter()
        .filter_map(|e| match e {
            TourEvent::SliderValueUpdated { index } => Some(*index),
            _ => None,
        })
        .collect()
}
