//! Pipeline-Tour (Headless).
//!
//! Lädt eine Routen-Datei, baut die Route und spielt die Tour in Echtzeit
//! ab. Posen und Anzeigen werden geloggt.
//!
//! Aufruf: `pipeline-tour <route.json> [--options <datei.toml>] [--seconds N] [--fast]`

use clap::Parser;
use pipeline_tour::{
    AppController, AppIntent, AppState, RealtimeScheduler, TourEvent, TourOptions,
};

/// Kommandozeilen-Argumente.
#[derive(Parser, Debug)]
#[command(author, version, about = "Kamera-Tour entlang einer Pipeline-Route (headless)")]
struct CliArgs {
    /// Routen-Datei (JSON)
    route_path: String,

    /// Optionen-Datei (TOML); Standard: `pipeline_tour.toml` neben der Binary
    #[arg(long = "options")]
    options_path: Option<std::path::PathBuf>,

    /// Laufzeit der Wiedergabe in Sekunden
    #[arg(long, default_value_t = 10.0)]
    seconds: f64,

    /// Schnelle Wiedergabe
    #[arg(long)]
    fast: bool,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Pipeline-Tour v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = CliArgs::parse();

    // Optionen aus TOML laden (oder Standardwerte)
    let options_path = args
        .options_path
        .clone()
        .unwrap_or_else(TourOptions::config_path);
    let options = TourOptions::load_from_file(&options_path);

    let mut state = AppState::with_options(options, Box::new(RealtimeScheduler::new()));
    let mut controller = AppController::new();

    controller.handle_intent(
        &mut state,
        AppIntent::RouteFileSelected {
            path: args.route_path.clone(),
        },
    )?;
    if args.fast {
        controller.handle_intent(&mut state, AppIntent::PlaybackSpeedToggled { fast: true })?;
    }
    controller.handle_intent(&mut state, AppIntent::PlayRequested)?;
    log_events(&mut state);

    // Host-Schleife: Frames in kurzen Scheiben abarbeiten, Events ausgeben
    let until_ms = args.seconds.max(0.0) * 1000.0;
    let slice_ms = 250.0;
    let mut now_ms = 0.0;
    while now_ms < until_ms {
        now_ms = (now_ms + slice_ms).min(until_ms);
        controller.run_until(&mut state, now_ms)?;
        log_events(&mut state);
    }

    controller.handle_intent(&mut state, AppIntent::PauseRequested)?;
    log_events(&mut state);
    log::info!(
        "Tour beendet: {} Frames, {} Runden",
        state.animation.tour.frames(),
        state.animation.tour.laps()
    );
    Ok(())
}

/// Gibt alle wartenden Events im Log aus.
fn log_events(state: &mut AppState) {
    for event in state.drain_events() {
        match event {
            TourEvent::PoseUpdated { pose, clip_far } => log::debug!(
                "Pose: ({:.3}, {:.3}, {:.1}) Heading {:.1}° Tilt {:.1}° Clip {:.0} m",
                pose.position.x,
                pose.position.y,
                pose.position.z,
                pose.heading_deg,
                pose.tilt_deg,
                clip_far
            ),
            TourEvent::DistanceLabelUpdated {
                total_km,
                current_km,
            } => log::info!("{:.3} km / {:.3} km", current_km, total_km),
            TourEvent::RouteInvalid { vertex_count } => {
                log::error!("Route nicht abspielbar ({} Vertices)", vertex_count)
            }
            other => log::debug!("{:?}", other),
        }
    }
}
