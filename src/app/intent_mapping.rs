//! Mapping von Host-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::RouteSelected {
            source: Some(source),
        } => vec![AppCommand::LoadRoute { source }],
        AppIntent::RouteSelected { source: None } => vec![AppCommand::ClearRoute],
        AppIntent::RouteFileSelected { path } => vec![AppCommand::LoadRouteFile { path }],
        AppIntent::NearestAlongRouteRequested { location } => {
            vec![AppCommand::ReseedFromLocation { location }]
        }

        AppIntent::OffsetChanged { value } => vec![AppCommand::SetOffsetZ { value }],
        AppIntent::DensifyIntervalChanged { value } => {
            vec![AppCommand::SetDensifyInterval { value }]
        }
        AppIntent::LookaheadChanged { value } => vec![AppCommand::SetLookahead { value }],
        AppIntent::LookdownChanged { value } => vec![AppCommand::SetLookdown { value }],
        AppIntent::PlaybackFpsChanged { fps } => vec![AppCommand::SetPlaybackFps { fps }],
        AppIntent::PlaybackSpeedToggled { fast } => vec![AppCommand::SetFastPlayback { fast }],

        AppIntent::PlayPauseToggled => {
            if state.is_playing() {
                vec![AppCommand::Pause]
            } else {
                vec![AppCommand::Play]
            }
        }
        AppIntent::PlayRequested => vec![AppCommand::Play],
        AppIntent::PauseRequested => vec![AppCommand::Pause],
        AppIntent::SeekRequested { index } => vec![AppCommand::Seek { index }],
        AppIntent::GoToStartRequested => vec![AppCommand::Seek { index: 0 }],
        AppIntent::StepForwardRequested => vec![AppCommand::Seek {
            index: state.point_index().saturating_add(1),
        }],
        AppIntent::StepBackRequested => vec![AppCommand::Seek {
            index: state.point_index().saturating_sub(1),
        }],

        AppIntent::SpinToggled { direction } => vec![AppCommand::ToggleSpin { direction }],
        AppIntent::SpinPauseRequested => vec![AppCommand::PauseSpin],
        AppIntent::SpinResumeRequested => vec![AppCommand::ResumeSpin],

        AppIntent::HeadingSetRequested { heading_deg } => {
            vec![AppCommand::SetHeading { heading_deg }]
        }
        AppIntent::HeadingNudged { clockwise } => {
            let step = state.options.heading_nudge_deg;
            vec![AppCommand::NudgeHeading {
                delta_deg: if clockwise { step } else { -step },
            }]
        }
        AppIntent::ClipDistanceChanged { far } => vec![AppCommand::SetClipFar { far }],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
