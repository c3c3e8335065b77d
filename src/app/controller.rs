//! Application Controller für zentrale Event-Verarbeitung.

use super::scheduler::FrameTarget;
use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Host-Events, fällige Frames und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Route ===
            AppCommand::LoadRoute { source } => handlers::route::load(state, source)?,
            AppCommand::LoadRouteFile { path } => handlers::route::load_file(state, &path)?,
            AppCommand::ClearRoute => handlers::route::clear(state),
            AppCommand::ReseedFromLocation { location } => {
                handlers::route::reseed(state, location)
            }
            AppCommand::SetOffsetZ { value } => handlers::route::set_offset_z(state, value)?,
            AppCommand::SetDensifyInterval { value } => {
                handlers::route::set_densify_interval(state, value)?
            }

            // === Wiedergabe ===
            AppCommand::Play => handlers::playback::play(state),
            AppCommand::Pause => handlers::playback::pause(state),
            AppCommand::Seek { index } => handlers::playback::seek(state, index),
            AppCommand::RunTourFrame { handle } => handlers::playback::run_tour_frame(state, handle),
            AppCommand::SetLookahead { value } => handlers::playback::set_lookahead(state, value)?,
            AppCommand::SetLookdown { value } => handlers::playback::set_lookdown(state, value)?,
            AppCommand::SetPlaybackFps { fps } => handlers::playback::set_playback_fps(state, fps)?,
            AppCommand::SetFastPlayback { fast } => {
                handlers::playback::set_fast_playback(state, fast)?
            }

            // === Kamera ===
            AppCommand::ToggleSpin { direction } => handlers::camera::toggle_spin(state, direction),
            AppCommand::PauseSpin => handlers::camera::pause_spin(state),
            AppCommand::ResumeSpin => handlers::camera::resume_spin(state),
            AppCommand::RunSpinFrame { handle } => handlers::camera::run_spin_frame(state, handle),
            AppCommand::SetHeading { heading_deg } => {
                handlers::camera::set_heading(state, heading_deg)?
            }
            AppCommand::NudgeHeading { delta_deg } => {
                handlers::camera::nudge_heading(state, delta_deg)?
            }
            AppCommand::SetClipFar { far } => handlers::camera::set_clip_far(state, far)?,

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options)?,
            AppCommand::ResetOptions => handlers::options::reset(state)?,
        }

        Ok(())
    }

    /// Führt alle aktuell fälligen Frames aus. Gibt deren Anzahl zurück.
    pub fn pump(&mut self, state: &mut AppState) -> anyhow::Result<usize> {
        let mut executed = 0;
        while let Some(task) = state.scheduler.pop_due() {
            let command = match task.target {
                FrameTarget::Tour => AppCommand::RunTourFrame {
                    handle: task.handle,
                },
                FrameTarget::Spin => AppCommand::RunSpinFrame {
                    handle: task.handle,
                },
            };
            self.handle_command(state, command)?;
            executed += 1;
        }
        Ok(executed)
    }

    /// Lässt die Uhr bis `until_ms` laufen und führt jeden Frame zu seiner Zeit aus.
    ///
    /// Mit [`ManualScheduler`](super::scheduler::ManualScheduler) deterministisch
    /// und ohne Warten, mit dem Echtzeit-Scheduler wird tatsächlich gewartet.
    pub fn run_until(&mut self, state: &mut AppState, until_ms: f64) -> anyhow::Result<usize> {
        let mut executed = self.pump(state)?;
        while let Some(due) = state.scheduler.next_due_ms().filter(|due| *due <= until_ms) {
            state.scheduler.advance_to(due);
            executed += self.pump(state)?;
        }
        state.scheduler.advance_to(until_ms);
        executed += self.pump(state)?;
        Ok(executed)
    }
}
