use std::collections::VecDeque;

use crate::app::scheduler::{FrameScheduler, ManualScheduler};
use crate::app::{CommandLog, TourEvent};
use crate::core::{Camera3D, RouteParams, TourState};
use crate::shared::TourOptions;

use super::{AnimationState, RouteState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Quell-Geometrie, Route und Spatial-Index
    pub route: RouteState,
    /// Tour-Index und Tour-Parameter
    pub tour: TourState,
    /// Geteilte Kamera von Tour und Drehung
    pub camera: Camera3D,
    /// Animatoren und Kamera-Besitz
    pub animation: AnimationState,
    /// Frame-Planung
    pub scheduler: Box<dyn FrameScheduler>,
    /// Laufzeit-Optionen
    pub options: TourOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Ausgehende Benachrichtigungen in Auslösereihenfolge
    events: VecDeque<TourEvent>,
}

impl AppState {
    /// Erstellt einen leeren App-State mit virtueller Uhr.
    pub fn new() -> Self {
        Self::with_options(TourOptions::default(), Box::new(ManualScheduler::new()))
    }

    /// Erstellt einen App-State mit gegebenem Scheduler.
    pub fn with_scheduler(scheduler: Box<dyn FrameScheduler>) -> Self {
        Self::with_options(TourOptions::default(), scheduler)
    }

    /// Erstellt einen App-State aus geprüften Optionen.
    ///
    /// Ungültige Einzelwerte fallen auf die Standardwerte des Tour-Zustands zurück.
    pub fn with_options(options: TourOptions, scheduler: Box<dyn FrameScheduler>) -> Self {
        let mut state = Self {
            route: RouteState::new(),
            tour: TourState::new(),
            camera: Camera3D::new(),
            animation: AnimationState::new(),
            scheduler,
            options,
            command_log: CommandLog::new(),
            events: VecDeque::new(),
        };
        state.sync_tour_from_options();
        state
    }

    /// Überträgt Tour- und Kamera-Parameter aus den Optionen.
    pub(crate) fn sync_tour_from_options(&mut self) {
        let opts = &self.options;
        let results = [
            self.tour.set_offset_z(opts.offset_z),
            self.tour.set_densify_interval(opts.densify_interval),
            self.tour.set_lookahead_distance(opts.lookahead_distance),
            self.tour.set_lookdown_tilt(opts.lookdown_tilt_deg),
            self.tour.set_playback_fps(opts.current_fps()),
        ];
        for err in results.into_iter().filter_map(Result::err) {
            log::warn!("Option verworfen: {}", err);
        }
        self.camera.clip_near = opts.clip_near;
        if !self.camera.set_clip_far(opts.clip_far) {
            log::warn!("Ferne Clip-Distanz {} verworfen", opts.clip_far);
        }
    }

    /// Form-Parameter für den nächsten Routen-Neuaufbau.
    pub fn route_params(&self) -> RouteParams {
        RouteParams {
            offset_z: self.tour.offset_z,
            densify_interval: self.tour.densify_interval,
            ..self.options.route_params()
        }
    }

    /// Hängt eine Benachrichtigung an die Warteschlange.
    pub fn emit(&mut self, event: TourEvent) {
        log::trace!("Event: {:?}", event);
        self.events.push_back(event);
    }

    /// Entnimmt alle wartenden Benachrichtigungen in Auslösereihenfolge.
    pub fn drain_events(&mut self) -> Vec<TourEvent> {
        self.events.drain(..).collect()
    }

    /// Anzahl wartender Benachrichtigungen.
    pub fn pending_event_count(&self) -> usize {
        self.events.len()
    }

    /// Aktueller Tour-Index (`-1` ohne Route).
    pub fn point_index(&self) -> i64 {
        self.tour.point_index
    }

    /// Höchster gültiger Tour-Index (`-1` ohne Route).
    pub fn max_index(&self) -> i64 {
        self.tour.max_index
    }

    /// `true` während die Tour abgespielt wird.
    pub fn is_playing(&self) -> bool {
        self.animation.tour.is_playing()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
