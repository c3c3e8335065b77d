use crate::app::scheduler::{FrameScheduler, FrameTarget, TaskHandle};
use crate::core::{TourError, TourState};

/// Wiedergabe-Zustand der Tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Keine Route geladen
    #[default]
    Idle,
    /// Route geladen, Index steht
    Stopped,
    /// Index läuft im Frame-Takt
    Playing,
}

/// Ergebnis eines ausgeführten Tour-Frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    /// Neuer Index
    pub index: i64,
    /// Runde beendet, Index auf 0 zurückgesetzt
    pub wrapped: bool,
    /// Wartezeit bis zum nächsten Frame (ms)
    pub next_delay_ms: f64,
}

/// Zustandsmaschine der Tour-Wiedergabe.
#[derive(Debug, Default)]
pub struct TourAnimator {
    state: PlaybackState,
    vertex_count: usize,
    pending: Option<TaskHandle>,
    frames: u64,
    laps: u64,
}

impl TourAnimator {
    /// Erstellt einen Animator ohne Route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Wiedergabe-Zustand.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// `true` während der Wiedergabe.
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Aktuell geplanter Frame.
    pub fn pending(&self) -> Option<TaskHandle> {
        self.pending
    }

    /// Anzahl ausgeführter Frames seit Programmstart.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Anzahl abgeschlossener Runden seit Programmstart.
    pub fn laps(&self) -> u64 {
        self.laps
    }

    /// Neue Route übernommen: laufende Wiedergabe abbrechen, Zustand `Stopped`.
    pub fn load_route(&mut self, scheduler: &mut dyn FrameScheduler, vertex_count: usize) {
        self.cancel_pending(scheduler);
        self.vertex_count = vertex_count;
        self.state = PlaybackState::Stopped;
    }

    /// Route entfernt: Zustand `Idle`.
    pub fn clear_route(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.cancel_pending(scheduler);
        self.vertex_count = 0;
        self.state = PlaybackState::Idle;
    }

    /// Prüft, ob die geladene Route abgespielt bzw. angesteuert werden kann.
    pub fn ensure_tourable(&self) -> Result<(), TourError> {
        match self.state {
            PlaybackState::Idle => Err(TourError::NoRoute),
            _ if self.vertex_count < 2 => Err(TourError::DegenerateRoute {
                vertex_count: self.vertex_count,
            }),
            _ => Ok(()),
        }
    }

    /// Startet die Wiedergabe; der erste Frame ist sofort fällig.
    ///
    /// Eine eventuell noch geplante Frame-Kette wird vorher abgebrochen.
    pub fn play(&mut self, scheduler: &mut dyn FrameScheduler) -> Result<(), TourError> {
        self.ensure_tourable()?;
        self.cancel_pending(scheduler);
        self.pending = Some(scheduler.schedule(FrameTarget::Tour, 0.0));
        self.state = PlaybackState::Playing;
        Ok(())
    }

    /// Hält die Wiedergabe an. `true`, wenn vorher abgespielt wurde.
    pub fn pause(&mut self, scheduler: &mut dyn FrameScheduler) -> bool {
        self.cancel_pending(scheduler);
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Stopped;
            true
        } else {
            false
        }
    }

    /// Führt einen fälligen Frame aus und plant den nächsten.
    ///
    /// `None` für veraltete Handles (abgebrochene Ketten) oder ohne Wiedergabe.
    pub fn on_frame(
        &mut self,
        handle: TaskHandle,
        scheduler: &mut dyn FrameScheduler,
        tour: &mut TourState,
        loop_pause_ms: f64,
    ) -> Option<FrameOutcome> {
        if self.state != PlaybackState::Playing || self.pending != Some(handle) {
            log::trace!("Veralteter Tour-Frame {} verworfen", handle.id());
            return None;
        }

        let next = tour.point_index + 1;
        let (wrapped, next_delay_ms) = if next >= tour.max_index {
            tour.point_index = 0;
            (true, loop_pause_ms)
        } else {
            tour.point_index = next;
            (false, tour.frame_delay_ms())
        };

        self.frames += 1;
        if wrapped {
            self.laps += 1;
        }
        self.pending = Some(scheduler.schedule(FrameTarget::Tour, next_delay_ms));

        Some(FrameOutcome {
            index: tour.point_index,
            wrapped,
            next_delay_ms,
        })
    }

    fn cancel_pending(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
    }
}
