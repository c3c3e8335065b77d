//! Scheduler mit virtueller Uhr für deterministische Tests und Simulationen.

use super::{sanitize_delay, DueTask, FrameScheduler, FrameTarget, TaskHandle, TaskQueue};

/// Scheduler ohne Wanduhr: Zeit vergeht nur über [`FrameScheduler::advance_to`].
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: f64,
    queue: TaskQueue,
}

impl ManualScheduler {
    /// Erstellt einen Scheduler bei Zeit 0.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameScheduler for ManualScheduler {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn schedule(&mut self, target: FrameTarget, delay_ms: f64) -> TaskHandle {
        self.queue.push(target, self.now_ms + sanitize_delay(delay_ms))
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.queue.remove(handle)
    }

    fn pop_due(&mut self) -> Option<DueTask> {
        self.queue.pop_due(self.now_ms)
    }

    fn next_due_ms(&self) -> Option<f64> {
        self.queue.next_due_ms()
    }

    fn advance_to(&mut self, time_ms: f64) {
        // Uhr läuft nie rückwärts
        if time_ms > self.now_ms {
            self.now_ms = time_ms;
        }
    }

    fn pending_count(&self) -> usize {
        self.queue.len()
    }
}
