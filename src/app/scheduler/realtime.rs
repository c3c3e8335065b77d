//! Scheduler auf der Wanduhr für die Headless-Wiedergabe.

use std::time::{Duration, Instant};

use super::{sanitize_delay, DueTask, FrameScheduler, FrameTarget, TaskHandle, TaskQueue};

/// Scheduler, der bei [`FrameScheduler::advance_to`] tatsächlich wartet.
#[derive(Debug)]
pub struct RealtimeScheduler {
    start: Instant,
    queue: TaskQueue,
}

impl RealtimeScheduler {
    /// Erstellt einen Scheduler; Zeit 0 ist jetzt.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            queue: TaskQueue::default(),
        }
    }
}

impl Default for RealtimeScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for RealtimeScheduler {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    fn schedule(&mut self, target: FrameTarget, delay_ms: f64) -> TaskHandle {
        self.queue.push(target, self.now_ms() + sanitize_delay(delay_ms))
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.queue.remove(handle)
    }

    fn pop_due(&mut self) -> Option<DueTask> {
        self.queue.pop_due(self.now_ms())
    }

    fn next_due_ms(&self) -> Option<f64> {
        self.queue.next_due_ms()
    }

    fn advance_to(&mut self, time_ms: f64) {
        let remaining = time_ms - self.now_ms();
        if remaining > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(remaining / 1000.0));
        }
    }

    fn pending_count(&self) -> usize {
        self.queue.len()
    }
}
