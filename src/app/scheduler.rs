//! Abbrechbare Frame-Planung für Tour- und Dreh-Animator.
//!
//! Der Scheduler ersetzt die Kombination aus Timer und Display-Refresh:
//! Animatoren planen genau einen Folge-Frame, der Host pumpt fällige
//! Frames über den Controller. [`ManualScheduler`] läuft auf einer
//! virtuellen Uhr (Tests), [`RealtimeScheduler`] auf der Wanduhr.

mod manual;
mod realtime;

pub use manual::ManualScheduler;
pub use realtime::RealtimeScheduler;

/// Empfänger eines geplanten Frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameTarget {
    /// Tour-Animator
    Tour,
    /// Dreh-Animator
    Spin,
}

/// Eindeutige Kennung eines geplanten Frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

impl TaskHandle {
    /// Numerischer Wert (für Logs).
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Fälliger Frame, vom Scheduler an den Host übergeben.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DueTask {
    /// Kennung des Frames
    pub handle: TaskHandle,
    /// Empfänger
    pub target: FrameTarget,
    /// Geplanter Zeitpunkt in Millisekunden
    pub due_ms: f64,
}

/// Planungs-Schnittstelle der Animatoren.
///
/// Alle Zeiten in Millisekunden seit Erzeugung des Schedulers.
pub trait FrameScheduler {
    /// Aktuelle Zeit.
    fn now_ms(&self) -> f64;
    /// Plant einen Frame `delay_ms` nach jetzt.
    fn schedule(&mut self, target: FrameTarget, delay_ms: f64) -> TaskHandle;
    /// Bricht einen geplanten Frame ab. `false`, wenn er nicht (mehr) geplant war.
    fn cancel(&mut self, handle: TaskHandle) -> bool;
    /// Entnimmt den frühesten fälligen Frame (`due_ms <= now_ms`).
    fn pop_due(&mut self) -> Option<DueTask>;
    /// Zeitpunkt des frühesten geplanten Frames.
    fn next_due_ms(&self) -> Option<f64>;
    /// Bewegt die Uhr bis `time_ms` (virtuell oder durch Warten).
    fn advance_to(&mut self, time_ms: f64);
    /// Anzahl geplanter Frames.
    fn pending_count(&self) -> usize;
}

/// Gemeinsame Warteschlange beider Scheduler.
///
/// Reihenfolge: Fälligkeit, bei Gleichstand Planungsreihenfolge.
#[derive(Debug, Default)]
pub(crate) struct TaskQueue {
    next_id: u64,
    tasks: Vec<DueTask>,
}

impl TaskQueue {
    pub(crate) fn push(&mut self, target: FrameTarget, due_ms: f64) -> TaskHandle {
        self.next_id += 1;
        let handle = TaskHandle(self.next_id);
        self.tasks.push(DueTask {
            handle,
            target,
            due_ms,
        });
        handle
    }

    pub(crate) fn remove(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.handle != handle);
        self.tasks.len() != before
    }

    fn earliest_position(&self) -> Option<usize> {
        self.tasks
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                a.due_ms
                    .total_cmp(&b.due_ms)
                    .then(a.handle.cmp(&b.handle))
            })
            .map(|(pos, _)| pos)
    }

    pub(crate) fn pop_due(&mut self, now_ms: f64) -> Option<DueTask> {
        let pos = self.earliest_position()?;
        if self.tasks[pos].due_ms <= now_ms {
            Some(self.tasks.remove(pos))
        } else {
            None
        }
    }

    pub(crate) fn next_due_ms(&self) -> Option<f64> {
        self.earliest_position().map(|pos| self.tasks[pos].due_ms)
    }

    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }
}

/// Verzögerung für den Scheduler: negative oder ungültige Werte → sofort.
pub(crate) fn sanitize_delay(delay_ms: f64) -> f64 {
    if delay_ms.is_finite() {
        delay_ms.max(0.0)
    } else {
        0.0
    }
}
