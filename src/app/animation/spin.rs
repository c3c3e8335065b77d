use crate::app::scheduler::{FrameScheduler, FrameTarget, TaskHandle};
use crate::core::Camera3D;

/// Drehrichtung der Kamera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinDirection {
    /// Keine Drehung
    #[default]
    None,
    /// Gegen den Uhrzeigersinn
    Left,
    /// Im Uhrzeigersinn
    Right,
}

impl SpinDirection {
    /// Vorzeichen des Drehschritts.
    pub fn sign(self) -> f64 {
        match self {
            SpinDirection::None => 0.0,
            SpinDirection::Left => -1.0,
            SpinDirection::Right => 1.0,
        }
    }
}

/// Dreht die Kamera mit festem Schritt pro Frame, solange eine Richtung aktiv ist.
#[derive(Debug, Default)]
pub struct SpinAnimator {
    direction: SpinDirection,
    previous_direction: SpinDirection,
    pending: Option<TaskHandle>,
}

impl SpinAnimator {
    /// Erstellt einen inaktiven Dreh-Animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktive Richtung.
    pub fn direction(&self) -> SpinDirection {
        self.direction
    }

    /// Richtung, die [`SpinAnimator::resume`] wiederherstellt.
    pub fn previous_direction(&self) -> SpinDirection {
        self.previous_direction
    }

    /// `true` solange gedreht wird.
    pub fn is_active(&self) -> bool {
        self.direction != SpinDirection::None
    }

    /// Setzt die Richtung; `None` stoppt, jede andere plant sofort einen Frame.
    pub fn enable(&mut self, direction: SpinDirection, scheduler: &mut dyn FrameScheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        self.direction = direction;
        if direction != SpinDirection::None {
            self.pending = Some(scheduler.schedule(FrameTarget::Spin, 0.0));
        }
    }

    /// Umschalter der Links/Rechts-Buttons: gleiche Richtung nochmal → aus.
    pub fn toggle(
        &mut self,
        direction: SpinDirection,
        scheduler: &mut dyn FrameScheduler,
    ) -> SpinDirection {
        let next = if self.direction == direction {
            SpinDirection::None
        } else {
            direction
        };
        self.enable(next, scheduler);
        next
    }

    /// Merkt sich die aktuelle Richtung und stoppt.
    pub fn pause(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.previous_direction = self.direction;
        self.enable(SpinDirection::None, scheduler);
    }

    /// Setzt die vor [`SpinAnimator::pause`] aktive Richtung fort.
    pub fn resume(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.enable(self.previous_direction, scheduler);
    }

    /// Dreht die Kamera um einen Schritt und plant den nächsten Frame.
    ///
    /// Gibt das neue Heading zurück; `None` für veraltete Handles.
    pub fn on_frame(
        &mut self,
        handle: TaskHandle,
        scheduler: &mut dyn FrameScheduler,
        camera: &mut Camera3D,
        step_deg: f64,
        fps: f64,
    ) -> Option<f64> {
        if !self.is_active() || self.pending != Some(handle) {
            return None;
        }
        camera.rotate_heading(self.direction.sign() * step_deg);
        self.pending = Some(scheduler.schedule(FrameTarget::Spin, 1000.0 / fps));
        Some(camera.heading_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::scheduler::ManualScheduler;
    use approx::assert_relative_eq;

    fn spin_frames(
        spin: &mut SpinAnimator,
        sched: &mut ManualScheduler,
        camera: &mut Camera3D,
        until_ms: f64,
    ) -> usize {
        let mut count = 0;
        while let Some(due) = sched.next_due_ms().filter(|t| *t <= until_ms) {
            sched.advance_to(due);
            while let Some(task) = sched.pop_due() {
                if spin.on_frame(task.handle, sched, camera, 0.1, 90.0).is_some() {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn right_spin_increases_heading() {
        let mut sched = ManualScheduler::new();
        let mut camera = Camera3D::new();
        let mut spin = SpinAnimator::new();
        spin.enable(SpinDirection::Right, &mut sched);

        // t = 0 plus 8 Folgeframes im Abstand von 1000/90 ms
        let frames = spin_frames(&mut spin, &mut sched, &mut camera, 95.0);
        assert_eq!(frames, 9);
        assert_relative_eq!(camera.heading_deg, 0.9, epsilon = 1e-9);
    }

    #[test]
    fn left_spin_wraps_below_zero() {
        let mut sched = ManualScheduler::new();
        let mut camera = Camera3D::new();
        let mut spin = SpinAnimator::new();
        spin.enable(SpinDirection::Left, &mut sched);
        spin_frames(&mut spin, &mut sched, &mut camera, 0.0);
        assert_relative_eq!(camera.heading_deg, 359.9, epsilon = 1e-9);
    }

    #[test]
    fn toggle_same_direction_turns_off() {
        let mut sched = ManualScheduler::new();
        let mut spin = SpinAnimator::new();
        assert_eq!(spin.toggle(SpinDirection::Left, &mut sched), SpinDirection::Left);
        assert_eq!(spin.toggle(SpinDirection::Right, &mut sched), SpinDirection::Right);
        assert_eq!(spin.toggle(SpinDirection::Right, &mut sched), SpinDirection::None);
        assert_eq!(sched.pending_count(), 0);
    }

    #[test]
    fn pause_and_resume_restore_direction() {
        let mut sched = ManualScheduler::new();
        let mut spin = SpinAnimator::new();
        spin.enable(SpinDirection::Right, &mut sched);
        spin.pause(&mut sched);
        assert!(!spin.is_active());
        assert_eq!(sched.pending_count(), 0);

        spin.resume(&mut sched);
        assert_eq!(spin.direction(), SpinDirection::Right);
        assert_eq!(sched.pending_count(), 1);
    }
}
