use std::time::Instant;

use winit::event_loop::ControlFlow;

/// When the editor window needs its next frame.
///
/// Nothing animates on its own except timed overlays, so the loop sleeps
/// until either input arrives or the earliest requested deadline passes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RedrawSchedule {
    deadline: Option<Instant>,
}

impl RedrawSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the earlier of `at` and any pending deadline.
    pub fn request_at(&mut self, at: Instant) {
        self.deadline = Some(match self.deadline {
            Some(d) => d.min(at),
            None => at,
        });
    }

    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consumes the deadline if it has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if d <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.deadline = None;
    }

    pub fn control_flow(&self) -> ControlFlow {
        match self.deadline {
            Some(d) => ControlFlow::WaitUntil(d),
            None => ControlFlow::Wait,
        }
    }
}
