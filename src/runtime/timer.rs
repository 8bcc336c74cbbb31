use crate::foundation::core::Millis;

/// Fixed-period timer polled with injected time.
///
/// Missed periods are not replayed: a poll that finds the timer several periods late fires once
/// and schedules the next period after `now`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntervalTimer {
    interval_ms: f64,
    next_due: Option<Millis>,
}

impl IntervalTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            next_due: None,
        }
    }

    /// Arm the timer; the first firing is one period after `now`. Restarts an armed timer.
    pub fn start(&mut self, now: Millis) {
        self.next_due = Some(now.offset(self.interval_ms));
    }

    /// Disarm. Stopping a stopped timer is a no-op.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<Millis> {
        self.next_due
    }

    /// Whether the timer fires at `now`.
    pub fn poll(&mut self, now: Millis) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        let missed = (now.since(due) / self.interval_ms).floor();
        self.next_due = Some(due.offset((missed + 1.0) * self.interval_ms));
        true
    }
}

/// Per-frame callback gate with a frame counter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameDriver {
    running: bool,
    frames: u64,
    last_frame: Option<Millis>,
}

impl FrameDriver {
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stopping a stopped driver is a no-op.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_frame(&self) -> Option<Millis> {
        self.last_frame
    }

    /// Record a frame at `now`; returns false while stopped.
    pub fn frame(&mut self, now: Millis) -> bool {
        if !self.running {
            return false;
        }
        self.frames = self.frames.wrapping_add(1);
        self.last_frame = Some(now);
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/timer.rs"]
mod tests;
