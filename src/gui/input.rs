use std::time::{Duration, Instant};

/// Keeps only the last click of a burst and releases it once no other
/// click arrived for `delay`.
pub struct ClickDebouncer {
    delay: Duration,
    pending: Option<((f32, f32), Instant)>,
}

impl ClickDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn push(&mut self, pos: (f32, f32), now: Instant) {
        self.pending = Some((pos, now));
    }

    /// The settled click, if the quiet period has passed.
    pub fn poll(&mut self, now: Instant) -> Option<(f32, f32)> {
        let (pos, at) = self.pending?;
        if now.saturating_duration_since(at) < self.delay {
            return None;
        }
        self.pending = None;
        Some(pos)
    }

    /// When the pending click settles.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|(_, at)| at + self.delay)
    }
}
