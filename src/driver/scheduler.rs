use std::time::Instant;

/// Identifies a scheduled frame; used to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// One-shot timers polled from the UI thread.
#[derive(Default)]
pub struct Scheduler {
    next_id: u64,
    pending: Vec<(FrameHandle, Instant)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: Instant) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.pending.push((handle, at));
        handle
    }

    /// Returns `false` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        let len = self.pending.len();
        self.pending.retain(|(h, _)| *h != handle);
        self.pending.len() != len
    }

    /// Removes and returns the earliest timer due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<FrameHandle> {
        let (i, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (_, at))| *at <= now)
            .min_by_key(|(_, (_, at))| *at)?;
        Some(self.pending.remove(i).0)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(_, at)| *at).min()
    }

    #[cfg(test)]
    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.iter().any(|(h, _)| *h == handle)
    }
}
