//! Deferred callbacks on a virtual clock.
//!
//! The clock only moves when the host calls [`Document::advance`], which
//! makes timing deterministic under test. A real-time host advances it by the
//! wall-clock time elapsed between ticks.
//!
//! [`Document::advance`]: crate::Document::advance

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::Document;

/// Handle to a pending deferred callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

pub type TimerCallback = Box<dyn FnOnce(&mut Document) + Send>;

/// Pending timers ordered by (deadline, sequence).
///
/// The sequence number keeps timers with equal deadlines in scheduling order.
#[derive(Default)]
pub(crate) struct Timers {
    now: Duration,
    seq: u64,
    queue: BTreeMap<(Duration, u64), (TimerId, TimerCallback)>,
    index: BTreeMap<TimerId, (Duration, u64)>,
}

impl Timers {
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Deadlines past the end of the clock are clamped to `Duration::MAX`.
    pub fn schedule(&mut self, delay: Duration, callback: TimerCallback) -> TimerId {
        let id = TimerId::new();
        let key = (self.now.saturating_add(delay), self.seq);
        self.seq += 1;
        self.queue.insert(key, (id, callback));
        self.index.insert(id, key);
        id
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.index.remove(&id) {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.index.contains_key(&id)
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, TimerCallback)> {
        let (&key, _) = self.queue.first_key_value()?;
        if key.0 > until {
            return None;
        }
        let (id, callback) = self.queue.remove(&key)?;
        self.index.remove(&id);
        self.now = key.0;
        Some((id, callback))
    }

    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl std::fmt::Debug for Timers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timers")
            .field("now", &self.now)
            .field("pending", &self.queue.len())
            .finish()
    }
}
