use std::collections::BTreeMap;

use tracing::trace;

/// Identifies a scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl std::fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// A queue of one-shot deferred actions on simulated time.
///
/// Timers fire in due-time order; timers due at the same instant fire in the
/// order they were scheduled. While a timer is being fired the queue's notion
/// of "now" is that timer's due time, so a follow-up timer scheduled from the
/// firing action is relative to when its parent was due, not to the end of the
/// current advance. One large advance therefore runs a whole chain.
#[derive(Debug, Clone)]
pub struct Timers<A> {
    now_ms: u64,
    next_id: u64,
    queue: BTreeMap<(u64, u64), A>,
}

impl<A> Default for Timers<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Timers<A> {
    /// Create an empty queue at time zero.
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            queue: BTreeMap::new(),
        }
    }

    /// The queue's current time.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule `action` to fire `delay_ms` after the queue's current time.
    pub fn schedule(&mut self, delay_ms: u64, action: A) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        let due = self.now_ms.saturating_add(delay_ms);
        self.queue.insert((due, id), action);
        TimerHandle(id)
    }

    /// Cancel a pending timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let key = self.queue.keys().find(|(_, id)| *id == handle.0).copied();
        match key {
            Some(key) => {
                trace!(%handle, due_ms = key.0, "timer cancelled");
                self.queue.remove(&key).is_some()
            }
            None => false,
        }
    }

    /// Whether the timer is still waiting to fire.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.queue.keys().any(|(_, id)| *id == handle.0)
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Remove and return the earliest timer due at or before `until_ms`.
    ///
    /// Moves the queue's time to the popped timer's due time.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(TimerHandle, A)> {
        let (due, id) = *self.queue.keys().next()?;
        if due > until_ms {
            return None;
        }
        let action = self.queue.remove(&(due, id))?;
        self.now_ms = self.now_ms.max(due);
        Some((TimerHandle(id), action))
    }

    /// Move the queue's time forward to `until_ms` without firing anything.
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no timers are pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
