// One-shot timer queue
// Timers carry a payload instead of a callback: the owner pops due payloads
// and applies them to its own state, which keeps borrows simple and lets a
// torn-down owner drop everything with clear().

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to a scheduled timer. Ordered by due time, then by scheduling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId {
    due: Duration,
    seq: u64,
}

impl TimerId {
    pub fn due(&self) -> Duration {
        self.due
    }
}

pub struct TimerQueue<E> {
    pending: BTreeMap<TimerId, E>,
    next_seq: u64,
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            pending: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `event` to fire once the clock reaches `due`.
    pub fn schedule(&mut self, due: Duration, event: E) -> TimerId {
        let id = TimerId { due, seq: self.next_seq };
        self.next_seq += 1;
        self.pending.insert(id, event);
        id
    }

    /// Cancel a pending timer. Returns the payload if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<E> {
        self.pending.remove(&id)
    }

    /// Pop the earliest timer whose due time is `<= now`.
    /// Callers loop on this so timers scheduled while firing are seen too.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, E)> {
        let first = *self.pending.keys().next()?;
        if first.due > now {
            return None;
        }
        self.pending.remove(&first).map(|event| (first.due, event))
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.keys().next().map(|id| id.due)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_fires_in_due_order_then_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(ms(30), "late");
        q.schedule(ms(10), "first");
        q.schedule(ms(10), "second");

        assert_eq!(q.pop_due(ms(100)), Some((ms(10), "first")));
        assert_eq!(q.pop_due(ms(100)), Some((ms(10), "second")));
        assert_eq!(q.pop_due(ms(100)), Some((ms(30), "late")));
        assert_eq!(q.pop_due(ms(100)), None);
    }

    #[test]
    fn test_nothing_fires_early() {
        let mut q = TimerQueue::new();
        q.schedule(ms(500), ());
        assert!(q.pop_due(ms(499)).is_none());
        assert_eq!(q.next_deadline(), Some(ms(500)));
        assert!(q.pop_due(ms(500)).is_some());
    }

    #[test]
    fn test_cancel_and_clear() {
        let mut q = TimerQueue::new();
        let a = q.schedule(ms(5), 'a');
        q.schedule(ms(6), 'b');
        assert_eq!(q.cancel(a), Some('a'));
        assert_eq!(q.cancel(a), None);
        assert_eq!(q.len(), 1);
        q.clear();
        assert!(q.is_empty());
        assert!(q.pop_due(ms(1_000)).is_none());
    }
}
