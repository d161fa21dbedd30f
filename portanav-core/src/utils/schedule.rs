//! Deferred task scheduler
//!
//! All "suspension" in the router takes the form of scheduled
//! continuations: a settle delay before panel activation, writes aligned
//! to the next render cycle, and the resize debounce. Nothing blocks and
//! nothing is awaited; the frontend pumps due tasks once per loop
//! iteration.

use std::time::{Duration, Instant};

/// Handle for cancelling a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskToken(u64);

struct Entry<T> {
    due: Instant,
    seq: u64,
    task: T,
}

/// Single-threaded timer queue, generic over the task payload.
///
/// Tasks scheduled while draining are only eligible on the next drain,
/// which is what gives "next render/paint cycle" its meaning here:
/// `schedule_next_frame` tasks run on the following pump, after the
/// frontend has produced a fresh layout.
pub struct Scheduler<T> {
    entries: Vec<Entry<T>>,
    next_seq: u64,
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 0,
        }
    }

    /// Schedule `task` to run once `delay` has elapsed from `now`.
    pub fn schedule_after(&mut self, now: Instant, delay: Duration, task: T) -> TaskToken {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            due: now + delay,
            seq,
            task,
        });
        TaskToken(seq)
    }

    /// Schedule `task` for the next pump cycle.
    pub fn schedule_next_frame(&mut self, now: Instant, task: T) -> TaskToken {
        self.schedule_after(now, Duration::ZERO, task)
    }

    /// Cancel a pending task. Returns `false` when the task already ran
    /// or was cancelled before.
    pub fn cancel(&mut self, token: TaskToken) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.seq != token.0);
        self.entries.len() != before
    }

    /// Remove and return every task due at `now`, ordered by due time and
    /// then by scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        let mut pending = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.due <= now {
                due.push(entry);
            } else {
                pending.push(entry);
            }
        }
        self.entries = pending;
        due.sort_by_key(|e| (e.due, e.seq));
        due.into_iter().map(|e| e.task).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
