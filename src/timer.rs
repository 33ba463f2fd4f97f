//! Cancellable scheduled tasks.
//!
//! Pages never hold raw deadlines. Each scheduled task gets a `TimerHandle`,
//! and an owner keeps at most one live handle per purpose in a `TimerSlot`.
//! Re-arming a slot always cancels the previous task first, so two tasks of
//! the same purpose can never be pending at once.
//!
//! Time is passed in explicitly (`now: Instant`) so the runtime can drive
//! timers from the wall clock while tests drive them with synthetic instants.

use std::time::{Duration, Instant};

/// Identity of one scheduled task.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// A task that came due, as handed out by [`Timers::pop_due`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<K> {
    pub handle: TimerHandle,
    pub kind: K,
    /// The deadline the task was due at (not the time it was popped).
    pub due: Instant,
}

#[derive(Debug)]
struct Scheduled<K> {
    handle: TimerHandle,
    kind: K,
    due: Instant,
    period: Option<Duration>,
}

/// A set of pending one-shot and repeating tasks.
#[derive(Debug)]
pub struct Timers<K> {
    next_id: u64,
    pending: Vec<Scheduled<K>>,
}

impl<K> Default for Timers<K> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<K: Clone> Timers<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire once, `delay` after `now`.
    pub fn schedule_once(&mut self, kind: K, now: Instant, delay: Duration) -> TimerHandle {
        self.push(kind, now + delay, None)
    }

    /// Schedule `kind` to fire every `period`, first `period` after `now`.
    ///
    /// A zero period is bumped to one millisecond so `pop_due` always makes
    /// progress.
    pub fn schedule_repeating(&mut self, kind: K, now: Instant, period: Duration) -> TimerHandle {
        let period = period.max(Duration::from_millis(1));
        self.push(kind, now + period, Some(period))
    }

    fn push(&mut self, kind: K, due: Instant, period: Option<Duration>) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled {
            handle,
            kind,
            due,
            period,
        });
        handle
    }

    /// Cancel a task. Returns `false` if it already fired (one-shot) or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.handle != handle);
        self.pending.len() != before
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|t| t.handle == handle)
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|t| t.due).min()
    }

    /// Hand out the single earliest task whose deadline is `<= now`.
    ///
    /// Ties go to the task scheduled first. One-shot tasks are removed;
    /// repeating tasks are moved to `due + period`. Callers loop until this
    /// returns `None`, which lets a handler cancel other tasks before they
    /// are handed out.
    pub fn pop_due(&mut self, now: Instant) -> Option<Fired<K>> {
        let pos = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.handle.0))
            .map(|(i, _)| i)?;

        let task = &mut self.pending[pos];
        let fired = Fired {
            handle: task.handle,
            kind: task.kind.clone(),
            due: task.due,
        };
        match task.period {
            Some(period) => task.due += period,
            None => {
                self.pending.remove(pos);
            }
        }
        Some(fired)
    }
}

/// An owner's single slot for one purpose (e.g. "slideshow advance").
#[derive(Debug, Default)]
pub struct TimerSlot(Option<TimerHandle>);

impl TimerSlot {
    /// Store `handle`, cancelling whatever the slot held before.
    pub fn replace<K: Clone>(&mut self, timers: &mut Timers<K>, handle: TimerHandle) {
        self.clear(timers);
        self.0 = Some(handle);
    }

    /// Cancel the held task, if any.
    pub fn clear<K: Clone>(&mut self, timers: &mut Timers<K>) {
        if let Some(old) = self.0.take() {
            timers.cancel(old);
        }
    }

    /// True if `handle` is the task this slot currently owns.
    pub fn holds(&self, handle: TimerHandle) -> bool {
        self.0 == Some(handle)
    }

    /// Forget a one-shot task that has just fired.
    pub fn release(&mut self, handle: TimerHandle) {
        if self.holds(handle) {
            self.0 = None;
        }
    }

    pub fn is_armed(&self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests;
