//! Virtual-time timer host.
//!
//! Everything time-driven in the simulation runs against one monotonic
//! virtual clock that only moves when its owner says so. The window feeds it
//! wall-clock frame deltas; tests feed it exact values and never sleep.
//!
//! Timers are handed out as [`Timer`] guards. Dropping the guard releases
//! the timer, so a view that owns its guards cannot leave a live timer
//! behind when it is torn down.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Repeating timers never fire more often than this.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Stable identity of a timer inside its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct Entry<T> {
    id: TimerId,
    deadline: Duration,
    period: Option<Duration>,
    tag: T,
    live: Rc<Cell<bool>>,
}

#[derive(Debug)]
struct Queue<T> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

// ────────────────────────────────────────────────────────────────
// TimerHost
// ────────────────────────────────────────────────────────────────

/// Single-threaded timer queue plus the virtual clock it runs on.
///
/// Cloning a host yields another handle to the same queue.
#[derive(Debug)]
pub struct TimerHost<T> {
    inner: Rc<RefCell<Queue<T>>>,
}

impl<T> Clone for TimerHost<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for TimerHost<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerHost<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Queue {
                now: Duration::ZERO,
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Virtual time elapsed since the host was created.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Fire `tag` once, `delay` from now.
    pub fn once(&self, delay: Duration, tag: T) -> Timer {
        self.schedule(delay, None, tag)
    }

    /// Fire `tag` every `period`, first at `now + period`.
    pub fn every(&self, period: Duration, tag: T) -> Timer {
        let period = period.max(MIN_PERIOD);
        self.schedule(period, Some(period), tag)
    }

    fn schedule(&self, delay: Duration, period: Option<Duration>, tag: T) -> Timer {
        let mut q = self.inner.borrow_mut();
        let id = TimerId(q.next_id);
        q.next_id += 1;

        let live = Rc::new(Cell::new(true));
        let deadline = q.now + delay;
        q.entries.push(Entry {
            id,
            deadline,
            period,
            tag,
            live: Rc::clone(&live),
        });

        tracing::trace!(timer = id.0, ?deadline, ?period, "timer acquired");
        Timer { id, live }
    }

    /// Number of timers that are still armed.
    pub fn pending(&self) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|e| e.live.get())
            .count()
    }

    /// Deadline of the earliest armed timer, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|e| e.live.get())
            .map(|e| e.deadline)
            .min()
    }

    /// Move the clock forward to `until` (never backwards).
    pub fn settle(&self, until: Duration) {
        let mut q = self.inner.borrow_mut();
        if until > q.now {
            q.now = until;
        }
    }
}

impl<T: Clone> TimerHost<T> {
    /// Pop the earliest armed timer due at or before `until`.
    ///
    /// The clock moves to that timer's deadline. Timers sharing a deadline
    /// fire in acquisition order. Repeating timers are re-armed one period
    /// later; one-shots are retired. The queue is not borrowed when this
    /// returns, so the caller may acquire or release timers while handling
    /// the tag.
    pub fn pop_due(&self, until: Duration) -> Option<T> {
        let mut guard = self.inner.borrow_mut();
        let q = &mut *guard;

        q.entries.retain(|e| e.live.get());

        let idx = q
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= until)
            .min_by_key(|(_, e)| (e.deadline, e.id))
            .map(|(i, _)| i)?;

        let deadline = q.entries[idx].deadline;
        if deadline > q.now {
            q.now = deadline;
        }

        match q.entries[idx].period {
            Some(period) => {
                let entry = &mut q.entries[idx];
                entry.deadline += period;
                Some(entry.tag.clone())
            }
            None => {
                let entry = q.entries.swap_remove(idx);
                entry.live.set(false);
                Some(entry.tag)
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────
// Timer guard
// ────────────────────────────────────────────────────────────────

/// Ownership of one armed timer. Dropping it disarms the timer.
#[derive(Debug)]
#[must_use = "dropping a Timer disarms it immediately"]
pub struct Timer {
    id: TimerId,
    live: Rc<Cell<bool>>,
}

impl Timer {
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// False once the timer was cancelled or, for a one-shot, has fired.
    pub fn is_armed(&self) -> bool {
        self.live.get()
    }

    pub fn cancel(self) {}
}

impl Drop for Timer {
    fn drop(&mut self) {
        if self.live.replace(false) {
            tracing::trace!(timer = self.id.0, "timer released");
        }
    }
}
