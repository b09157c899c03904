//! Timer queue for delayed continuations.
//!
//! The simulation never sleeps. Anything that must happen "N seconds later"
//! is pushed here with its due time and drained once per tick. Entries with
//! equal due times come out in insertion order so replays stay
//! deterministic.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<A> {
    due: f32,
    seq: u64,
    action: A,
}

impl<A> PartialEq for Entry<A> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<A> Eq for Entry<A> {}

impl<A> PartialOrd for Entry<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for Entry<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .total_cmp(&other.due)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-queue of actions keyed by due time in seconds.
#[derive(Debug)]
pub struct TimerQueue<A> {
    heap: BinaryHeap<Reverse<Entry<A>>>,
    next_seq: u64,
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<A> TimerQueue<A> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `action` to run once the clock reaches `due`.
    pub fn schedule(&mut self, due: f32, action: A) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { due, seq, action }));
    }

    /// Removes and returns the earliest action due at or before `now`,
    /// together with the time it was due.
    ///
    /// Continuations that chain further delays should schedule from the
    /// returned due time so the chain does not drift with the tick length.
    ///
    /// # Examples
    ///
    /// ```
    /// use egg_arena::scheduler::TimerQueue;
    /// let mut queue = TimerQueue::new();
    /// queue.schedule(0.5, "late");
    /// queue.schedule(0.1, "early");
    /// assert_eq!(queue.pop_due(0.2), Some((0.1, "early")));
    /// assert_eq!(queue.pop_due(0.2), None);
    /// assert_eq!(queue.pop_due(0.7), Some((0.5, "late")));
    /// ```
    pub fn pop_due(&mut self, now: f32) -> Option<(f32, A)> {
        let due = self.heap.peek().is_some_and(|Reverse(e)| e.due <= now);
        if !due {
            return None;
        }
        self.heap.pop().map(|Reverse(e)| (e.due, e.action))
    }

    /// Due time of the earliest pending action.
    #[must_use]
    pub fn next_due(&self) -> Option<f32> {
        self.heap.peek().map(|Reverse(e)| e.due)
    }

    /// Number of pending actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
