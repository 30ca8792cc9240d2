//! Timer manager - deadline queue over a virtual millisecond clock
//!
//! The manager never sleeps. Callers move time forward with [`TimerManager::pop_due`]
//! and [`TimerManager::advance_to`]; a real-time driver maps wall time onto the
//! same calls. Every timer carries an opaque payload that is handed back when
//! it comes due.
//!
//! Ordering: earliest deadline first, ties in scheduling order. Popping a timer
//! moves the clock to its deadline, so anything scheduled while handling it is
//! measured from the moment it fired.

use std::collections::{BTreeMap, HashMap};

/// Identifies one scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// A timer that came due
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    pub handle: TimerHandle,
    pub due_ms: u64,
    pub payload: T,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    handle: TimerHandle,
    interval_ms: Option<u64>,
    payload: T,
}

/// Queue key: `(deadline, scheduling sequence)`
type Key = (u64, u64);

#[derive(Debug, Clone)]
pub struct TimerManager<T> {
    now_ms: u64,
    next_seq: u64,
    queue: BTreeMap<Key, Slot<T>>,
    keys: HashMap<TimerHandle, Key>,
}

impl<T: Clone> TimerManager<T> {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(now_ms: u64) -> Self {
        Self {
            now_ms,
            next_seq: 0,
            queue: BTreeMap::new(),
            keys: HashMap::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// One-shot timer firing `delay_ms` from now
    pub fn schedule(&mut self, delay_ms: u64, payload: T) -> TimerHandle {
        self.insert(self.now_ms.saturating_add(delay_ms), None, payload)
    }

    /// Periodic timer, first firing one interval from now
    ///
    /// Intervals shorter than 1ms are treated as 1ms.
    pub fn schedule_repeating(&mut self, interval_ms: u64, payload: T) -> TimerHandle {
        let interval_ms = interval_ms.max(1);
        self.insert(
            self.now_ms.saturating_add(interval_ms),
            Some(interval_ms),
            payload,
        )
    }

    /// Returns `false` if the timer already fired or was cancelled
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.keys.remove(&handle) {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    /// Cancel every timer whose payload matches; returns how many were removed
    pub fn cancel_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.queue.len();
        let keys = &mut self.keys;
        self.queue.retain(|_, slot| {
            if predicate(&slot.payload) {
                keys.remove(&slot.handle);
                false
            } else {
                true
            }
        });
        before - self.queue.len()
    }

    pub fn cancel_all(&mut self) {
        self.queue.clear();
        self.keys.clear();
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.keys().next().map(|&(due, _)| due)
    }

    /// Pop the earliest timer due at or before `until_ms`
    ///
    /// The clock moves to the timer's deadline. A repeating timer is re-armed
    /// at `due + interval` before it is returned, so it can be cancelled while
    /// its payload is being handled.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Fired<T>> {
        let (&key, _) = self.queue.iter().next()?;
        let (due_ms, _) = key;
        if due_ms > until_ms {
            return None;
        }

        let slot = self.queue.remove(&key)?;
        self.keys.remove(&slot.handle);
        self.now_ms = self.now_ms.max(due_ms);

        if let Some(interval_ms) = slot.interval_ms {
            let key = (due_ms.saturating_add(interval_ms), self.bump_seq());
            self.keys.insert(slot.handle, key);
            self.queue.insert(
                key,
                Slot {
                    handle: slot.handle,
                    interval_ms: slot.interval_ms,
                    payload: slot.payload.clone(),
                },
            );
        }

        Some(Fired {
            handle: slot.handle,
            due_ms,
            payload: slot.payload,
        })
    }

    /// Move the clock forward without firing anything
    ///
    /// Callers drain [`Self::pop_due`] first; the clock never moves backwards.
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    /// Drain every timer due by `until_ms` into a vector, then advance
    pub fn drain_due(&mut self, until_ms: u64) -> Vec<Fired<T>> {
        let mut fired = Vec::new();
        while let Some(timer) = self.pop_due(until_ms) {
            fired.push(timer);
        }
        self.advance_to(until_ms);
        fired
    }

    fn insert(&mut self, due_ms: u64, interval_ms: Option<u64>, payload: T) -> TimerHandle {
        let seq = self.bump_seq();
        let handle = TimerHandle(seq);
        let key = (due_ms, seq);
        self.keys.insert(handle, key);
        self.queue.insert(
            key,
            Slot {
                handle,
                interval_ms,
                payload,
            },
        );
        handle
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

impl<T: Clone> Default for TimerManager<T> {
    fn default() -> Self {
        Self::new()
    }
}
