//! FIFO of pending fights shared by the scanner and the worker.
//!
//! A single mutex guards both ends; push and pop are O(1) and never block
//! for longer than the other side's push/pop.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::FightEvent;

#[derive(Default)]
pub struct FightQueue {
    events: Mutex<VecDeque<FightEvent>>,
}

impl FightQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<FightEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append `event` at the tail.
    pub fn push(&self, event: FightEvent) {
        self.lock().push_back(event);
    }

    /// Append many events at the tail, in order, under one lock acquisition.
    pub fn extend<I: IntoIterator<Item = FightEvent>>(&self, events: I) {
        self.lock().extend(events);
    }

    /// Remove the event at the head.  Never blocks waiting for work.
    pub fn pop(&self) -> Option<FightEvent> {
        self.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discard every queued event, returning how many were dropped.
    pub fn clear(&self) -> usize {
        let mut events = self.lock();
        let n = events.len();
        events.clear();
        n
    }
}
