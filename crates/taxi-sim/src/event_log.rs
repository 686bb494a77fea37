//! Bounded, timestamped event log.

use std::collections::VecDeque;
use std::fmt;

use taxi_core::format_time;

/// One notable occurrence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLogEntry {
    /// Position in the log's lifetime sequence, starting at 0.  Keeps
    /// increasing after old entries are evicted.
    pub seq:       u64,
    /// Game time (seconds) at which the entry was logged.
    pub timestamp: f64,
    pub message:   String,
}

impl fmt::Display for EventLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", format_time(self.timestamp), self.message)
    }
}

/// Append-only FIFO that keeps the newest `capacity` entries.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries:  VecDeque<EventLogEntry>,
    capacity: usize,
    next_seq: u64,
}

impl EventLog {
    /// A log holding at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            next_seq: 0,
        }
    }

    /// Append an entry, evicting the oldest once over capacity.
    pub fn push(&mut self, timestamp: f64, message: impl Into<String>) -> &EventLogEntry {
        self.entries.push_back(EventLogEntry {
            seq: self.next_seq,
            timestamp,
            message: message.into(),
        });
        self.next_seq += 1;
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        &self.entries[self.entries.len() - 1]
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &EventLogEntry> {
        self.entries.iter()
    }

    /// Retained entries with `seq >= from`, oldest first.
    pub fn since(&self, from: u64) -> impl Iterator<Item = &EventLogEntry> {
        self.entries.iter().filter(move |e| e.seq >= from)
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&EventLogEntry> {
        self.entries.back()
    }

    /// Sequence number the next entry will get.
    #[inline]
    pub fn next_seq(&self) -> u64 {
        self.next_seq
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry and restart numbering.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_seq = 0;
    }
}
