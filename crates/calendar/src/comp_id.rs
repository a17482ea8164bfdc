//! Component id allocation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

/// Identifier for a calendar component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompId(u64);

impl CompId {
    /// Returns the raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CompId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues strictly increasing [`CompId`]s, starting at 0.
///
/// The read-increment is a single atomic step, so a shared `&CompIdCounter`
/// never hands out the same id twice.
#[derive(Debug, Default)]
pub struct CompIdCounter {
    next: AtomicU64,
}

impl CompIdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current counter value and advances it by one.
    pub fn next_id(&self) -> CompId {
        let id = self.next.fetch_add(1, Ordering::Relaxed);
        trace!(id, "issued component id");
        CompId(id)
    }

    /// Returns the id the next call to [`next_id`](Self::next_id) would issue.
    pub fn peek(&self) -> CompId {
        CompId(self.next.load(Ordering::Relaxed))
    }
}
