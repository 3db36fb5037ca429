//! Debounced, deduplicated search input.
//!
//! Pure state machine driven by an explicit clock: callers feed
//! keystrokes with [`DebouncedSearch::input`] and poll with
//! [`DebouncedSearch::poll`], so the 300 ms quiet window is testable
//! without real timers.

use std::time::{Duration, Instant};

/// Quiet window after the last keystroke before a query fires.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct Pending {
    term: String,
    deadline: Instant,
    generation: u64,
}

/// Collapses rapid keystrokes into one term per quiet window and
/// suppresses consecutive duplicates.
#[derive(Debug, Default)]
pub struct DebouncedSearch {
    pending: Option<Pending>,
    last_emitted: Option<String>,
    /// Bumped by [`clear`](Self::clear); a pending entry from an older
    /// generation never fires, even if its deadline has passed.
    generation: u64,
}

impl DebouncedSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keystroke. Resets the quiet-window timer; a term equal
    /// to the last emitted one cancels any pending emission instead of
    /// scheduling a duplicate query.
    pub fn input(&mut self, term: &str, now: Instant) {
        if self.last_emitted.as_deref() == Some(term) {
            self.pending = None;
            return;
        }
        self.pending = Some(Pending {
            term: term.to_string(),
            deadline: now + DEBOUNCE_WINDOW,
            generation: self.generation,
        });
    }

    /// Emit the pending term if its quiet window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let pending = self.pending.as_ref()?;
        if pending.generation != self.generation || now < pending.deadline {
            return None;
        }
        let pending = self.pending.take()?;
        self.last_emitted = Some(pending.term.clone());
        Some(pending.term)
    }

    /// Cancel any pending term and forget emission history. Used when
    /// filters are cleared so a stale timer cannot re-apply an old term.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.last_emitted = None;
    }

    /// Whether a term is waiting for its quiet window.
    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| p.generation == self.generation)
    }
}
