// src/domain/reveal.rs

/// Number of cards added per reveal.
pub const BATCH_SIZE: usize = 8;

/// How many of the filtered results are currently rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    visible: usize,
}

impl Reveal {
    pub fn first_batch() -> Self {
        Self {
            visible: BATCH_SIZE,
        }
    }

    /// Rebuilds a reveal from a count echoed back by the browser.
    /// Counts are rounded up to whole batches and never below one batch.
    pub fn from_requested(count: usize) -> Self {
        let batches = count.div_ceil(BATCH_SIZE).max(1);
        Self {
            visible: batches.saturating_mul(BATCH_SIZE),
        }
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.visible < total
    }

    /// Adds one batch, capped at `total`. Does nothing once everything is shown.
    pub fn reveal_more(&mut self, total: usize) {
        if self.has_more(total) {
            self.visible = (self.visible + BATCH_SIZE).min(total);
        }
    }

    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible.min(items.len())]
    }
}

impl Default for Reveal {
    fn default() -> Self {
        Self::first_batch()
    }
}

/// The list view's state: the search term plus how far the results are revealed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    term: String,
    reveal: Reveal,
}

impl SearchState {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            reveal: Reveal::first_batch(),
        }
    }

    pub fn restore(term: impl Into<String>, reveal: Reveal) -> Self {
        Self {
            term: term.into(),
            reveal,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn reveal(&self) -> Reveal {
        self.reveal
    }

    /// Replaces the term. A different term starts over at the first batch.
    pub fn set_term(&mut self, term: &str) {
        if self.term != term {
            self.term = term.to_string();
            self.reveal = Reveal::first_batch();
        }
    }

    pub fn reveal_more(&mut self, total: usize) {
        self.reveal.reveal_more(total);
    }
}
