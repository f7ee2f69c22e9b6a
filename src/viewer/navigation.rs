//! Page navigation over a fixed-length ordered sequence.
//!
//! Pure index arithmetic with wraparound. Knows nothing about timers;
//! callers decide whether a navigation also counts as an interaction.

/// Logical navigation command shared by user input and autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCommand {
    /// Move to the next page, wrapping from the last page to the first.
    Advance,
    /// Move to the previous page, wrapping from the first page to the last.
    Retreat,
}

/// Current page index over a sequence of `page_count` pages.
///
/// # Invariant
///
/// `current_index < page_count` whenever `page_count > 0`, and
/// `current_index == 0` when the sequence is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    current_index: usize,
    page_count: usize,
}

impl Navigator {
    /// Create a navigator positioned on the first page.
    pub fn new(page_count: usize) -> Self {
        Self {
            current_index: 0,
            page_count,
        }
    }

    /// Index of the page currently shown (0-based).
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of pages in the sequence.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// True when there is more than one page to move between.
    pub fn can_navigate(&self) -> bool {
        self.page_count > 1
    }

    /// Move forward one page with wraparound. No-op for 0 or 1 pages.
    pub fn advance(&mut self) {
        if !self.can_navigate() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.page_count;
    }

    /// Move back one page with wraparound. No-op for 0 or 1 pages.
    pub fn retreat(&mut self) {
        if !self.can_navigate() {
            return;
        }
        self.current_index = (self.current_index + self.page_count - 1) % self.page_count;
    }

    /// Apply a navigation command.
    pub fn apply(&mut self, command: NavCommand) {
        match command {
            NavCommand::Advance => self.advance(),
            NavCommand::Retreat => self.retreat(),
        }
    }

    /// Jump directly to `index`.
    ///
    /// Out-of-range requests are ignored and leave the index untouched.
    /// Returns `true` if the request was accepted.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.page_count {
            return false;
        }
        self.current_index = index;
        true
    }

    /// Replace the sequence length, clamping the current index into range.
    pub fn set_page_count(&mut self, page_count: usize) {
        self.page_count = page_count;
        self.current_index = clamp_index(self.current_index, page_count);
    }
}

/// Clamp `index` into `[0, page_count)`, or 0 for an empty sequence.
fn clamp_index(index: usize, page_count: usize) -> usize {
    match page_count {
        0 => 0,
        n => index.min(n - 1),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod tests;
