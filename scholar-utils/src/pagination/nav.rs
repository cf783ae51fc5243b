//! Translating page intents into result offsets.

use super::page::{PageWindow, offset_for_page};

/// A page the user asked to move to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    First,
    Prev,
    Page(usize),
    Next,
    Last,
}

impl PageWindow {
    /// Offset of `page`, or `None` when it falls outside `[1, total_pages]`.
    pub fn go_to_page(&self, page: usize) -> Option<usize> {
        self.contains_page(page)
            .then(|| offset_for_page(page, self.limit()))
    }

    pub fn go_to_next(&self) -> Option<usize> {
        if !self.has_next_page {
            return None;
        }
        self.go_to_page(self.current_page + 1)
    }

    pub fn go_to_prev(&self) -> Option<usize> {
        if !self.has_prev_page {
            return None;
        }
        self.go_to_page(self.current_page - 1)
    }

    pub fn go_to_first(&self) -> Option<usize> {
        self.go_to_page(1)
    }

    pub fn go_to_last(&self) -> Option<usize> {
        self.go_to_page(self.total_pages)
    }

    /// Resolve a navigation intent into an offset.
    pub fn resolve(&self, target: NavTarget) -> Option<usize> {
        match target {
            NavTarget::First => self.go_to_first(),
            NavTarget::Prev => self.go_to_prev(),
            NavTarget::Page(page) => self.go_to_page(page),
            NavTarget::Next => self.go_to_next(),
            NavTarget::Last => self.go_to_last(),
        }
    }

    /// Invoke `on_page_change` with the target offset when it resolves.
    ///
    /// Returns whether the callback fired. Out-of-range targets are ignored.
    pub fn navigate(&self, target: NavTarget, on_page_change: impl FnOnce(usize)) -> bool {
        match self.resolve(target) {
            Some(offset) => {
                on_page_change(offset);
                true
            }
            None => false,
        }
    }
}
