//! Panel and control composition helpers for paginated views.

use crate::panel::{Panel, build_paginated_panel};

use super::components::{NavItem, build_nav_items, render_nav_bar};
use super::page::PageWindow;

/// A rendered page of results together with its navigation controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedView {
    pub panel: Panel,
    pub controls: Vec<NavItem>,
}

impl PaginatedView {
    /// Render the panel followed by the navigation bar, if any.
    pub fn render(&self) -> String {
        let mut out = self.panel.render();
        if !self.controls.is_empty() {
            out.push('\n');
            out.push_str(&render_nav_bar(&self.controls));
        }
        out
    }
}

/// Build a paginated panel + navigation controls from a pre-rendered body.
pub fn build_paginated_view(
    title: &str,
    body: String,
    window: &PageWindow,
    total_items: usize,
) -> PaginatedView {
    let panel = build_paginated_panel(title, body, window.current_page, window.total_pages);

    PaginatedView {
        panel,
        controls: build_nav_items(window, total_items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::compute_window;

    #[test]
    fn view_renders_nav_bar_under_the_panel() {
        let window = compute_window(95, 20, 20).expect("window");
        let view = build_paginated_view("Results", "cards".to_owned(), &window, 95);
        let text = view.render();
        assert!(text.ends_with("[Previous] [1] (2) [3] [4] [5] [Next]"));
        assert!(text.contains("Page 2/5"));
    }

    #[test]
    fn single_page_view_has_no_nav_bar() {
        let window = compute_window(3, 20, 0).expect("window");
        let view = build_paginated_view("Results", "cards".to_owned(), &window, 3);
        assert!(view.controls.is_empty());
        assert!(!view.render().contains('['));
    }
}
