//! Pagination control builders (previous/next, page numbers, ellipses).

use super::nav::NavTarget;
use super::page::PageWindow;

/// One element of a rendered navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Button {
        label: String,
        target: NavTarget,
        active: bool,
    },
    Ellipsis,
}

impl NavItem {
    fn button(label: impl Into<String>, target: NavTarget) -> Self {
        NavItem::Button {
            label: label.into(),
            target,
            active: false,
        }
    }
}

/// Build the navigation controls for a paginated result set.
///
/// Returns no controls when everything fits on one page.
pub fn build_nav_items(window: &PageWindow, total_items: usize) -> Vec<NavItem> {
    if total_items <= window.limit() {
        return vec![];
    }

    let Some((first_visible, last_visible)) = window.visible_bounds() else {
        return vec![];
    };

    let mut items = Vec::with_capacity(window.visible_pages.len() + 6);

    if window.has_prev_page {
        items.push(NavItem::button("Previous", NavTarget::Prev));
    }

    if first_visible > 1 {
        items.push(NavItem::button("1", NavTarget::First));
        if first_visible > 2 {
            items.push(NavItem::Ellipsis);
        }
    }

    items.extend(window.visible_pages.iter().map(|&page| NavItem::Button {
        label: page.to_string(),
        target: NavTarget::Page(page),
        active: page == window.current_page,
    }));

    if last_visible < window.total_pages {
        if last_visible < window.total_pages - 1 {
            items.push(NavItem::Ellipsis);
        }
        items.push(NavItem::button(
            window.total_pages.to_string(),
            NavTarget::Last,
        ));
    }

    if window.has_next_page {
        items.push(NavItem::button("Next", NavTarget::Next));
    }

    items
}

/// Render navigation controls as a single console line.
pub fn render_nav_bar(items: &[NavItem]) -> String {
    items
        .iter()
        .map(|item| match item {
            NavItem::Button {
                label,
                active: true,
                ..
            } => format!("({label})"),
            NavItem::Button { label, .. } => format!("[{label}]"),
            NavItem::Ellipsis => "...".to_owned(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
