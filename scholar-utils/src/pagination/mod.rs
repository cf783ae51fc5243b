//! Stable facade for pagination helpers used by command handlers.

mod components;
pub mod nav;
mod page;
mod view;

pub use components::{NavItem, build_nav_items, render_nav_bar};
pub use nav::NavTarget;
pub use page::{
    MAX_VISIBLE_PAGES, PageWindow, PaginationError, compute_window, item_range, total_pages,
};
pub use view::{PaginatedView, build_paginated_view};
