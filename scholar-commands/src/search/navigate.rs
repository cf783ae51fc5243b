use tracing::debug;

use crate::CommandMeta;
use crate::search::search::execute_search;
use scholar_core::Context;
use scholar_utils::pagination::{NavTarget, compute_window};

pub const META: CommandMeta = CommandMeta {
    name: "page",
    desc: "Jump to a result page, or move with next/prev/first/last.",
    category: "search",
    usage: "page <n> | next | prev | first | last",
};

/// Move the current search to another page.
///
/// Without an active search the window is computed for an empty result set,
/// so every target is out of range and nothing is fetched.
pub async fn run(ctx: Context, target: NavTarget) -> anyhow::Result<String> {
    let current = ctx.search.value().await;

    let (total, limit, offset) = match current.as_ref() {
        Some(outcome) => (
            outcome.response.total,
            outcome.response.limit,
            outcome.offset,
        ),
        None => (0, ctx.default_limit(), 0),
    };
    let window = compute_window(total, limit, offset)?;

    let mut requested_offset = None;
    let moved = window.navigate(target, |to| requested_offset = Some(to));

    let (Some(outcome), true, Some(new_offset)) = (current, moved, requested_offset) else {
        debug!(?target, total_pages = window.total_pages, "navigation ignored");
        return Ok(out_of_range_message(target, window.total_pages));
    };

    execute_search(&ctx, &outcome.query, new_offset).await
}

pub fn out_of_range_message(target: NavTarget, total_pages: usize) -> String {
    if total_pages == 0 {
        return "No active search results. Type `search <query>` first.".to_owned();
    }

    match target {
        NavTarget::Page(page) => format!(
            "Page {page} does not exist. Available pages: 1-{total_pages}."
        ),
        NavTarget::Next => "Already on the last page.".to_owned(),
        NavTarget::Prev => "Already on the first page.".to_owned(),
        NavTarget::First | NavTarget::Last => "That page is not available.".to_owned(),
    }
}
