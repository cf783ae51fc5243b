use tracing::{info, warn};

use crate::CommandMeta;
use crate::search::render::render_search_state;
use scholar_core::{Context, SearchOutcome};

pub const META: CommandMeta = CommandMeta {
    name: "search",
    desc: "Search publications. Plain text without a command also searches.",
    category: "search",
    usage: "search <query>",
};

/// Submit a new search from the first page.
///
/// Inputs:
/// - required query: `search <query>`.
///
/// Error behavior:
/// - missing query returns this command's usage.
/// - service failures are shown above the previous results.
pub async fn run(ctx: Context, arg1: Option<&str>) -> anyhow::Result<String> {
    let Some(query) = arg1.map(str::trim).filter(|query| !query.is_empty()) else {
        return Ok(format!("Usage: `{}`", META.usage));
    };

    if let Err(e) = ctx.history.record(query).await {
        warn!(error = %e, "failed to persist search history");
    }

    execute_search(&ctx, query, 0).await
}

/// Fetch `query` at `offset` through the search slot and render the resulting state.
pub async fn execute_search(ctx: &Context, query: &str, offset: usize) -> anyhow::Result<String> {
    info!(query, offset, "searching publications");

    let ticket = ctx.search.begin().await;
    match ctx.api.search_publications(query, offset).await {
        Ok(response) => {
            let outcome = SearchOutcome {
                query: query.to_owned(),
                offset,
                response,
            };
            if !ctx.search.complete(ticket, outcome).await {
                return Ok("A newer search replaced this one.".to_owned());
            }
        }
        Err(e) => {
            warn!(query, offset, error = %e, "search failed");
            if !ctx.search.fail(ticket, e.to_string()).await {
                return Ok("A newer search replaced this one.".to_owned());
            }
        }
    }

    render_search_state(&ctx.search.snapshot().await)
}
