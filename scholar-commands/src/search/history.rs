use tracing::warn;

use crate::CommandMeta;
use crate::search::search::execute_search;
use scholar_core::Context;
use scholar_utils::panel::Panel;
use scholar_utils::parse::parse_one_based_page;

pub const META: CommandMeta = CommandMeta {
    name: "history",
    desc: "List recent searches, re-run one, or clear them.",
    category: "search",
    usage: "history [n|clear]",
};

/// Show, replay, or clear the recent-search list.
///
/// Inputs:
/// - no argument lists entries, most recent first.
/// - `history <n>` re-runs entry `n` and moves it to the front.
/// - `history clear` empties the list.
pub async fn run(ctx: Context, arg1: Option<&str>) -> anyhow::Result<String> {
    match arg1.map(str::trim) {
        None => list(&ctx).await,
        Some(raw) if raw.eq_ignore_ascii_case("clear") => {
            ctx.history.clear().await?;
            Ok("Search history cleared.".to_owned())
        }
        Some(raw) => {
            let Some(position) = parse_one_based_page(Some(raw)) else {
                return Ok(format!("Usage: `{}`", META.usage));
            };
            let Some(query) = ctx.history.get(position - 1).await else {
                return Ok(format!("No history entry #{position}."));
            };

            if let Err(e) = ctx.history.record(&query).await {
                warn!(error = %e, "failed to persist search history");
            }
            execute_search(&ctx, &query, 0).await
        }
    }
}

async fn list(ctx: &Context) -> anyhow::Result<String> {
    let entries = ctx.history.entries().await;
    if entries.is_empty() {
        return Ok("No recent searches.".to_owned());
    }

    let body = entries
        .iter()
        .enumerate()
        .map(|(i, query)| format!("{:>2}. {query}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(Panel {
        title: "Recent searches".to_owned(),
        body,
        footer: Some("`history <n>` to search again, `history clear` to forget.".to_owned()),
    }
    .render())
}
