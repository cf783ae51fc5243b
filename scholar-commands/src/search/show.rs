use crate::CommandMeta;
use crate::search::render::render_search_state;
use scholar_core::Context;

pub const META: CommandMeta = CommandMeta {
    name: "show",
    desc: "Show the current results and any error again.",
    category: "search",
    usage: "show",
};

pub async fn run(ctx: Context) -> anyhow::Result<String> {
    let state = ctx.search.snapshot().await;
    let mut out = render_search_state(&state)?;
    if state.in_flight {
        out.push_str("\n\nSearching publications...");
    }
    Ok(out)
}
