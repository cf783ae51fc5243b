use crate::CommandMeta;
use scholar_core::Context;

pub const META: CommandMeta = CommandMeta {
    name: "reset",
    desc: "Clear search results, the classification result, or both.",
    category: "utility",
    usage: "reset [search|classify]",
};

pub async fn run(ctx: Context, arg1: Option<&str>) -> anyhow::Result<String> {
    let scope = arg1.map(|raw| raw.trim().to_ascii_lowercase());

    match scope.as_deref() {
        None => {
            ctx.search.reset().await;
            ctx.classification.reset().await;
            Ok("Search and classification cleared.".to_owned())
        }
        Some("search") => {
            ctx.search.reset().await;
            Ok("Search cleared.".to_owned())
        }
        Some("classify" | "classification") => {
            ctx.classification.reset().await;
            Ok("Classification cleared.".to_owned())
        }
        Some(_) => Ok(format!("Usage: `{}`", META.usage)),
    }
}
