pub mod classify;
pub mod search;
pub mod utility;

use scholar_core::Context;
use scholar_utils::parse::{parse_nav_target, split_command};

/// What the console should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Print this text.
    Reply(String),
    /// Leave the console loop.
    Quit,
    /// Blank line; nothing to print.
    Empty,
}

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const QUIT_META: CommandMeta = CommandMeta {
    name: "quit",
    desc: "Leave the console.",
    category: "utility",
    usage: "quit",
};

pub const COMMANDS: &[CommandMeta] = &[
    search::search::META,
    search::navigate::META,
    search::history::META,
    search::show::META,
    classify::classify::META,
    utility::reset::META,
    utility::help::META,
    utility::usage::META,
    QUIT_META,
    // Add new commands here
];

/// Dispatch one console line.
///
/// A line whose first word is not a known command is searched as-is.
pub async fn handle_line(ctx: Context, line: &str) -> anyhow::Result<LineOutcome> {
    let Some((cmd, rest)) = split_command(line) else {
        return Ok(LineOutcome::Empty);
    };

    if let Some(target) = parse_nav_target(&cmd, rest) {
        return search::navigate::run(ctx, target).await.map(LineOutcome::Reply);
    }

    let reply = match cmd.as_str() {
        "quit" | "exit" => return Ok(LineOutcome::Quit),
        "search" => search::search::run(ctx, rest).await?,
        "page" | "goto" => format!("Usage: `{}`", search::navigate::META.usage),
        "history" => search::history::run(ctx, rest).await?,
        "show" => search::show::run(ctx).await?,
        "classify" => classify::classify::run(ctx, rest).await?,
        "reset" => utility::reset::run(ctx, rest).await?,
        "help" => utility::help::run(rest).await?,
        "usage" => utility::usage::run(rest).await?,
        // Add new commands here
        _ => search::search::run(ctx, Some(line)).await?,
    };

    Ok(LineOutcome::Reply(reply))
}
