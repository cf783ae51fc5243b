use crate::{COMMANDS, CommandMeta};
use scholar_utils::panel::build_paginated_panel_with_footer_note;
use scholar_utils::pagination::{item_range, total_pages};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "help [page|category]",
};

const HELP_COMMANDS_PER_PAGE: usize = 8;

/// Render the command catalog, optionally filtered by category or page.
pub async fn run(arg1: Option<&str>) -> anyhow::Result<String> {
    let parsed_page = arg1.and_then(|raw| raw.parse::<usize>().ok().filter(|page| *page >= 1));
    let category = match (arg1, parsed_page) {
        (Some(raw), None) => Some(raw.to_ascii_lowercase()),
        _ => None,
    };

    let mut categories: Vec<&str> = COMMANDS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();

    if let Some(wanted_category) = category.as_deref()
        && !categories.contains(&wanted_category)
    {
        return Ok(format!(
            "Unknown category `{wanted_category}`. Available: {}.",
            categories.join(", ")
        ));
    }

    let commands = sorted_commands(category.as_deref());
    let requested_page = parsed_page.unwrap_or(1);
    let total = total_pages(commands.len(), HELP_COMMANDS_PER_PAGE);

    if requested_page > total {
        return Ok(format!(
            "Page {requested_page} does not exist. Available pages: 1-{total}."
        ));
    }

    let (start, end) = item_range(commands.len(), HELP_COMMANDS_PER_PAGE, requested_page);
    let description = grouped_help_description(&commands[start..end]);
    let footer_note = (total > 1).then(|| format!("`help {}` for more", requested_page % total + 1));

    Ok(build_paginated_panel_with_footer_note(
        "Commands",
        description,
        requested_page,
        total,
        footer_note.as_deref(),
    )
    .render())
}

fn sorted_commands(category: Option<&str>) -> Vec<&'static CommandMeta> {
    let mut commands: Vec<&'static CommandMeta> = COMMANDS
        .iter()
        .filter(|command| category.is_none_or(|wanted| command.category == wanted))
        .collect();
    commands.sort_by_key(|command| (command.category, command.name));
    commands
}

fn grouped_help_description(commands: &[&CommandMeta]) -> String {
    let mut out = String::new();
    let mut current_category = None;

    for command in commands {
        if current_category != Some(command.category) {
            if current_category.is_some() {
                out.push('\n');
            }
            out.push_str(&format!("{}\n", command.category.to_ascii_uppercase()));
            current_category = Some(command.category);
        }
        out.push_str(&format!("  {:<28} {}\n", command.usage, command.desc));
    }

    out
}
