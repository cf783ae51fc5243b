use crate::{COMMANDS, CommandMeta};

pub const META: CommandMeta = CommandMeta {
    name: "usage",
    desc: "Show usage syntax for a specific command.",
    category: "utility",
    usage: "usage <command>",
};

/// Show usage for a specific command.
///
/// Error behavior:
/// - missing argument returns this command's usage.
/// - unknown command returns a short not-found message.
pub async fn run(arg1: Option<&str>) -> anyhow::Result<String> {
    let Some(raw_name) = arg1 else {
        return Ok(format!("Usage: `{}`", META.usage));
    };

    let lookup = raw_name.trim().to_ascii_lowercase();

    let Some(command) = COMMANDS.iter().find(|command| command.name == lookup) else {
        return Ok(format!("Unknown command: `{lookup}`"));
    };

    Ok(format!("Usage: `{}`", command.usage))
}
