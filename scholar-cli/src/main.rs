use std::path::PathBuf;

use clap::Parser;
use rustls::crypto::ring::default_provider;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info};

use scholar_commands::{LineOutcome, handle_line};
use scholar_core::{AppConfig, Context, logging};

const PROMPT: &str = "scholar> ";

/// Search academic publications and classify documents from the terminal.
#[derive(Debug, Parser)]
#[command(name = "scholar", version)]
struct Args {
    /// Path to the TOML config file.
    #[arg(long, env = "SCHOLAR_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines instead of compact text.
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load the .env file before clap reads `env` fallbacks
    dotenvy::dotenv().ok();

    let args = Args::parse();
    logging::init_logging(args.json_logs)?;

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    let config = AppConfig::load_and_validate(args.config.as_deref())?;
    info!(
        search_url = %config.api.search_url,
        history = %config.history.path.display(),
        "configuration loaded"
    );

    let ctx = Context::from_config(config).await?;

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(b"Scholar Search. Type `help` for commands, `quit` to leave.\n")
        .await?;

    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match handle_line(ctx.clone(), &line).await {
            Ok(LineOutcome::Reply(text)) => {
                stdout.write_all(text.as_bytes()).await?;
                stdout.write_all(b"\n\n").await?;
            }
            Ok(LineOutcome::Empty) => {}
            Ok(LineOutcome::Quit) => break,
            Err(source) => {
                error!(?source, "command failed");
                stdout
                    .write_all(format!("Error: {source}\n\n").as_bytes())
                    .await?;
            }
        }
    }

    info!("bye");
    Ok(()) // Return Success, shutdown cleanly
}
