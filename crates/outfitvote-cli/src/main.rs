use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use outfitvote_cli::{commands, parse_votes};
use outfitvote_core::config::OutfitConfig;

#[derive(Parser, Debug)]
#[command(name = "outfitvote", author, version, about)]
struct Args {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Walk the whole wizard over the mock closet and outfits.
    Demo {
        /// One vote per outfit, `+`/`u` for up and `-`/`d` for down.
        #[arg(long, default_value = "+-+")]
        votes: String,
    },
    /// Rank a JSON array of outfits by votes.
    Rank {
        file: PathBuf,

        /// Print the summary as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show which outfit is planned for each day of the mock week.
    Plan,
    /// Print the effective configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => OutfitConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => OutfitConfig::default(),
    };
    if args.json_logs {
        config.observability.json_logs = true;
    }
    outfitvote_observability::init_tracing_from_config(&config.observability);

    match args.command {
        Command::Demo { votes } => {
            let votes = parse_votes(&votes)?;
            commands::demo(config, &votes).await
        }
        Command::Rank { file, json } => commands::rank(&file, json),
        Command::Plan => commands::plan(&config),
        Command::Config => commands::print_config(&config),
    }
}
