mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use quoted_lib::{AppConfig, QuotedClient};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "quoted")]
#[command(version)]
#[command(about = "Browse quotes from your favourite TV shows")]
struct Cli {
    /// Output format: table, json or csv
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Log requests and cache activity
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List shows
    Shows(commands::shows::ShowsArgs),
    /// List the seasons of a show
    Seasons(commands::seasons::SeasonsArgs),
    /// List the episodes of a season
    Episodes(commands::episodes::EpisodesArgs),
    /// List quotes, optionally filtered by show, season and episode
    Quotes(commands::quotes::QuotesArgs),
    /// Print a random quote
    Random(commands::random::RandomArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let directive = if cli.verbose { "quoted=debug" } else { "quoted=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let format = OutputFormat::parse(&cli.output);

    let config = AppConfig::from_env()?;
    let client = QuotedClient::new(config)?;
    tracing::debug!("Using API at {}", client.api().base_url());

    match &cli.command {
        Commands::Shows(args) => commands::shows::run(args, &client, &format).await?,
        Commands::Seasons(args) => commands::seasons::run(args, &client, &format).await?,
        Commands::Episodes(args) => commands::episodes::run(args, &client, &format).await?,
        Commands::Quotes(args) => commands::quotes::run(args, &client, &format).await?,
        Commands::Random(args) => commands::random::run(args, &client, &format).await?,
    }

    Ok(())
}
