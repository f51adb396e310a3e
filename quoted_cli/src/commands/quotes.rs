use anyhow::Result;
use clap::Args;
use quoted_lib::{validation, QuotedClient};

use super::{run_list, PageArgs};
use crate::output::{print_quotes, OutputFormat};

#[derive(Args)]
pub struct QuotesArgs {
    /// Filter by show name
    #[arg(long)]
    pub show: Option<String>,

    /// Filter by season number
    #[arg(long)]
    pub season: Option<i32>,

    /// Filter by episode number
    #[arg(long)]
    pub episode: Option<i32>,

    /// Filter as a query string, e.g. "showName=Futurama&seasonNo=6".
    /// Explicit flags take precedence.
    #[arg(long)]
    pub query: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run(args: &QuotesArgs, client: &QuotedClient, format: &OutputFormat) -> Result<()> {
    let mut scope = args
        .query
        .as_deref()
        .map(validation::parse_quotes_filter)
        .unwrap_or_default();

    if let Some(show) = &args.show {
        scope.show_name = Some(validation::validate_name(show)?);
    }
    if let Some(season) = args.season {
        scope.season_no = Some(validation::validate_number("season", season)?);
    }
    if let Some(episode) = args.episode {
        scope.episode_no = Some(validation::validate_number("episode", episode)?);
    }

    run_list(scope, &args.paging, client, format, print_quotes).await
}
