use anyhow::Result;
use clap::Args;
use quoted_lib::{validation, QuotedClient, RandomQuoteQuery};

use crate::output::{print_quote, OutputFormat};

#[derive(Args)]
pub struct RandomArgs {
    /// Pick from this show
    #[arg(long)]
    pub show: Option<String>,

    /// Pick from this season (requires --show)
    #[arg(long)]
    pub season: Option<i32>,

    /// Pick from this episode (requires --show and --season)
    #[arg(long)]
    pub episode: Option<i32>,

    /// Pick a quote spoken by this character
    #[arg(long)]
    pub character: Option<String>,
}

pub async fn run(args: &RandomArgs, client: &QuotedClient, format: &OutputFormat) -> Result<()> {
    let mut query = RandomQuoteQuery::default();

    if let Some(show) = &args.show {
        query = query.with_show_name(&validation::validate_name(show)?);
    }
    if let Some(season) = args.season {
        query = query.with_season_no(validation::validate_number("season", season)?);
    }
    if let Some(episode) = args.episode {
        query = query.with_episode_no(validation::validate_number("episode", episode)?);
    }
    if let Some(character) = &args.character {
        query = query.with_character_name(&validation::validate_name(character)?);
    }

    let quote = client.random_quote(&query).await?;
    print_quote(&quote, format)
}
