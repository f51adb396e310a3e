use anyhow::Result;
use clap::Args;
use quoted_lib::{validation, EpisodesScope, QuotedClient};

use super::{run_list, PageArgs};
use crate::output::{print_episodes, OutputFormat};

#[derive(Args)]
pub struct EpisodesArgs {
    /// Show name
    pub show: String,

    /// Season number
    pub season: i32,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run(args: &EpisodesArgs, client: &QuotedClient, format: &OutputFormat) -> Result<()> {
    let scope = EpisodesScope {
        show: validation::validate_name(&args.show)?,
        season: validation::validate_number("season", args.season)?,
    };
    run_list(scope, &args.paging, client, format, print_episodes).await
}
