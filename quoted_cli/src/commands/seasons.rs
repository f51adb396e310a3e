use anyhow::Result;
use clap::Args;
use quoted_lib::{validation, QuotedClient, SeasonsScope};

use super::{run_list, PageArgs};
use crate::output::{print_seasons, OutputFormat};

#[derive(Args)]
pub struct SeasonsArgs {
    /// Show name, e.g. "Family Guy"
    pub show: String,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run(args: &SeasonsArgs, client: &QuotedClient, format: &OutputFormat) -> Result<()> {
    let show = validation::validate_name(&args.show)?;
    run_list(SeasonsScope { show }, &args.paging, client, format, print_seasons).await
}
