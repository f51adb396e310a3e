use anyhow::Result;
use clap::Args;
use quoted_lib::{validation, QuotedClient, ShowsScope};

use super::{run_list, PageArgs};
use crate::output::{print_shows, OutputFormat};

#[derive(Args)]
pub struct ShowsArgs {
    /// Search shows by name
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

pub async fn run(args: &ShowsArgs, client: &QuotedClient, format: &OutputFormat) -> Result<()> {
    let name = args
        .name
        .as_deref()
        .map(validation::validate_search)
        .transpose()?;
    run_list(ShowsScope { name }, &args.paging, client, format, print_shows).await
}
