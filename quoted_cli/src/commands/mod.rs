//! CLI subcommand implementations.

pub mod episodes;
pub mod pager;
pub mod quotes;
pub mod random;
pub mod seasons;
pub mod shows;

use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Args;
use quoted_lib::{
    quoted_api, validation, PagedQuery, QueryState, QuotedClient, QuotedError, Scope,
};

use crate::output::OutputFormat;

/// Prints one page of a list view's items.
pub type Render<S> =
    fn(&[<<S as Scope>::Query as PagedQuery>::Item], &OutputFormat) -> Result<()>;

#[derive(Args)]
pub struct PageArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Results per page: 10, 20 or 50 (defaults to QUOTED_PAGE_SIZE)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Browse pages interactively
    #[arg(long, short)]
    pub interactive: bool,
}

/// Fetches and prints the page selected by `args`, or hands the list to the
/// interactive pager.
pub async fn run_list<S: Scope>(
    scope: S,
    args: &PageArgs,
    client: &QuotedClient,
    format: &OutputFormat,
    render: Render<S>,
) -> Result<()> {
    let mut query = client.paginate(scope)?;
    if let Some(limit) = args.limit {
        let limit = validation::validate_page_size(limit, &client.config().pagination)?;
        query.set_limit(limit)?;
    }
    query.set_page(args.page)?;

    if args.interactive {
        let stdin = std::io::stdin();
        return pager::browse(client, query, format, render, &mut stdin.lock()).await;
    }

    let page = loaded_page(client.load(&query).await, query.page())?;
    eprintln!(
        "Page {} ({} per page{})",
        page.page,
        page.limit,
        if page.has_more { ", more available" } else { "" }
    );
    render(&page.data, format)
}

/// The value of an awaited load. Anything short of ready is an error.
fn loaded_page<T>(state: QueryState<T, quoted_api::Error>, page: u32) -> Result<Arc<T>> {
    match state {
        QueryState::Ready(value) => Ok(value),
        QueryState::Failed(e) => Err(QuotedError::from(e).into()),
        QueryState::Idle | QueryState::Loading => bail!("page {} did not finish loading", page),
    }
}
