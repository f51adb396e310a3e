//! Line-driven page browser: one command per line, the current page redrawn
//! after each.

use std::io::BufRead;

use anyhow::Result;
use quoted_lib::{
    validation, PaginatedQuery, PaginationDefaults, QueryState, QuotedClient, QuotedError, Scope,
};

use super::Render;
use crate::output::{format_page_strip, OutputFormat};

const HELP: &str = "n: next page  p: previous page  <number>: go to page  s <size>: page size  q: quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerCommand {
    Next,
    Previous,
    Goto(u32),
    Size(u32),
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

pub fn parse_command(line: &str) -> Option<PagerCommand> {
    let mut words = line.split_whitespace();
    let first = words.next()?.to_lowercase();
    let arg = words.next();
    if words.next().is_some() {
        return None;
    }
    match (first.as_str(), arg) {
        ("n" | "next", None) => Some(PagerCommand::Next),
        ("p" | "prev" | "previous", None) => Some(PagerCommand::Previous),
        ("s" | "size", Some(size)) => size.parse().ok().map(PagerCommand::Size),
        ("h" | "help" | "?", None) => Some(PagerCommand::Help),
        ("q" | "quit" | "exit", None) => Some(PagerCommand::Quit),
        (page, None) => page.parse().ok().map(PagerCommand::Goto),
        _ => None,
    }
}

/// Applies one command to the cursor. Moving past the last known page or
/// jumping to a page outside the strip is refused.
pub fn apply<S: Scope>(
    command: PagerCommand,
    query: &mut PaginatedQuery<S>,
    defaults: &PaginationDefaults,
) -> Result<Step, QuotedError> {
    match command {
        PagerCommand::Next => {
            if !query.has_more() {
                return Err(QuotedError::InvalidInput(
                    "already on the last page".to_string(),
                ));
            }
            query.next_page();
        }
        PagerCommand::Previous => query.previous_page()?,
        PagerCommand::Goto(page) => {
            if !query
                .visible_pages(defaults.max_page_numbers_displayed)
                .contains(&page)
            {
                return Err(QuotedError::InvalidInput(format!(
                    "page {} is not available",
                    page
                )));
            }
            query.set_page(page)?;
        }
        PagerCommand::Size(size) => {
            query.set_limit(validation::validate_page_size(size, defaults)?)?;
        }
        PagerCommand::Help => {}
        PagerCommand::Quit => return Ok(Step::Quit),
    }
    Ok(Step::Continue)
}

pub async fn browse<S: Scope>(
    client: &QuotedClient,
    mut query: PaginatedQuery<S>,
    format: &OutputFormat,
    render: Render<S>,
    input: &mut dyn BufRead,
) -> Result<()> {
    let defaults = client.config().pagination.clone();
    let mut line = String::new();
    loop {
        match client.load(&query).await {
            QueryState::Ready(page) => render(&page.data, format)?,
            QueryState::Failed(e) => eprintln!("Error: {}", QuotedError::from(e)),
            QueryState::Idle | QueryState::Loading => {}
        }
        eprintln!(
            "Page {}  [{}]  {} per page",
            format_page_strip(
                &query.visible_pages(defaults.max_page_numbers_displayed),
                query.page()
            ),
            if query.has_more() { "more" } else { "end" },
            query.limit()
        );

        loop {
            eprint!("> ");
            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            match parse_command(&line) {
                Some(PagerCommand::Help) | None => eprintln!("{}", HELP),
                Some(command) => match apply(command, &mut query, &defaults) {
                    Ok(Step::Quit) => return Ok(()),
                    Ok(Step::Continue) => break,
                    Err(e) => eprintln!("{}", e),
                },
            }
        }
    }
}
