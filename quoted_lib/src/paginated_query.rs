//! A list view's pagination state bound to its fetch.
//!
//! [`PaginatedQuery`] pairs a [`Paginator`] with a [`Scope`] and a
//! [`QueryCache`] keyed by [`QueryDescriptor`]. Every cursor or scope change
//! changes the descriptor, so the next [`PaginatedQuery::load`] fetches the
//! new page while a descriptor that is already cached or in flight is not
//! fetched again.

use std::time::Duration;

use quoted_api::{types::PagedResponse, Client, PageParams, PagedQuery};

use crate::error::QuotedError;
use crate::pagination::Paginator;
use crate::query_cache::{Completion, QueryCache, QueryState, Ticket};
use crate::scope::Scope;

/// The page type a scope's list endpoint returns.
pub type PageOf<S> = PagedResponse<<<S as Scope>::Query as PagedQuery>::Item>;

/// Fetch permission for one page of a scope's list.
pub type PageTicket<S> = Ticket<QueryDescriptor<S>, PageOf<S>, quoted_api::Error>;

/// Scope, page and limit: everything that identifies one fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryDescriptor<S> {
    pub scope: S,
    pub page: u32,
    pub limit: u32,
}

impl<S: Scope> QueryDescriptor<S> {
    pub fn to_query(&self) -> S::Query {
        self.scope.to_query(PageParams::new(self.page, self.limit))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialPageParams {
    pub initial_page: u32,
    pub initial_limit: u32,
}

impl Default for InitialPageParams {
    fn default() -> Self {
        Self {
            initial_page: 1,
            initial_limit: 10,
        }
    }
}

pub struct PaginatedQuery<S: Scope> {
    scope: S,
    paginator: Paginator,
    cache: QueryCache<QueryDescriptor<S>, PageOf<S>, quoted_api::Error>,
}

impl<S: Scope> PaginatedQuery<S> {
    pub fn new(
        scope: S,
        initial: InitialPageParams,
        stale_time: Duration,
    ) -> Result<Self, QuotedError> {
        Ok(Self {
            scope,
            paginator: Paginator::new(initial.initial_page, initial.initial_limit)?,
            cache: QueryCache::new(stale_time),
        })
    }

    pub fn scope(&self) -> &S {
        &self.scope
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn page(&self) -> u32 {
        self.paginator.page()
    }

    pub fn limit(&self) -> u32 {
        self.paginator.limit()
    }

    pub fn descriptor(&self) -> QueryDescriptor<S> {
        QueryDescriptor {
            scope: self.scope.clone(),
            page: self.paginator.page(),
            limit: self.paginator.limit(),
        }
    }

    pub fn next_page(&mut self) {
        self.paginator.next_page();
    }

    pub fn previous_page(&mut self) -> Result<(), QuotedError> {
        Ok(self.paginator.previous_page()?)
    }

    pub fn set_page(&mut self, page: u32) -> Result<(), QuotedError> {
        Ok(self.paginator.set_page(page)?)
    }

    pub fn set_limit(&mut self, limit: u32) -> Result<(), QuotedError> {
        Ok(self.paginator.set_limit(limit)?)
    }

    /// Replaces the filter. A different filter is a different list, so paging
    /// restarts at page 1 and the pages seen so far are forgotten.
    pub fn set_scope(&mut self, scope: S) -> Result<(), QuotedError> {
        if scope == self.scope {
            return Ok(());
        }
        self.paginator = Paginator::new(1, self.paginator.limit())?;
        self.scope = scope;
        Ok(())
    }

    /// Marks the current descriptor as the one the view wants. Returns a
    /// ticket when it has to be fetched. Dropping the ticket without
    /// completing it cancels the fetch.
    pub fn begin(&self) -> Option<PageTicket<S>> {
        self.cache.select(self.descriptor())
    }

    pub fn complete(
        &self,
        ticket: PageTicket<S>,
        result: Result<PageOf<S>, quoted_api::Error>,
    ) -> Completion {
        let completion = self.cache.complete(ticket, result);
        if completion == Completion::Discarded {
            tracing::debug!("Ignored a response for a page that is no longer shown");
        }
        completion
    }

    /// State of the current descriptor.
    pub fn state(&self) -> QueryState<PageOf<S>, quoted_api::Error> {
        self.cache.state()
    }

    /// Fetches the current descriptor if needed and returns its state. If the
    /// returned future is dropped mid-fetch, the descriptor is fetched again
    /// on the next call.
    pub async fn load(&self, client: &Client) -> QueryState<PageOf<S>, quoted_api::Error> {
        if let Some(ticket) = self.begin() {
            let query = ticket.key().to_query();
            let result = client.get_page(&query).await;
            self.complete(ticket, result);
        }
        self.state()
    }

    /// Whether the last fetched page of the current descriptor reported more.
    pub fn has_more(&self) -> bool {
        self.state().ready().is_some_and(|page| page.has_more)
    }

    /// Page numbers to show in a page strip for the current cursor.
    pub fn visible_pages(&self, max_page_numbers_displayed: u32) -> Vec<u32> {
        self.paginator
            .visible_pages(max_page_numbers_displayed, self.has_more())
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
