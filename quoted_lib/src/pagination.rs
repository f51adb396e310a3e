//! Page/limit state for one list view, and the page-number strip shown beside it.

/// Errors from cursor mutations. Invalid pages and limits are rejected, never clamped.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page must be at least 1")]
    InvalidPage,
    #[error("limit must be at least 1")]
    InvalidLimit,
    #[error("already on the first page")]
    BeforeFirstPage,
}

/// The (page, limit) pair identifying the current page window of a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageCursor {
    pub page: u32,
    pub limit: u32,
}

/// Owns the cursor for one list view.
///
/// The API reports only whether another page exists, never a total, so the
/// paginator also remembers the highest page visited. That lets the page strip
/// keep showing pages the user has already seen after they page backwards.
/// Changing the page size invalidates that memory.
#[derive(Debug, Clone)]
pub struct Paginator {
    cursor: PageCursor,
    max_page_seen: u32,
}

impl Paginator {
    pub fn new(initial_page: u32, initial_limit: u32) -> Result<Self, PaginationError> {
        if initial_page == 0 {
            return Err(PaginationError::InvalidPage);
        }
        if initial_limit == 0 {
            return Err(PaginationError::InvalidLimit);
        }
        Ok(Self {
            cursor: PageCursor {
                page: initial_page,
                limit: initial_limit,
            },
            max_page_seen: initial_page,
        })
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn page(&self) -> u32 {
        self.cursor.page
    }

    pub fn limit(&self) -> u32 {
        self.cursor.limit
    }

    pub fn max_page_seen(&self) -> u32 {
        self.max_page_seen
    }

    /// Moves forward one page. Whether a next page exists is the caller's call,
    /// based on the has-more flag of the last fetch.
    pub fn next_page(&mut self) {
        self.move_to(self.cursor.page.saturating_add(1));
    }

    pub fn previous_page(&mut self) -> Result<(), PaginationError> {
        if self.cursor.page <= 1 {
            return Err(PaginationError::BeforeFirstPage);
        }
        self.move_to(self.cursor.page - 1);
        Ok(())
    }

    pub fn set_page(&mut self, page: u32) -> Result<(), PaginationError> {
        if page == 0 {
            return Err(PaginationError::InvalidPage);
        }
        self.move_to(page);
        Ok(())
    }

    /// Changes the page size and forgets the highest page seen.
    pub fn set_limit(&mut self, limit: u32) -> Result<(), PaginationError> {
        if limit == 0 {
            return Err(PaginationError::InvalidLimit);
        }
        self.cursor.limit = limit;
        self.max_page_seen = 0;
        Ok(())
    }

    /// Page numbers to render for the current cursor.
    pub fn visible_pages(&self, max_page_numbers_displayed: u32, has_more: bool) -> Vec<u32> {
        visible_page_numbers(
            self.cursor.page,
            max_page_numbers_displayed,
            has_more,
            self.max_page_seen,
        )
    }

    fn move_to(&mut self, page: u32) {
        self.cursor.page = page;
        self.max_page_seen = self.max_page_seen.max(page);
    }
}

/// Sliding window of page numbers anchored on the highest page known to exist:
/// every positive number in `[upper - max_page_numbers_displayed, upper]`, where
/// `upper = max(current_page + has_more, max_page_seen)`.
pub fn visible_page_numbers(
    current_page: u32,
    max_page_numbers_displayed: u32,
    has_more: bool,
    max_page_seen: u32,
) -> Vec<u32> {
    let upper = current_page
        .saturating_add(u32::from(has_more))
        .max(max_page_seen);
    let lower = upper.saturating_sub(max_page_numbers_displayed).max(1);
    (lower..=upper).collect()
}
