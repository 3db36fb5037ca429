//! Product listing view-state and server reconciliation.
//!
//! The view never patches its local page after a mutation; it re-issues
//! the current query and lets the server's deterministic ordering
//! decide what the page looks like. Responses are sequence-stamped so a
//! late reply from an older query can never overwrite a newer one
//! (last-issued-wins, not last-arrived-wins).

use std::time::Instant;

use catalog_core::paging::{PageResult, DEFAULT_PAGE_SIZE};
use catalog_core::product::{Product, ProductInput, ProductStatus};
use catalog_core::types::DbId;

use crate::api::{CatalogApi, ProductQuery};
use crate::debounce::DebouncedSearch;
use crate::error::ClientResult;

/// View-state for the paginated product listing.
pub struct ProductView<A: CatalogApi> {
    api: A,
    search: DebouncedSearch,
    term: Option<String>,
    status: Option<ProductStatus>,
    page: i64,
    size: i64,
    sort: Option<String>,
    /// Stamp handed to the next issued query.
    next_seq: u64,
    /// Stamp of the most recently issued query; only its response applies.
    latest_issued: u64,
    current: Option<PageResult<Product>>,
}

impl<A: CatalogApi> ProductView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            search: DebouncedSearch::new(),
            term: None,
            status: None,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: None,
            next_seq: 1,
            latest_issued: 0,
            current: None,
        }
    }

    /// The last applied page, if any query has completed.
    pub fn current_page(&self) -> Option<&PageResult<Product>> {
        self.current.as_ref()
    }

    /// Snapshot of the parameters the next query will use.
    pub fn current_query(&self) -> ProductQuery {
        ProductQuery {
            term: self.term.clone(),
            status: self.status,
            page: self.page,
            size: self.size,
            sort: self.sort.clone(),
        }
    }

    // -- Sequence-stamped query lifecycle --------------------------------

    /// Issue a query: returns its stamp and parameter snapshot. Issuing
    /// supersedes every earlier in-flight query.
    pub fn begin_query(&mut self) -> (u64, ProductQuery) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.latest_issued = seq;
        (seq, self.current_query())
    }

    /// Apply a query response. Returns `false` (and leaves the view
    /// untouched) when a newer query has been issued since `seq`.
    pub fn complete_query(&mut self, seq: u64, result: PageResult<Product>) -> bool {
        if seq != self.latest_issued {
            tracing::debug!(seq, latest = self.latest_issued, "Discarding stale page response");
            return false;
        }
        self.current = Some(result);
        true
    }

    /// Issue the current query and apply its response.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        let (seq, query) = self.begin_query();
        let result = self.api.list_paged(&query).await?;
        self.complete_query(seq, result);
        Ok(())
    }

    // -- Filters ---------------------------------------------------------

    /// Record a search keystroke; the query fires via [`tick`](Self::tick)
    /// once the quiet window elapses.
    pub fn on_search_input(&mut self, term: &str, now: Instant) {
        self.search.input(term, now);
    }

    /// Drive the debounce clock. Queries when a term's quiet window has
    /// elapsed; returns whether a query was issued.
    pub async fn tick(&mut self, now: Instant) -> ClientResult<bool> {
        let Some(term) = self.search.poll(now) else {
            return Ok(false);
        };
        let trimmed = term.trim();
        self.term = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self.page = 0;
        self.refresh().await?;
        Ok(true)
    }

    /// Change the status filter. Queries immediately; does not wait on
    /// any pending debounce window.
    pub async fn set_status_filter(&mut self, status: Option<ProductStatus>) -> ClientResult<()> {
        self.status = status;
        self.page = 0;
        self.refresh().await
    }

    /// Reset term and status, cancel any pending debounce, and re-query
    /// page 0.
    pub async fn clear_filters(&mut self) -> ClientResult<()> {
        self.search.clear();
        self.term = None;
        self.status = None;
        self.page = 0;
        self.refresh().await
    }

    pub async fn set_page(&mut self, page: i64) -> ClientResult<()> {
        self.page = page;
        self.refresh().await
    }

    pub async fn set_sort(&mut self, sort: Option<String>) -> ClientResult<()> {
        self.sort = sort;
        self.page = 0;
        self.refresh().await
    }

    // -- Mutations (reconcile by re-query) -------------------------------

    pub async fn create(&mut self, input: &ProductInput) -> ClientResult<Product> {
        let product = self.api.create_product(input).await?;
        self.refresh().await?;
        Ok(product)
    }

    pub async fn update(&mut self, id: DbId, input: &ProductInput) -> ClientResult<Product> {
        let product = self.api.update_product(id, input).await?;
        self.refresh().await?;
        Ok(product)
    }

    pub async fn delete(&mut self, id: DbId) -> ClientResult<()> {
        self.api.delete_product(id).await?;
        self.refresh().await
    }
}
