//! Per-request context and paging types.
//!
//! The adapter is a stateless per-request translator: every operation
//! receives a `RequestContext` supplied by the caller and completes before
//! returning. `Page::of` bounds an ordered collection the way the external
//! paging helper expects, and `SearchOutcome` keeps "no search was requested"
//! distinct from "the search matched nothing".

use serde::{Deserialize, Serialize};

use crate::config::RestConfig;
use crate::representation::Representation;

/// Caller-supplied parameters for a single resource operation.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Requested representation level.
    pub representation: Representation,
    /// Zero-based index of the first entry to return.
    pub start_index: usize,
    /// Maximum number of entries per page.
    pub limit: usize,
    /// Free-text query (`q` parameter), if the caller supplied one.
    pub query: Option<String>,
}

impl RequestContext {
    #[must_use]
    pub fn new(config: &RestConfig) -> Self {
        Self {
            representation: Representation::default(),
            start_index: 0,
            limit: config.default_limit,
            query: None,
        }
    }

    /// Sets the representation level.
    #[must_use]
    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// Sets the start index.
    #[must_use]
    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    /// Sets the page limit, clamped to the configured absolute maximum.
    #[must_use]
    pub fn with_limit(mut self, limit: usize, config: &RestConfig) -> Self {
        self.limit = limit.min(config.absolute_limit).max(1);
        self
    }

    /// Sets the free-text query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new(&RestConfig::default())
    }
}

/// One bounded page of an ordered collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub entries: Vec<T>,
    /// Size of the full collection the page was cut from.
    pub total: usize,
    /// Index of the first entry within the full collection.
    pub start_index: usize,
    /// Whether entries exist beyond this page.
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Cuts one page out of an already-ordered collection.
    #[must_use]
    pub fn of(items: Vec<T>, context: &RequestContext) -> Self {
        let total = items.len();
        let start = context.start_index.min(total);
        let end = start.saturating_add(context.limit).min(total);
        let entries: Vec<T> = items
            .into_iter()
            .skip(start)
            .take(end - start)
            .collect();
        Self {
            entries,
            total,
            start_index: start,
            has_more: end < total,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts every entry, keeping the paging metadata. Fails on the first
    /// conversion error.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        let entries = self.entries.into_iter().map(f).collect::<Result<_, E>>()?;
        Ok(Page {
            entries,
            total: self.total,
            start_index: self.start_index,
            has_more: self.has_more,
        })
    }
}

/// Result of a `search` operation.
///
/// `NotSearched` is the explicit marker for "the caller supplied no query",
/// which callers must be able to tell apart from a search that ran and
/// matched nothing (an empty `Paged`).
#[derive(Debug, Clone)]
pub enum SearchOutcome<T> {
    /// No query parameter was present; nothing was searched.
    NotSearched,
    /// A search ran; its (possibly empty) bounded result page.
    Paged(Page<T>),
}

impl<T> SearchOutcome<T> {
    #[must_use]
    pub fn is_searched(&self) -> bool {
        matches!(self, Self::Paged(_))
    }
}
