//! Host-owned persistence for the current [`PaginationRequest`].

use crate::{primitives::PaginationRequest, query};

/// Receives the replacement request produced by a navigation callback.
pub trait RequestSink {
    fn replace(&mut self, request: PaginationRequest);
}

impl<F> RequestSink for F
where
    F: FnMut(PaginationRequest),
{
    fn replace(&mut self, request: PaginationRequest) {
        self(request)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryRequestStore {
    current: PaginationRequest,
    replacements: usize,
}

impl MemoryRequestStore {
    pub fn new(initial: PaginationRequest) -> Self {
        Self {
            current: initial,
            replacements: 0,
        }
    }

    pub fn current(&self) -> &PaginationRequest {
        &self.current
    }

    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl RequestSink for MemoryRequestStore {
    fn replace(&mut self, request: PaginationRequest) {
        tracing::trace!(?request, "replacing persisted request");
        self.current = request;
        self.replacements += 1;
    }
}

/// Keeps the request inside a URL query string alongside unrelated
/// parameters such as sorting and filters.
#[derive(Debug, Clone, Default)]
pub struct QueryStringStore {
    query: String,
}

impl QueryStringStore {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn request(&self) -> PaginationRequest {
        query::request_from_query(&self.query)
    }
}

impl RequestSink for QueryStringStore {
    fn replace(&mut self, request: PaginationRequest) {
        self.query = query::merge_into_query(&self.query, &request);
        tracing::trace!(query = %self.query, "rewrote query string");
    }
}
