//! Connection-style list sources.
//!
//! Fetching is the host's concern; [`InMemoryConnection`] serves a local list
//! with Relay connection semantics so the resolver can be driven end to end.

mod cursor;

pub use cursor::OffsetCursor;

use crate::{primitives::*, PaginatorError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub nodes: Vec<T>,
    pub page_info: PageInfo,
}

pub trait ConnectionSource {
    type Node;

    fn fetch(&self, variables: &PaginationVariables) -> Result<Page<Self::Node>, PaginatorError>;
}

/// Serves a fixed list of items.
///
/// Like most Relay servers it only reports `has_next_page` for forward
/// fetches and `has_previous_page` for backward fetches; the opposite flag is
/// always `false`.
#[derive(Debug, Clone)]
pub struct InMemoryConnection<T> {
    items: Vec<T>,
}

impl<T> InMemoryConnection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone> InMemoryConnection<T> {
    fn page(
        &self,
        start: usize,
        end: usize,
        has_next_page: bool,
        has_previous_page: bool,
    ) -> Result<Page<T>, PaginatorError> {
        let (start_cursor, end_cursor) = if start < end {
            (
                Some(OffsetCursor { offset: start }.encode_cursor()?),
                Some(OffsetCursor { offset: end - 1 }.encode_cursor()?),
            )
        } else {
            (None, None)
        };
        Ok(Page {
            nodes: self.items[start..end].to_vec(),
            page_info: PageInfo {
                start_cursor,
                end_cursor,
                has_next_page,
                has_previous_page,
            },
        })
    }
}

impl<T: Clone> ConnectionSource for InMemoryConnection<T> {
    type Node = T;

    fn fetch(&self, variables: &PaginationVariables) -> Result<Page<T>, PaginatorError> {
        let len = self.items.len();
        match variables {
            PaginationVariables::Forward { first, after } => {
                let start = match after {
                    Some(cursor) => OffsetCursor::decode_cursor(cursor)?
                        .offset
                        .saturating_add(1)
                        .min(len),
                    None => 0,
                };
                let end = start.saturating_add(first.get() as usize).min(len);
                self.page(start, end, end < len, false)
            }
            PaginationVariables::Backward { last, before } => {
                let end = OffsetCursor::decode_cursor(before)?.offset.min(len);
                let start = end.saturating_sub(last.get() as usize);
                self.page(start, end, false, start > 0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward(first: u32, after: Option<Cursor>) -> PaginationVariables {
        PaginationVariables::Forward {
            first: PageSize::new(first).unwrap(),
            after,
        }
    }

    #[test]
    fn first_page_reports_more_items() {
        let connection = InMemoryConnection::new((0..5).collect::<Vec<_>>());
        let page = connection.fetch(&forward(2, None)).unwrap();
        assert_eq!(page.nodes, vec![0, 1]);
        assert!(page.page_info.has_next_page);
        assert!(!page.page_info.has_previous_page);
    }

    #[test]
    fn backward_page_ends_before_cursor() {
        let connection = InMemoryConnection::new((0..5).collect::<Vec<_>>());
        let before = OffsetCursor { offset: 4 }.encode_cursor().unwrap();
        let page = connection
            .fetch(&PaginationVariables::Backward {
                last: PageSize::new(2).unwrap(),
                before,
            })
            .unwrap();
        assert_eq!(page.nodes, vec![2, 3]);
        assert!(page.page_info.has_previous_page);
        assert!(!page.page_info.has_next_page);
    }

    #[test]
    fn out_of_range_offsets_yield_edge_pages() {
        let connection = InMemoryConnection::new(vec![1u8, 2, 3]);
        let after = OffsetCursor { offset: usize::MAX }.encode_cursor().unwrap();
        let page = connection.fetch(&forward(2, Some(after))).unwrap();
        assert!(page.nodes.is_empty());
        assert!(!page.page_info.has_next_page);

        let before = OffsetCursor { offset: 10 }.encode_cursor().unwrap();
        let page = connection
            .fetch(&PaginationVariables::Backward {
                last: PageSize::new(2).unwrap(),
                before,
            })
            .unwrap();
        assert_eq!(page.nodes, vec![2, 3]);
        assert!(page.page_info.has_previous_page);
    }

    #[test]
    fn empty_connection_has_no_cursors() {
        let connection = InMemoryConnection::<u8>::new(vec![]);
        let page = connection.fetch(&forward(10, None)).unwrap();
        assert!(page.nodes.is_empty());
        assert_eq!(page.page_info, PageInfo::default());
    }
}
