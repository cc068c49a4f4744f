use serde::{Deserialize, Serialize};

use super::primitives::Cursor;

/// Where the user currently is in a cursor-paginated list.
///
/// Built by the host from its persisted state (usually the URL query) and
/// replaced, never mutated, on navigation. Only one cursor is expected to be
/// set; when both are present `after` wins during resolution.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationRequest {
    #[serde(default)]
    pub after: Option<Cursor>,
    #[serde(default)]
    pub before: Option<Cursor>,
}

impl PaginationRequest {
    pub fn first_page() -> Self {
        Self::default()
    }

    pub fn after(cursor: impl Into<Cursor>) -> Self {
        Self {
            after: Some(cursor.into()),
            before: None,
        }
    }

    pub fn before(cursor: impl Into<Cursor>) -> Self {
        Self {
            after: None,
            before: Some(cursor.into()),
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.after.is_none() && self.before.is_none()
    }
}
