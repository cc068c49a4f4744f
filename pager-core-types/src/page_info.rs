use serde::{Deserialize, Serialize};

use super::primitives::Cursor;

/// Cursor window returned alongside a page of results.
///
/// Field names follow the Relay `PageInfo` block so a GraphQL response can be
/// deserialized directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub start_cursor: Option<Cursor>,
    #[serde(default)]
    pub end_cursor: Option<Cursor>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

#[cfg(feature = "graphql")]
impl From<async_graphql::types::connection::PageInfo> for PageInfo {
    fn from(info: async_graphql::types::connection::PageInfo) -> Self {
        Self {
            start_cursor: info.start_cursor.map(Cursor::from),
            end_cursor: info.end_cursor.map(Cursor::from),
            has_next_page: info.has_next_page,
            has_previous_page: info.has_previous_page,
        }
    }
}
