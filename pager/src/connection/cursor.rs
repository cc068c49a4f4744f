use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use crate::{primitives::Cursor, PaginatorError};

/// Position of an item inside an [`super::InMemoryConnection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetCursor {
    pub offset: usize,
}

impl OffsetCursor {
    pub fn encode_cursor(&self) -> Result<Cursor, PaginatorError> {
        let json = serde_json::to_string(&self)
            .map_err(|e| PaginatorError::CursorDecode(e.to_string()))?;
        Ok(Cursor::from(general_purpose::STANDARD_NO_PAD.encode(json.as_bytes())))
    }

    pub fn decode_cursor(cursor: &Cursor) -> Result<Self, PaginatorError> {
        let bytes = general_purpose::STANDARD_NO_PAD
            .decode(cursor.as_str().as_bytes())
            .map_err(|e| PaginatorError::CursorDecode(e.to_string()))?;
        let json =
            String::from_utf8(bytes).map_err(|e| PaginatorError::CursorDecode(e.to_string()))?;
        serde_json::from_str(&json).map_err(|e| PaginatorError::CursorDecode(e.to_string()))
    }
}
