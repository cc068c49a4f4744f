use serde::{Deserialize, Serialize};

/// Opaque, endpoint-issued position token.
///
/// The value is never interpreted on this side of the wire; it is only
/// stored, compared and handed back to the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for Cursor {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Cursor {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "graphql")]
impl async_graphql::types::connection::CursorType for Cursor {
    type Error = String;

    fn decode_cursor(s: &str) -> Result<Self, Self::Error> {
        Ok(Self::from(s))
    }

    fn encode_cursor(&self) -> String {
        self.0.clone()
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PageSizeError {
    #[error("PageSizeError - Zero: page size must be positive")]
    Zero,
}

/// Number of items requested per page. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageSize(u32);

impl PageSize {
    pub const DEFAULT: PageSize = PageSize(20);
    pub const DEFAULT_MAX: PageSize = PageSize(100);

    pub fn new(size: u32) -> Result<Self, PageSizeError> {
        if size == 0 {
            return Err(PageSizeError::Zero);
        }
        Ok(Self(size))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for PageSize {
    type Error = PageSizeError;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

impl std::str::FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size: u32 = s.parse().map_err(|e: std::num::ParseIntError| e.to_string())?;
        Self::new(size).map_err(|e| e.to_string())
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
