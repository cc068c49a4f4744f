use thiserror::Error;

use pager_types::primitives::PageSizeError;

#[derive(Error, Debug)]
pub enum PaginatorError {
    #[error("PaginatorError - ConfigError: {0}")]
    ConfigError(String),
    #[error("PaginatorError - PageSize: {0}")]
    PageSize(#[from] PageSizeError),
    #[error("PaginatorError - Url: {0}")]
    Url(#[from] url::ParseError),
    #[error("PaginatorError - CursorDecode: {0}")]
    CursorDecode(String),
}
