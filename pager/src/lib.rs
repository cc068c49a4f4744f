#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![cfg_attr(feature = "fail-on-warnings", deny(clippy::all))]

//! Cursor pagination bookkeeping for connection-style list views.
//!
//! The host view persists a [`PaginationRequest`] (usually in the URL query),
//! asks [`resolve_variables`] what to fetch, and after the fetch completes asks
//! [`derive_navigation`] which directions are available. Navigating hands a
//! replacement request back to the host through a [`store::RequestSink`].

pub mod connection;
mod paginator;
pub mod query;
pub mod resolver;
pub mod state;
pub mod store;

pub use paginator::*;
pub use resolver::{derive_navigation, resolve_variables, Navigation};
pub use state::PaginationState;

pub mod primitives {
    pub use pager_types::{
        page_info::PageInfo,
        primitives::{Cursor, PageSize, PageSizeError},
        request::PaginationRequest,
        variables::PaginationVariables,
    };
}

pub use primitives::*;
