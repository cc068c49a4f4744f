pub mod config;
pub mod error;

use tracing::instrument;

pub use config::*;
pub use error::*;

use crate::{primitives::*, resolver, state::PaginationState, Navigation};

/// Binds the resolver to a configured page size.
#[derive(Clone, Debug, Default)]
pub struct Paginator {
    config: PaginatorConfig,
}

impl Paginator {
    pub fn new(config: PaginatorConfig) -> Result<Self, PaginatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn page_size(&self) -> PageSize {
        self.config.page_size
    }

    #[instrument(
        name = "pager.resolve_variables",
        skip(self),
        fields(state = %PaginationState::from(request))
    )]
    pub fn resolve_variables(&self, request: &PaginationRequest) -> PaginationVariables {
        let variables = resolver::resolve_variables(self.config.page_size, request);
        tracing::debug!(?variables, "resolved pagination variables");
        variables
    }

    #[instrument(
        name = "pager.derive_navigation",
        skip(self, page_info),
        fields(loaded = page_info.is_some())
    )]
    pub fn derive_navigation(
        &self,
        page_info: Option<&PageInfo>,
        request: &PaginationRequest,
    ) -> Navigation {
        let navigation = resolver::derive_navigation(page_info, request);
        tracing::debug!(
            can_go_next = navigation.can_go_next,
            can_go_previous = navigation.can_go_previous,
            "derived navigation"
        );
        navigation
    }
}
