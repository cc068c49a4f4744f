use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::error::PaginatorError;
use crate::primitives::PageSize;

#[derive(Builder, Debug, Clone, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct PaginatorConfig {
    #[builder(default)]
    #[serde(default)]
    pub page_size: PageSize,
    #[builder(default = "default_max_page_size()")]
    #[serde(default = "default_max_page_size")]
    pub max_page_size: PageSize,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl PaginatorConfig {
    pub fn builder() -> PaginatorConfigBuilder {
        PaginatorConfigBuilder::default()
    }

    pub fn set_page_size(&mut self, size: u32) -> Result<(), PaginatorError> {
        self.page_size = PageSize::new(size)?;
        self.validate()
    }

    pub fn validate(&self) -> Result<(), PaginatorError> {
        check_page_size(self.page_size, self.max_page_size).map_err(PaginatorError::ConfigError)
    }
}

impl PaginatorConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        check_page_size(
            self.page_size.unwrap_or_default(),
            self.max_page_size.unwrap_or_else(default_max_page_size),
        )
    }
}

fn check_page_size(page_size: PageSize, max_page_size: PageSize) -> Result<(), String> {
    if page_size > max_page_size {
        return Err(format!(
            "page_size {page_size} exceeds max_page_size {max_page_size}"
        ));
    }
    Ok(())
}

fn default_max_page_size() -> PageSize {
    PageSize::DEFAULT_MAX
}
