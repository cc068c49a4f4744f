use anyhow::Context;
use pager::PaginatorConfig;
use pager_tracing::TracingConfig;
use serde::{Deserialize, Serialize};

use std::path::Path;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paginator: PaginatorConfig,
    #[serde(default)]
    pub tracing: TracingConfig,
}

pub struct EnvOverride {
    pub page_size: Option<u32>,
}

impl Config {
    pub fn load_config(
        path: Option<impl AsRef<Path>>,
        env_override: EnvOverride,
    ) -> anyhow::Result<Self> {
        let config = if let Some(config_path) = path {
            let config_file =
                std::fs::read_to_string(config_path).context("Couldn't read config file")?;
            Self::from_yaml(&config_file)?
        } else {
            eprintln!("No config file provided, using default config.");
            Config::default()
        };
        config.apply_env_override(env_override)
    }

    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).context("Couldn't parse config file")?;
        config.paginator.validate()?;
        Ok(config)
    }

    fn apply_env_override(
        mut self,
        EnvOverride { page_size }: EnvOverride,
    ) -> anyhow::Result<Self> {
        if let Some(page_size) = page_size {
            self.paginator
                .set_page_size(page_size)
                .context("Invalid page size override")?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_default_when_missing() {
        let config = Config::from_yaml("paginator:\n  page_size: 50\n").unwrap();
        assert_eq!(config.paginator.page_size.get(), 50);
        assert_eq!(config.paginator.max_page_size.get(), 100);
        assert_eq!(config.tracing.service_name, "dev");
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(Config::from_yaml("paginator:\n  page_size: 0\n").is_err());
    }

    #[test]
    fn override_replaces_page_size() {
        let config = Config::load_config(
            None::<&Path>,
            EnvOverride {
                page_size: Some(30),
            },
        )
        .unwrap();
        assert_eq!(config.paginator.page_size.get(), 30);

        assert!(Config::load_config(
            None::<&Path>,
            EnvOverride {
                page_size: Some(101),
            },
        )
        .is_err());
    }
}
