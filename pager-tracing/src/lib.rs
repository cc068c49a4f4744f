#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![cfg_attr(feature = "fail-on-warnings", deny(clippy::all))]

use serde::{Deserialize, Serialize};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use tracing::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracingConfig {
    pub service_name: String,
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default = "default_json")]
    pub json: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            service_name: "dev".to_string(),
            filter: default_filter(),
            json: default_json(),
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured filter. Output goes to stderr so stdout stays machine readable.
pub fn init_tracer(config: TracingConfig) -> anyhow::Result<()> {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))?;
    let registry = tracing_subscriber::registry().with(filter_layer);
    if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }
    tracing::debug!(service_name = %config.service_name, "tracing initialized");
    Ok(())
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_json() -> bool {
    true
}
