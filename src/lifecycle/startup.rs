//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration from file or defaults
//! - Apply command-line overrides
//! - Validate the final configuration
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Validation runs after overrides so a bad flag is caught too

use std::path::Path;

use crate::config::{load_config, validate_config, ConfigError, FixtureConfig};

/// Values given on the command line that replace file settings.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

/// Build the effective configuration.
pub fn resolve_config(
    path: Option<&Path>,
    overrides: &Overrides,
) -> Result<FixtureConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => FixtureConfig::default(),
    };

    if let Some(bind_address) = &overrides.bind_address {
        config.listener.bind_address = bind_address.clone();
    }
    if let Some(log_level) = &overrides.log_level {
        config.observability.log_level = log_level.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
