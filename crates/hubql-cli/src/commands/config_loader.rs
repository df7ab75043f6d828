use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use hubql_core::{Registry, RegistryConfig};

/// Where registry page sizes come from: an optional JSON file, then flags.
#[derive(Debug, Clone, Default)]
pub struct RegistryArgs {
    pub config: Option<PathBuf>,
    pub page_limit: Option<u32>,
    pub nested_page_limit: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{0} must be at least 1")]
    ZeroLimit(&'static str),
}

pub fn load_config(args: &RegistryArgs) -> Result<RegistryConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => load_file(path)?,
        None => RegistryConfig::default(),
    };

    if let Some(limit) = args.page_limit {
        config = config.page_limit(limit);
    }
    if let Some(limit) = args.nested_page_limit {
        config = config.nested_page_limit(limit);
    }

    if config.page_limit == 0 {
        return Err(ConfigError::ZeroLimit("pageLimit"));
    }
    if config.nested_page_limit == 0 {
        return Err(ConfigError::ZeroLimit("nestedPageLimit"));
    }
    Ok(config)
}

pub fn load_registry(args: &RegistryArgs) -> Result<Registry, ConfigError> {
    let config = load_config(args)?;
    tracing::debug!(
        page_limit = config.page_limit,
        nested_page_limit = config.nested_page_limit,
        "building registry"
    );
    Ok(Registry::github(&config))
}

fn load_file(path: &Path) -> Result<RegistryConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    RegistryConfig::from_json(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
