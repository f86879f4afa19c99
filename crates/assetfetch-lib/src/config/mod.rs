mod loader;
mod model;

pub use loader::load_config;
pub use model::Config;

use crate::error::AssetFetchError;
use std::path::PathBuf;

/// Picks the asset root: explicit flag first, then the config file, then the working directory.
pub fn resolve_root(
    cli_root: Option<PathBuf>,
    config_root: Option<PathBuf>,
) -> Result<PathBuf, AssetFetchError> {
    match cli_root.or(config_root) {
        Some(root) => Ok(root),
        None => Ok(std::env::current_dir()?),
    }
}
