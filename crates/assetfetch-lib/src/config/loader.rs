use super::Config;
use crate::error::AssetFetchError;
use config::Config as ConfigBuilder;
use std::path::Path;

/// Reads an asset table config. The format follows the file extension. A relative `root` is
/// anchored at the directory holding the config file.
pub fn load_config(config_path: &Path) -> Result<Config, AssetFetchError> {
    let mut app_config: Config = ConfigBuilder::builder()
        .add_source(config::File::from(config_path))
        .build()?
        .try_deserialize()?;

    if let Some(root) = app_config.root.take() {
        app_config.root = Some(match config_path.parent() {
            Some(dir) if root.is_relative() => dir.join(root),
            _ => root,
        });
    }

    Ok(app_config)
}
