use crate::error::AssetFetchError;
use crate::table::{AssetEntry, AssetTable};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Declarative replacement for the built-in asset table.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub root: Option<PathBuf>,
    pub assets: Vec<AssetEntry>,
}

impl Config {
    pub fn into_table(self) -> Result<AssetTable, AssetFetchError> {
        AssetTable::new(self.assets)
    }
}
