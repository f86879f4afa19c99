use crate::error::AssetFetchError;
use crate::table::AssetTable;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AssetState {
    Present { bytes: u64 },
    Empty,
    Missing,
}

#[derive(Clone, Debug, Serialize)]
pub struct AssetStatus {
    pub path: PathBuf,
    pub url: Url,
    #[serde(flatten)]
    pub state: AssetState,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct InventoryReport {
    pub assets: Vec<AssetStatus>,
}

impl InventoryReport {
    /// Assets the consuming application would have to replace with its built-in fallbacks.
    pub fn missing(&self) -> impl Iterator<Item = &AssetStatus> {
        self.assets
            .iter()
            .filter(|a| !matches!(a.state, AssetState::Present { .. }))
    }

    pub fn is_complete(&self) -> bool {
        self.missing().next().is_none()
    }
}

/// Looks at what is on disk for each asset. Does not touch the network.
pub fn check_assets(table: &AssetTable, root: &Path) -> Result<InventoryReport, AssetFetchError> {
    let mut report = InventoryReport::default();

    for entry in table.iter() {
        let state = match std::fs::metadata(entry.destination(root)) {
            Ok(meta) if meta.is_file() && meta.len() > 0 => AssetState::Present { bytes: meta.len() },
            Ok(meta) if meta.is_file() => AssetState::Empty,
            Ok(_) => AssetState::Missing,
            Err(e) if e.kind() == ErrorKind::NotFound => AssetState::Missing,
            Err(e) => return Err(e.into()),
        };

        report.assets.push(AssetStatus {
            path: entry.path.clone(),
            url: entry.url.clone(),
            state,
        });
    }

    Ok(report)
}
