use super::model::{AssetEntry, AssetTable};
use crate::error::AssetFetchError;
use std::path::PathBuf;
use url::Url;

/// Destination (relative to the asset root) and source of every bundled asset.
pub const BUILTIN_ASSETS: &[(&str, &str)] = &[
    // Sectional chart symbols
    (
        "assets/sectional/towered-airport.svg",
        "https://upload.wikimedia.org/wikipedia/commons/6/68/Airport_symbol_towered.svg",
    ),
    (
        "assets/sectional/nontowered-airport.svg",
        "https://upload.wikimedia.org/wikipedia/commons/2/28/Airport_symbol_untowered.svg",
    ),
    (
        "assets/sectional/vor.svg",
        "https://upload.wikimedia.org/wikipedia/commons/3/3b/VOR_symbol.svg",
    ),
    (
        "assets/sectional/restricted-area.svg",
        "https://upload.wikimedia.org/wikipedia/commons/1/1a/Restricted_area_symbol.svg",
    ),
    // Runway markings
    (
        "assets/runway/threshold.svg",
        "https://upload.wikimedia.org/wikipedia/commons/3/33/Runway_threshold_markings.svg",
    ),
    (
        "assets/runway/displaced-threshold.svg",
        "https://upload.wikimedia.org/wikipedia/commons/8/8b/Displaced_threshold.svg",
    ),
    (
        "assets/runway/touchdown-zone.svg",
        "https://upload.wikimedia.org/wikipedia/commons/1/1a/Touchdown_zone_markings.svg",
    ),
    (
        "assets/runway/hold-short.svg",
        "https://upload.wikimedia.org/wikipedia/commons/3/3e/Hold_short_markings.svg",
    ),
    // FAA reference publications
    (
        "assets/FAA_Aeronautical_Chart_Users_Guide_20250612.pdf",
        "https://aeronav.faa.gov/user_guide/cug-complete_20250612.pdf",
    ),
    (
        "assets/FAA_Airport_Signs_Markings_Lights.pdf",
        "https://www.faa.gov/airports/runway_safety/publications/Airport-Signs-Markings-Lights.pdf",
    ),
];

impl AssetTable {
    pub fn builtin() -> Result<Self, AssetFetchError> {
        let entries = BUILTIN_ASSETS
            .iter()
            .map(|(path, url)| {
                let url = Url::parse(url).map_err(|e| AssetFetchError::InvalidAssetTable {
                    details: format!("invalid built-in source URL {url}: {e}"),
                })?;
                Ok(AssetEntry {
                    path: PathBuf::from(path),
                    url,
                })
            })
            .collect::<Result<Vec<_>, AssetFetchError>>()?;

        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_builtin_table_is_valid() {
        let table = AssetTable::builtin().unwrap();
        assert_eq!(table.len(), BUILTIN_ASSETS.len());
        assert_eq!(table.len(), 10);
        assert!(table.iter().all(|e| e.url.scheme() == "https"));
    }

    #[test]
    fn test_builtin_table_keeps_declared_order() {
        let table = AssetTable::builtin().unwrap();
        let paths: Vec<_> = table.iter().map(|e| e.path.to_str().unwrap()).collect();
        let declared: Vec<_> = BUILTIN_ASSETS.iter().map(|(path, _)| *path).collect();
        assert_eq!(paths, declared);
    }

    #[test]
    fn test_builtin_parent_dirs() {
        let table = AssetTable::builtin().unwrap();
        assert_eq!(
            table.parent_dirs(Path::new("repo")),
            vec![
                PathBuf::from("repo/assets/sectional"),
                PathBuf::from("repo/assets/runway"),
                PathBuf::from("repo/assets"),
            ]
        );
    }
}
