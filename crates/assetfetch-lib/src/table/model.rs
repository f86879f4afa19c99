use crate::error::AssetFetchError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use url::Url;

/// A single asset: where it lands (relative to the asset root) and where it comes from.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AssetEntry {
    pub path: PathBuf,
    pub url: Url,
}

impl AssetEntry {
    pub fn destination(&self, root: &Path) -> PathBuf {
        root.join(&self.path)
    }

    fn validate(&self) -> Result<(), AssetFetchError> {
        if self.path.file_name().is_none() {
            return Err(AssetFetchError::InvalidAssetTable {
                details: format!("destination {:?} does not name a file", self.path),
            });
        }

        if self
            .path
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(AssetFetchError::InvalidAssetTable {
                details: format!(
                    "destination {} must be relative to the asset root and must not contain '.' or '..'",
                    self.path.display()
                ),
            });
        }

        if !matches!(self.url.scheme(), "http" | "https") {
            return Err(AssetFetchError::InvalidAssetTable {
                details: format!(
                    "source {} for {} must use http or https",
                    self.url,
                    self.path.display()
                ),
            });
        }

        Ok(())
    }
}

/// Ordered, validated list of assets. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetTable {
    entries: Vec<AssetEntry>,
}

impl AssetTable {
    pub fn new(entries: Vec<AssetEntry>) -> Result<Self, AssetFetchError> {
        if entries.is_empty() {
            return Err(AssetFetchError::InvalidAssetTable {
                details: "no assets defined".to_string(),
            });
        }

        for entry in &entries {
            entry.validate()?;
        }

        let duplicates = entries.iter().map(|e| &e.path).duplicates().collect_vec();
        if !duplicates.is_empty() {
            return Err(AssetFetchError::InvalidAssetTable {
                details: format!(
                    "duplicate destination paths: {}",
                    duplicates.iter().map(|p| p.display()).join(", ")
                ),
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[AssetEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct parent directories of every destination, in first-appearance order.
    pub fn parent_dirs(&self, root: &Path) -> Vec<PathBuf> {
        self.entries
            .iter()
            .filter_map(|e| e.destination(root).parent().map(Path::to_path_buf))
            .unique()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, url: &str) -> AssetEntry {
        AssetEntry {
            path: PathBuf::from(path),
            url: Url::parse(url).unwrap(),
        }
    }

    #[test]
    fn test_new_accepts_shared_parent_directories() {
        let table = AssetTable::new(vec![
            entry("assets/runway/threshold.svg", "https://example.org/a.svg"),
            entry("assets/runway/hold-short.svg", "https://example.org/b.svg"),
        ])
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.parent_dirs(Path::new("/srv")),
            vec![PathBuf::from("/srv/assets/runway")]
        );
    }

    #[test]
    fn test_new_rejects_duplicate_destinations() {
        let err = AssetTable::new(vec![
            entry("assets/vor.svg", "https://example.org/a.svg"),
            entry("assets/vor.svg", "https://example.org/b.svg"),
        ])
        .unwrap_err();

        assert!(
            matches!(&err, AssetFetchError::InvalidAssetTable { details } if details.contains("assets/vor.svg")),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_new_rejects_dot_prefixed_alias_of_existing_destination() {
        let result = AssetTable::new(vec![
            entry("assets/vor.svg", "https://example.org/a.svg"),
            entry("./assets/vor.svg", "https://example.org/b.svg"),
        ]);

        assert!(
            matches!(&result, Err(AssetFetchError::InvalidAssetTable { details }) if details.contains("./assets/vor.svg")),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn test_new_rejects_current_dir_components() {
        for path in ["./vor.svg", "./assets/runway/threshold.svg"] {
            let result = AssetTable::new(vec![entry(path, "https://example.org/a.svg")]);
            assert!(
                matches!(result, Err(AssetFetchError::InvalidAssetTable { .. })),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn test_new_rejects_escaping_destinations() {
        for path in ["../outside.svg", "/etc/passwd", "assets/../../x.svg"] {
            let result = AssetTable::new(vec![entry(path, "https://example.org/a.svg")]);
            assert!(
                matches!(result, Err(AssetFetchError::InvalidAssetTable { .. })),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn test_new_rejects_non_http_sources() {
        let result = AssetTable::new(vec![entry("assets/a.pdf", "ftp://example.org/a.pdf")]);
        assert!(matches!(
            result,
            Err(AssetFetchError::InvalidAssetTable { .. })
        ));
    }

    #[test]
    fn test_new_rejects_empty_table() {
        assert!(matches!(
            AssetTable::new(Vec::new()),
            Err(AssetFetchError::InvalidAssetTable { .. })
        ));
    }

    #[test]
    fn test_entry_deserializes_from_json() {
        let entry: AssetEntry = serde_json::from_str(
            r#"{"path": "assets/sectional/vor.svg", "url": "https://example.org/vor.svg"}"#,
        )
        .unwrap();

        assert_eq!(entry.path, PathBuf::from("assets/sectional/vor.svg"));
        assert_eq!(entry.url.host_str(), Some("example.org"));
    }
}
