use super::types::{EntryReport, FetchOutcome, FetchReport};
use crate::error::AssetFetchError;
use crate::table::AssetTable;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use url::Url;

const USER_AGENT: &str = concat!("assetfetch/", env!("CARGO_PKG_VERSION"));

/// One client per run. Redirects and timeouts are left at the transport defaults.
pub fn build_client() -> Result<Client, AssetFetchError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(Into::into)
}

/// Creates every parent directory the table writes into. Existing directories are left alone.
pub fn ensure_dirs(table: &AssetTable, root: &Path) -> Result<Vec<PathBuf>, AssetFetchError> {
    let dirs = table.parent_dirs(root);
    for dir in &dirs {
        std::fs::create_dir_all(dir).map_err(|e| AssetFetchError::DirectoryCreation {
            path: dir.clone(),
            reason: e.to_string(),
        })?;
        tracing::debug!(dir = %dir.display(), "Asset directory ready");
    }
    Ok(dirs)
}

fn error_chain(err: reqwest::Error) -> String {
    format!("{:#}", eyre::Report::new(err))
}

/// Downloads `url` into `destination`, replacing whatever is there. Returns the bytes written.
///
/// The destination is only truncated once the server has answered with a success status. A
/// transfer that breaks off midway leaves the partial file behind.
pub async fn fetch_one(
    client: &Client,
    url: &Url,
    destination: &Path,
) -> Result<u64, AssetFetchError> {
    let retrieval_error = |e: reqwest::Error| AssetFetchError::Retrieval {
        url: url.to_string(),
        reason: error_chain(e),
    };
    let write_error = |e: std::io::Error| AssetFetchError::Write {
        path: destination.to_path_buf(),
        reason: e.to_string(),
    };

    let mut response = client
        .get(url.clone())
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(retrieval_error)?;

    let file = tokio::fs::File::create(destination)
        .await
        .map_err(write_error)?;
    let mut writer = tokio::io::BufWriter::new(file);

    let mut written = 0u64;
    while let Some(chunk) = response.chunk().await.map_err(retrieval_error)? {
        writer.write_all(&chunk).await.map_err(write_error)?;
        written += chunk.len() as u64;
    }
    writer.flush().await.map_err(write_error)?;

    Ok(written)
}

/// Ensures the directory tree, then fetches every asset in table order.
///
/// Only directory creation is fatal. A failed asset is logged and recorded in the report and
/// the loop moves on to the next one.
pub async fn fetch_all(
    client: &Client,
    table: &AssetTable,
    root: &Path,
) -> Result<FetchReport, AssetFetchError> {
    ensure_dirs(table, root)?;

    let mut report = FetchReport::default();
    for entry in table.iter() {
        let destination = entry.destination(root);
        tracing::info!(url = %entry.url, destination = %destination.display(), "Downloading");

        let outcome = match fetch_one(client, &entry.url, &destination).await {
            Ok(bytes) => {
                tracing::debug!(url = %entry.url, bytes, "Downloaded");
                FetchOutcome::Downloaded { bytes }
            }
            Err(err) => {
                tracing::warn!(url = %entry.url, error = %err, "Failed to download");
                FetchOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        };

        report.entries.push(EntryReport {
            path: entry.path.clone(),
            destination,
            url: entry.url.clone(),
            outcome,
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_names_the_tool() {
        assert_eq!(
            USER_AGENT,
            format!("assetfetch/{}", env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn test_build_client() {
        assert!(build_client().is_ok());
    }
}
