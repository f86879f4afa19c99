use crate::cli::FetchParams;
use crate::error::AssetFetchError;
use crate::fetch::{FetchReport, build_client, fetch_all};

pub async fn run_fetch(params: FetchParams) -> Result<FetchReport, AssetFetchError> {
    let FetchParams {
        table,
        root,
        allow_failures,
    } = params;

    tracing::info!(
        "Fetching {} assets into {}",
        table.len(),
        root.display()
    );

    let client = build_client()?;
    let report = fetch_all(&client, &table, &root).await?;

    let failed = report.failed().count();
    if failed == 0 {
        tracing::info!("All {} assets downloaded", report.total());
        return Ok(report);
    }

    tracing::warn!(
        "{} of {} assets could not be downloaded; consumers fall back to their built-in symbols for those",
        failed,
        report.total()
    );

    if allow_failures {
        Ok(report)
    } else {
        Err(AssetFetchError::FetchIncomplete {
            failed,
            total: report.total(),
        })
    }
}
