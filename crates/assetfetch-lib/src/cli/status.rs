use crate::cli::{ListParams, StatusParams};
use crate::error::AssetFetchError;
use crate::inventory::{AssetState, InventoryReport, check_assets};
use crate::table::AssetTable;
use itertools::Itertools;
use std::io::Write;

pub fn render_inventory(report: &InventoryReport, json: bool) -> Result<String, AssetFetchError> {
    if json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let rows = report
        .assets
        .iter()
        .map(|asset| {
            let state = match asset.state {
                AssetState::Present { bytes } => format!("present ({bytes} bytes)"),
                AssetState::Empty => "empty".to_string(),
                AssetState::Missing => "missing".to_string(),
            };
            format!("{:<22} {}\n", state, asset.path.display())
        })
        .join("");

    Ok(format!(
        "{rows}{} of {} assets present\n",
        report.assets.len() - report.missing().count(),
        report.assets.len()
    ))
}

pub fn render_table(table: &AssetTable) -> String {
    table
        .iter()
        .map(|entry| format!("{} <- {}\n", entry.path.display(), entry.url))
        .join("")
}

pub fn run_status(params: StatusParams) -> Result<InventoryReport, AssetFetchError> {
    let StatusParams { table, root, json } = params;

    tracing::debug!("Checking assets under {}", root.display());
    let report = check_assets(&table, &root)?;

    let rendered = render_inventory(&report, json)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if json {
        writeln!(stdout)?;
    }
    Ok(report)
}

pub fn run_list(params: ListParams) -> Result<(), AssetFetchError> {
    let ListParams { table, root } = params;

    tracing::debug!("Asset root is {}", root.display());
    std::io::stdout()
        .lock()
        .write_all(render_table(&table).as_bytes())?;
    Ok(())
}
