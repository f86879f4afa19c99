use crate::table::AssetTable;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FetchParams {
    pub table: AssetTable,
    pub root: PathBuf,
    pub allow_failures: bool,
}

#[derive(Debug, Clone)]
pub struct StatusParams {
    pub table: AssetTable,
    pub root: PathBuf,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct ListParams {
    pub table: AssetTable,
    pub root: PathBuf,
}
