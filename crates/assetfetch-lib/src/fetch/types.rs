use serde::Serialize;
use std::path::PathBuf;
use url::Url;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchOutcome {
    Downloaded { bytes: u64 },
    Failed { reason: String },
}

#[derive(Clone, Debug, Serialize)]
pub struct EntryReport {
    pub path: PathBuf,
    pub destination: PathBuf,
    pub url: Url,
    pub outcome: FetchOutcome,
}

impl EntryReport {
    pub fn is_downloaded(&self) -> bool {
        matches!(self.outcome, FetchOutcome::Downloaded { .. })
    }
}

/// Per-asset outcomes of one run, in table order.
#[derive(Clone, Debug, Default, Serialize)]
pub struct FetchReport {
    pub entries: Vec<EntryReport>,
}

impl FetchReport {
    pub fn downloaded(&self) -> impl Iterator<Item = &EntryReport> {
        self.entries.iter().filter(|e| e.is_downloaded())
    }

    pub fn failed(&self) -> impl Iterator<Item = &EntryReport> {
        self.entries.iter().filter(|e| !e.is_downloaded())
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(EntryReport::is_downloaded)
    }
}
