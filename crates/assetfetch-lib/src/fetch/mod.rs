mod fetcher;
mod types;

pub use fetcher::{build_client, ensure_dirs, fetch_all, fetch_one};
pub use types::{EntryReport, FetchOutcome, FetchReport};
