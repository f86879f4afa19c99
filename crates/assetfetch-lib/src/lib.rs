pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod inventory;
pub mod table;

pub use crate::config::Config;
pub use crate::error::AssetFetchError;
pub use crate::table::{AssetEntry, AssetTable};
