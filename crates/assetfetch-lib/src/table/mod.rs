mod builtin;
mod model;

pub use builtin::BUILTIN_ASSETS;
pub use model::{AssetEntry, AssetTable};
