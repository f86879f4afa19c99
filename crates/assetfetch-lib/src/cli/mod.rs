mod args;
mod fetch;
mod params;
mod resolved_command;
mod status;

pub use args::{Args, Command, init_tracing, parse_args};
pub use fetch::run_fetch;
pub use params::{FetchParams, ListParams, StatusParams};
pub use resolved_command::{ResolvedCommand, resolve_command};
pub use status::{render_inventory, render_table, run_list, run_status};
