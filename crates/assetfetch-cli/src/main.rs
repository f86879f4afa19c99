use assetfetch_lib::cli::{
    ResolvedCommand, parse_args, resolve_command, run_fetch, run_list, run_status,
};
use assetfetch_lib::error::AssetFetchError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AssetFetchError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Fetch(params) => {
            run_fetch(params).await?;
        }
        ResolvedCommand::Status(params) => {
            run_status(params)?;
        }
        ResolvedCommand::List(params) => run_list(params)?,
    }

    Ok(())
}
