use crate::cli::args::Command;
use crate::cli::params::{FetchParams, ListParams, StatusParams};
use crate::config::{load_config, resolve_root};
use crate::error::AssetFetchError;
use crate::table::AssetTable;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Fetch(FetchParams),
    Status(StatusParams),
    List(ListParams),
}

fn resolve_assets(
    config_path: Option<String>,
    root: Option<String>,
) -> Result<(AssetTable, PathBuf), AssetFetchError> {
    let (table, config_root) = match config_path {
        Some(config_path) => {
            tracing::debug!("Loading asset table from {}", config_path);
            let mut app_config = load_config(Path::new(&config_path))?;
            let config_root = app_config.root.take();
            (app_config.into_table()?, config_root)
        }
        None => (AssetTable::builtin()?, None),
    };

    let root = resolve_root(root.map(PathBuf::from), config_root)?;
    if root.exists() && !root.is_dir() {
        return Err(AssetFetchError::CliArgumentValidation {
            details: format!("Asset root {} is not a directory.", root.display()),
        });
    }

    Ok((table, root))
}

pub fn resolve_command(command: Command) -> Result<ResolvedCommand, AssetFetchError> {
    match command {
        Command::Fetch {
            config_path,
            root,
            allow_failures,
        } => {
            let (table, root) = resolve_assets(config_path, root)?;
            Ok(ResolvedCommand::Fetch(FetchParams {
                table,
                root,
                allow_failures,
            }))
        }
        Command::Status {
            config_path,
            root,
            json,
        } => {
            let (table, root) = resolve_assets(config_path, root)?;
            Ok(ResolvedCommand::Status(StatusParams { table, root, json }))
        }
        Command::List { config_path, root } => {
            let (table, root) = resolve_assets(config_path, root)?;
            Ok(ResolvedCommand::List(ListParams { table, root }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_builtin_table() {
        let temp_dir = tempfile::tempdir().unwrap();
        let command = Command::List {
            config_path: None,
            root: Some(temp_dir.path().to_string_lossy().into_owned()),
        };

        let ResolvedCommand::List(params) = resolve_command(command).unwrap() else {
            panic!("expected list params");
        };
        assert_eq!(params.table, AssetTable::builtin().unwrap());
        assert_eq!(params.root, temp_dir.path());
    }

    #[test]
    fn test_rejects_file_as_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("not-a-dir");
        std::fs::write(&file_path, b"x").unwrap();

        let command = Command::Fetch {
            config_path: None,
            root: Some(file_path.to_string_lossy().into_owned()),
            allow_failures: false,
        };
        assert!(matches!(
            resolve_command(command),
            Err(AssetFetchError::CliArgumentValidation { .. })
        ));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let command = Command::Status {
            config_path: Some(
                temp_dir
                    .path()
                    .join("absent.yaml")
                    .to_string_lossy()
                    .into_owned(),
            ),
            root: None,
            json: false,
        };
        assert!(matches!(
            resolve_command(command),
            Err(AssetFetchError::Config(_))
        ));
    }
}
