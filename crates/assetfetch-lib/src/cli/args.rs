use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub enum Command {
    Fetch {
        config_path: Option<String>,
        root: Option<String>,
        allow_failures: bool,
    },
    Status {
        config_path: Option<String>,
        root: Option<String>,
        json: bool,
    },
    List {
        config_path: Option<String>,
        root: Option<String>,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "assetfetch",
    version,
    about = "Download sectional chart symbols, runway marking diagrams and FAA reference guides into the local assets tree"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Loads the asset table from a YAML, TOML or JSON file instead of the built-in one",
        global = true
    )]
    config: Option<String>,

    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Directory that asset paths are relative to (default: config root, then the current directory)",
        global = true
    )]
    root: Option<String>,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Download every asset, replacing existing files (the default when no command is given)
    Fetch {
        #[arg(
            long = "allow-failures",
            help = "Exit successfully even if some assets could not be downloaded"
        )]
        allow_failures: bool,
    },

    /// Report which assets are present on disk
    Status {
        #[arg(long = "json", help = "Print the report as JSON")]
        json: bool,
    },

    /// Print the asset table
    List,
}

/// Installs the global fmt subscriber. Logs go to stderr; stdout is reserved for reports.
pub fn init_tracing(log_level: Level) {
    let mut filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();
    if let Ok(directive) = "hyper_util=info".parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    init_tracing(log_level);

    let Cli {
        config, root, command, ..
    } = cli;

    let command = match command.unwrap_or(CliCommand::Fetch {
        allow_failures: false,
    }) {
        CliCommand::Fetch { allow_failures } => Command::Fetch {
            config_path: config,
            root,
            allow_failures,
        },
        CliCommand::Status { json } => Command::Status {
            config_path: config,
            root,
            json,
        },
        CliCommand::List => Command::List {
            config_path: config,
            root,
        },
    };

    Args { command, log_level }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_accepted() {
        let cli = Cli::try_parse_from(["assetfetch"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["assetfetch", "status", "--json", "-r", "/srv/site", "-vv"])
                .unwrap();
        assert_eq!(cli.root.as_deref(), Some("/srv/site"));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(CliCommand::Status { json: true })));
    }
}
