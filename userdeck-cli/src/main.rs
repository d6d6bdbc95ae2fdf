mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;

use commands::{add, delete, edit, list};
use user_service::{logging, AppConfig, HttpUserRepository};

/// Browse and manage users behind a REST API
#[derive(Parser, Debug)]
#[command(name = "userdeck", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Base URL of the users API (overrides config and USERDECK_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Config file (default: ~/.userdeck/config.yaml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log requests to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive user table (default)
    Tui,
    List(list::ListArgs),
    Add(add::AddArgs),
    Edit(edit::EditArgs),
    Delete(delete::DeleteArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?.with_api_url(cli.api_url)?;

    let command = cli.command.unwrap_or(Command::Tui);
    if let Command::Tui = command {
        let _guard = logging::init_file_logging(&config)?;
        return userdeck_tui::run(&config).await;
    }

    if cli.verbose || std::env::var_os("RUST_LOG").is_some() {
        if cli.verbose {
            config.log_level = "debug".to_string();
        }
        logging::init_stderr_logging(&config)?;
    }

    tracing::debug!(?command, api_url = %config.api_url, "Running command");
    let repo = HttpUserRepository::new(&config)?;
    let result = match command {
        Command::Tui => Ok(()),
        Command::List(args) => list::execute(args, &repo).await,
        Command::Add(args) => add::execute(args, &repo).await,
        Command::Edit(args) => edit::execute(args, &repo).await,
        Command::Delete(args) => delete::execute(args, &repo).await,
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["userdeck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_list_flags() {
        let cli = Cli::try_parse_from(["userdeck", "list", "-s", "ann", "--page", "2"]).unwrap();
        match cli.command {
            Some(Command::List(args)) => {
                assert_eq!(args.search.as_deref(), Some("ann"));
                assert_eq!(args.page, 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_page_zero_rejected() {
        assert!(Cli::try_parse_from(["userdeck", "list", "--page", "0"]).is_err());
    }

    #[test]
    fn test_global_api_url_after_subcommand() {
        let cli = Cli::try_parse_from([
            "userdeck", "delete", "3", "--yes", "--api-url", "http://x",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://x"));
        assert!(matches!(cli.command, Some(Command::Delete(ref d)) if d.id == 3 && d.yes));
    }
}
