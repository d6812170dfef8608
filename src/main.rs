//! `opn`: open anything by a name you choose.

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use commands::ConfigAction;

#[derive(Parser)]
#[command(
    name = "opn",
    version,
    about = "Quickly open any file, folder or app using whatever name you see fit",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Alias to open
    #[arg(value_name = "ALIAS")]
    alias: Option<String>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the target saved under an alias
    #[command(visible_alias = "o")]
    Open {
        #[arg(value_name = "ALIAS")]
        alias: Option<String>,
    },

    /// Save a new alias for a path or app
    #[command(visible_alias = "a")]
    Add {
        #[arg(value_name = "ALIAS")]
        alias: Option<String>,
        #[arg(value_name = "PATH")]
        path: Option<String>,
    },

    /// List saved aliases
    #[command(visible_alias = "l")]
    List {
        /// Show each alias with its target
        #[arg(short, long)]
        long: bool,
    },

    /// Manage opn settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        None => commands::cmd_open(cli.alias.as_deref()),
        Some(Commands::Open { alias }) => commands::cmd_open(alias.as_deref()),
        Some(Commands::Add { alias, path }) => {
            commands::cmd_add(alias.as_deref(), path.as_deref())
        }
        Some(Commands::List { long }) => commands::cmd_list(long),
        Some(Commands::Config { action }) => commands::cmd_config(action),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .format_timestamp(None)
        .init();
}
