use crate::domain::constants::{DATA_PATH_ENV, DEFAULT_DATA_PATH};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hafs-pages", version, about = "Look up Hafs mushaf verses by page")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = DATA_PATH_ENV,
        default_value = DEFAULT_DATA_PATH,
        help = "Path to the hafs_smart JSON dataset"
    )]
    pub data: PathBuf,
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,
    #[arg(
        allow_negative_numbers = true,
        help = "Page number to print (defaults to 2)"
    )]
    pub page: Option<i64>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parses argv, rejecting a top-level page combined with a subcommand.
    pub fn parse_args() -> Self {
        let cli = Self::parse();
        if cli.page.is_some() && cli.command.is_some() {
            Self::command()
                .error(
                    ErrorKind::ArgumentConflict,
                    "the [PAGE] argument cannot be used with a subcommand",
                )
                .exit();
        }
        cli
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every surah with the page it starts on.
    Surahs,
    /// List every juz with the page it starts on.
    Juzs,
    /// Summarize a single page.
    Info {
        #[arg(
            allow_negative_numbers = true,
            help = "Page number to summarize (defaults to 2)"
        )]
        page: Option<i64>,
    },
}
