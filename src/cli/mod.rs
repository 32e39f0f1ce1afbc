pub mod output;
pub mod stats;
pub mod todo;
pub mod update;

use std::{fmt::Display, io, path::PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use output::analysis::SortColumn;
use stats::{process_stats_command, StatsOptions};
use todo::process_todo_command;
use tracing::{debug, level_filters::LevelFilter};
use update::process_update_command;

use crate::{
    storage::dataset_storage::JsonDatasetStorage,
    utils::{
        clock::DefaultClock,
        dir::{default_data_path, default_state_dir},
        logging::{enable_logging, CLI_PREFIX},
    },
};

#[derive(Parser, Debug)]
#[command(name = "medusa", version, long_about = None)]
#[command(about = "Track when serialized works get updated and which ones are overdue")]
struct Args {
    #[arg(value_enum, help = "What to do")]
    mode: Mode,
    #[arg(help = "Entry to update. Either the full name or a unique part of it")]
    entryname: Option<String>,
    #[arg(
        short = 's',
        long = "sort-stats",
        default_value_t = SortColumn::Name,
        help = "Column to sort the stats table by"
    )]
    sort_stats: SortColumn,
    #[arg(short, long, help = "Reverse the order of the stats table")]
    reverse: bool,
    #[arg(
        long,
        env = "MEDUSA_DATA",
        help = "Data file. By default medusadata.json in $XDG_DATA_HOME/medusa or $HOME/.local/share/medusa"
    )]
    data: Option<PathBuf>,
    #[arg(long, help = "Enable logging")]
    log: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    #[value(help = "Show interval statistics of every entry")]
    Stats,
    #[value(help = "Show running entries, the most overdue first")]
    Todo,
    #[value(help = "Record an update for an entry today")]
    Update,
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Stats => write!(f, "stats"),
            Mode::Todo => write!(f, "todo"),
            Mode::Update => write!(f, "update"),
        }
    }
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    let state_dir = default_state_dir().ok();
    enable_logging(CLI_PREFIX, state_dir.as_deref(), logging_level, args.log)?;

    let data_path = args.data.map_or_else(default_data_path, Ok)?;
    debug!("Running {} with {data_path:?}", args.mode);

    let storage = JsonDatasetStorage::new(data_path);
    let clock = DefaultClock;
    let mut out = io::stdout().lock();

    match args.mode {
        Mode::Stats => {
            let options = StatsOptions {
                sort_by: args.sort_stats,
                reverse: args.reverse,
            };
            process_stats_command(&storage, &clock, options, &mut out).await
        }
        Mode::Todo => process_todo_command(&storage, &clock, &mut out).await,
        Mode::Update => process_update_command(&storage, &clock, args.entryname, &mut out).await,
    }
}
