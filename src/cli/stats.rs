use std::io::Write;

use anyhow::Result;
use tracing::instrument;

use crate::{
    storage::dataset_storage::DatasetStorage,
    utils::clock::Clock,
};

use super::output::{
    analysis::{sort_summaries, summarize_entries, SortColumn},
    table::format_stats,
};

#[derive(Debug, Clone, Copy)]
pub struct StatsOptions {
    pub sort_by: SortColumn,
    pub reverse: bool,
}

/// Command to process `stats` mode. Prints interval statistics of every entry as a table.
#[instrument(skip(storage, clock, out))]
pub async fn process_stats_command(
    storage: &impl DatasetStorage,
    clock: &impl Clock,
    options: StatsOptions,
    out: &mut impl Write,
) -> Result<()> {
    let dataset = storage.load().await?;
    let mut summaries = summarize_entries(&dataset, clock.today())?;
    sort_summaries(&mut summaries, options.sort_by, options.reverse);

    for line in format_stats(&summaries)? {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
