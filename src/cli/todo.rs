use std::io::Write;

use anyhow::Result;
use tracing::instrument;

use crate::{storage::dataset_storage::DatasetStorage, utils::clock::Clock};

use super::output::{analysis::todo_entries, table::format_todo};

/// Command to process `todo` mode. Lists entries that are still running, the ones that haven't
/// been updated for the longest time first.
#[instrument(skip(storage, clock, out))]
pub async fn process_todo_command(
    storage: &impl DatasetStorage,
    clock: &impl Clock,
    out: &mut impl Write,
) -> Result<()> {
    let dataset = storage.load().await?;
    let entries = todo_entries(&dataset, clock.today())?;

    for line in format_todo(&entries) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
