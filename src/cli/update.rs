use std::io::Write;

use anyhow::Result;
use tracing::{info, instrument};

use crate::{
    error::MedusaError,
    storage::{dataset_storage::DatasetStorage, entities::Dataset},
    utils::{clock::Clock, time::date_to_record},
};

/// Finds the entry the user meant. An exact name always wins, otherwise the query has to be a
/// part of exactly one name. Matching is case sensitive.
pub fn resolve_entry_name(dataset: &Dataset, query: &str) -> Result<String, MedusaError> {
    if dataset.contains_key(query) {
        return Ok(query.to_string());
    }

    let mut candidates = dataset
        .keys()
        .filter(|name| name.contains(query))
        .cloned()
        .collect::<Vec<_>>();

    match candidates.len() {
        0 => Err(MedusaError::NotFound {
            query: query.to_string(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(MedusaError::Ambiguous {
            query: query.to_string(),
            candidates,
        }),
    }
}

/// Command to process `update` mode. Adds today's date to the history of the entry matching
/// `entry_name` and saves the whole dataset. Nothing is written unless the name resolves to
/// exactly one entry.
#[instrument(skip(storage, clock, out))]
pub async fn process_update_command(
    storage: &impl DatasetStorage,
    clock: &impl Clock,
    entry_name: Option<String>,
    out: &mut impl Write,
) -> Result<()> {
    let Some(query) = entry_name.filter(|v| !v.trim().is_empty()) else {
        return report_failure(out, &MedusaError::NoEntryName);
    };

    let mut dataset = storage.load().await?;

    let name = match resolve_entry_name(&dataset, &query) {
        Ok(name) => name,
        Err(e) if e.is_recoverable() => return report_failure(out, &e),
        Err(e) => return Err(e.into()),
    };

    let date = date_to_record(clock.today());
    let entry = dataset
        .get_mut(&name)
        .ok_or_else(|| MedusaError::NotFound {
            query: name.clone(),
        })?;
    entry.stats.push(date.clone());
    let update_number = entry.stats.len();

    storage.save(&dataset).await?;

    info!("Added update {update_number} on {date} to {name}");
    writeln!(out, "Updated \"{name}\": update {update_number} on {date}")?;
    Ok(())
}

fn report_failure(out: &mut impl Write, error: &MedusaError) -> Result<()> {
    match error {
        MedusaError::Ambiguous { query, candidates } => {
            writeln!(out, "\"{query}\" matches several entries:")?;
            for candidate in candidates {
                writeln!(out, "  {candidate}")?;
            }
        }
        _ => writeln!(out, "Error: {error}")?,
    }
    Ok(())
}
