use chrono::NaiveDate;
use tracing::warn;

use crate::{error::MedusaError, utils::time::record_to_date};

/// Returns all intervals in days between updates of one entry, including the time elapsed since
/// the last update. There is exactly one interval per recorded date.
pub fn generate_intervals(
    name: &str,
    stats: &[String],
    today: NaiveDate,
) -> Result<Vec<i64>, MedusaError> {
    if stats.is_empty() {
        return Err(MedusaError::EmptyHistory {
            name: name.to_string(),
        });
    }

    let mut dates = stats
        .iter()
        .map(|v| record_to_date(v))
        .collect::<Result<Vec<_>, _>>()?;
    dates.push(today);

    let intervals = dates
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_days())
        .collect::<Vec<_>>();

    if intervals.iter().any(|v| *v < 0) {
        // Happens when dates were entered out of order or in the future.
        warn!("Entry {name} has negative intervals {intervals:?}");
    }

    Ok(intervals)
}
