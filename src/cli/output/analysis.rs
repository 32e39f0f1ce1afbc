use std::{cmp::Ordering, fmt::Display};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;

use crate::storage::entities::{Dataset, TotalParts};

use super::intervals::generate_intervals;

/// Interval statistics of one entry, in days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySummary {
    pub name: String,
    pub current: i64,
    pub mean: i64,
    pub median: i64,
    pub max: i64,
    pub min: i64,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Cur,
    Mean,
    Med,
    Max,
    Min,
}

impl Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortColumn::Name => write!(f, "name"),
            SortColumn::Cur => write!(f, "cur"),
            SortColumn::Mean => write!(f, "mean"),
            SortColumn::Med => write!(f, "med"),
            SortColumn::Max => write!(f, "max"),
            SortColumn::Min => write!(f, "min"),
        }
    }
}

impl SortColumn {
    fn compare(&self, a: &EntrySummary, b: &EntrySummary) -> Ordering {
        match self {
            SortColumn::Name => a.name.cmp(&b.name),
            SortColumn::Cur => a.current.cmp(&b.current),
            SortColumn::Mean => a.mean.cmp(&b.mean),
            SortColumn::Med => a.median.cmp(&b.median),
            SortColumn::Max => a.max.cmp(&b.max),
            SortColumn::Min => a.min.cmp(&b.min),
        }
    }
}

/// Returns a summary for every entry ordered by name. A single broken entry fails the whole
/// report.
pub fn summarize_entries(dataset: &Dataset, today: NaiveDate) -> Result<Vec<EntrySummary>> {
    dataset
        .iter()
        .map(|(name, entry)| -> Result<EntrySummary> {
            let intervals = generate_intervals(name, &entry.stats, today)
                .with_context(|| format!("Failed to analyze entry \"{name}\""))?;
            Ok(summarize(name, &intervals))
        })
        .collect()
}

/// `intervals` must not be empty.
fn summarize(name: &str, intervals: &[i64]) -> EntrySummary {
    let mut sorted = intervals.to_vec();
    sorted.sort_unstable();

    let len = sorted.len();
    let mean = sorted.iter().sum::<i64>() as f64 / len as f64;
    let median = if len % 2 == 1 {
        sorted[len / 2] as f64
    } else {
        (sorted[len / 2 - 1] + sorted[len / 2]) as f64 / 2.
    };

    EntrySummary {
        name: name.to_string(),
        current: intervals[intervals.len() - 1],
        // Ties go to the even neighbour: 2.5 becomes 2, 3.5 becomes 4.
        mean: mean.round_ties_even() as i64,
        median: median.round_ties_even() as i64,
        max: sorted[len - 1],
        min: sorted[0],
    }
}

/// Stable, so entries that tie keep their name order in both directions.
pub fn sort_summaries(summaries: &mut [EntrySummary], column: SortColumn, reverse: bool) {
    if reverse {
        summaries.sort_by(|a, b| column.compare(b, a));
    } else {
        summaries.sort_by(|a, b| column.compare(a, b));
    }
}

/// An entry that is still waiting for updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoEntry {
    pub name: String,
    /// Number the next update is going to have.
    pub next_update: usize,
    pub current: i64,
    pub total_parts: Option<TotalParts>,
}

/// Returns all entries that aren't complete or in hiatus, the longest waiting first.
pub fn todo_entries(dataset: &Dataset, today: NaiveDate) -> Result<Vec<TodoEntry>> {
    let mut entries = dataset
        .iter()
        .filter(|(_, entry)| entry.is_active())
        .map(|(name, entry)| -> Result<TodoEntry> {
            let intervals = generate_intervals(name, &entry.stats, today)
                .with_context(|| format!("Failed to analyze entry \"{name}\""))?;
            Ok(TodoEntry {
                name: name.clone(),
                next_update: entry.stats.len() + 1,
                current: intervals[intervals.len() - 1],
                total_parts: entry.total_parts.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    entries.sort_by(|a, b| b.current.cmp(&a.current));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use chrono::NaiveDate;

    use crate::{
        error::MedusaError,
        storage::entities::{Dataset, EntryEntity, TotalParts},
    };

    use super::{
        sort_summaries, summarize, summarize_entries, todo_entries, EntrySummary, SortColumn,
    };

    const TODAY: NaiveDate = NaiveDate::from_ymd_opt(2020, 1, 20).unwrap();

    fn entry(stats: &[&str]) -> EntryEntity {
        EntryEntity::new(stats.iter().map(|v| v.to_string()).collect())
    }

    fn summary(name: &str, values: [i64; 5]) -> EntrySummary {
        let [current, mean, median, max, min] = values;
        EntrySummary {
            name: name.into(),
            current,
            mean,
            median,
            max,
            min,
        }
    }

    #[test]
    fn test_summary_of_two_updates() -> Result<()> {
        let mut dataset = Dataset::new();
        dataset.insert("Foo".into(), entry(&["2020-01-01", "2020-01-10"]));

        let summaries = summarize_entries(&dataset, TODAY)?;
        assert_eq!(summaries, vec![summary("Foo", [10, 10, 10, 10, 9])]);
        Ok(())
    }

    #[test]
    fn test_rounding_is_half_to_even() {
        // mean 2.5, median 2.5
        assert_eq!(summarize("a", &[1, 2, 3, 4]), summary("a", [4, 2, 2, 4, 1]));
        // mean 3.5, median 3.5
        assert_eq!(summarize("b", &[2, 3, 4, 5]), summary("b", [5, 4, 4, 5, 2]));
        // mean 10/3
        assert_eq!(summarize("c", &[1, 2, 7]), summary("c", [7, 3, 2, 7, 1]));
    }

    #[test]
    fn test_summary_bounds() -> Result<()> {
        let mut dataset = Dataset::new();
        dataset.insert("a".into(), entry(&["2019-01-01", "2019-01-02", "2019-12-01"]));
        dataset.insert("b".into(), entry(&["2020-01-20"]));
        dataset.insert("c".into(), entry(&["2019-06-01", "2020-01-19"]));

        for s in summarize_entries(&dataset, TODAY)? {
            for value in [s.current, s.mean, s.median] {
                assert!(s.min <= value && value <= s.max, "{s:?}");
            }
        }
        Ok(())
    }

    #[test]
    fn test_summaries_are_ordered_by_name() -> Result<()> {
        let mut dataset = Dataset::new();
        dataset.insert("b".into(), entry(&["2020-01-01"]));
        dataset.insert("a".into(), entry(&["2020-01-01"]));
        dataset.insert("c".into(), entry(&["2020-01-01"]));

        let names = summarize_entries(&dataset, TODAY)?
            .into_iter()
            .map(|v| v.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["a", "b", "c"]);
        Ok(())
    }

    #[test]
    fn test_broken_entry_fails_whole_report() {
        let mut dataset = Dataset::new();
        dataset.insert("Good".into(), entry(&["2020-01-01"]));
        dataset.insert("Empty".into(), entry(&[]));

        let error = summarize_entries(&dataset, TODAY).unwrap_err();
        assert!(error.to_string().contains("Empty"));
        assert_eq!(
            error.downcast_ref::<MedusaError>(),
            Some(&MedusaError::EmptyHistory {
                name: "Empty".into()
            })
        );
    }

    #[test]
    fn test_sort_by_column() {
        let mut summaries = vec![
            summary("a", [5, 1, 1, 9, 0]),
            summary("b", [1, 1, 1, 9, 0]),
            summary("c", [3, 2, 1, 9, 0]),
        ];

        sort_summaries(&mut summaries, SortColumn::Cur, false);
        let names = summaries.iter().map(|v| v.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["b", "c", "a"]);

        sort_summaries(&mut summaries, SortColumn::Name, true);
        let names = summaries.iter().map(|v| v.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_sort_keeps_ties_in_order() {
        let mut summaries = vec![
            summary("a", [5, 1, 1, 9, 0]),
            summary("b", [1, 2, 1, 9, 0]),
            summary("c", [3, 1, 1, 9, 0]),
        ];

        sort_summaries(&mut summaries, SortColumn::Mean, true);
        let names = summaries.iter().map(|v| v.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_todo_skips_complete_and_hiatus() -> Result<()> {
        let mut dataset = Dataset::new();
        dataset.insert("Done".into(), entry(&["2019-01-01"]).with_complete(true));
        dataset.insert("Paused".into(), entry(&["2019-01-01"]).with_hiatus(true));
        dataset.insert("Fresh".into(), entry(&["2020-01-19"]));
        dataset.insert(
            "Stale".into(),
            entry(&["2019-12-01", "2019-12-20"]).with_total_parts(TotalParts::Count(10.into())),
        );

        let todo = todo_entries(&dataset, TODAY)?;
        let names = todo.iter().map(|v| v.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Stale", "Fresh"]);
        assert_eq!(todo[0].next_update, 3);
        assert_eq!(todo[0].current, 31);
        assert_eq!(todo[0].total_parts, Some(TotalParts::Count(10.into())));
        assert_eq!(todo[1].next_update, 2);
        assert_eq!(todo[1].current, 1);
        Ok(())
    }

    #[test]
    fn test_todo_is_sorted_by_staleness() -> Result<()> {
        let mut dataset = Dataset::new();
        for (name, date) in [
            ("a", "2020-01-15"),
            ("b", "2019-10-01"),
            ("c", "2020-01-15"),
            ("d", "2020-01-01"),
        ] {
            dataset.insert(name.into(), entry(&[date]));
        }

        let todo = todo_entries(&dataset, TODAY)?;
        assert!(todo.windows(2).all(|v| v[0].current >= v[1].current));
        let names = todo.iter().map(|v| v.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
        Ok(())
    }

    #[test]
    fn test_todo_with_nothing_to_do() -> Result<()> {
        let mut dataset = Dataset::new();
        dataset.insert("Done".into(), entry(&["2019-01-01"]).with_complete(true));
        assert!(todo_entries(&dataset, TODAY)?.is_empty());
        Ok(())
    }
}
