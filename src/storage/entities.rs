use std::{collections::BTreeMap, fmt::Display};

use serde::{ser::Error, Deserialize, Serialize, Serializer};
use serde_json::{Map, Number, Value};

/// All tracked entries keyed by their name. Kept ordered so that reports and the saved file are
/// stable between runs.
pub type Dataset = BTreeMap<String, EntryEntity>;

/// Known final amount of parts. Stored either as any JSON number or as free text ("~40", "12?").
/// Only ever displayed, so numbers are kept exactly as they were written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TotalParts {
    Count(Number),
    Text(String),
}

impl Display for TotalParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TotalParts::Count(v) => write!(f, "{v}"),
            TotalParts::Text(v) => write!(f, "{v}"),
        }
    }
}

/// The struct used for storing an entry on the disk. It is written with all keys, known and
/// unknown, in sorted order. See the [Serialize] implementation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntryEntity {
    pub complete: bool,
    pub hiatus: bool,
    /// Dates of updates, oldest first.
    pub stats: Vec<String>,
    #[serde(rename = "total parts", default)]
    pub total_parts: Option<TotalParts>,
    /// Keys medusa doesn't know about. They are carried through so that saving never loses data.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Known fields of [EntryEntity], borrowed for writing.
#[derive(Serialize)]
struct KnownFields<'a> {
    complete: bool,
    hiatus: bool,
    stats: &'a [String],
    #[serde(rename = "total parts", skip_serializing_if = "Option::is_none")]
    total_parts: Option<&'a TotalParts>,
}

impl Serialize for EntryEntity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let known = serde_json::to_value(KnownFields {
            complete: self.complete,
            hiatus: self.hiatus,
            stats: &self.stats,
            total_parts: self.total_parts.as_ref(),
        })
        .map_err(S::Error::custom)?;

        // Map is ordered by key, so unknown keys end up between the known ones where they belong.
        let mut fields = self.extra.clone();
        if let Value::Object(known) = known {
            fields.extend(known);
        }
        fields.serialize(serializer)
    }
}

impl EntryEntity {
    pub fn new(stats: Vec<String>) -> Self {
        Self {
            complete: false,
            hiatus: false,
            stats,
            total_parts: None,
            extra: Map::new(),
        }
    }

    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete = complete;
        self
    }

    pub fn with_hiatus(mut self, hiatus: bool) -> Self {
        self.hiatus = hiatus;
        self
    }

    pub fn with_total_parts(mut self, total_parts: TotalParts) -> Self {
        self.total_parts = Some(total_parts);
        self
    }

    /// Entries that are finished or paused don't need attention.
    pub fn is_active(&self) -> bool {
        !self.complete && !self.hiatus
    }
}
