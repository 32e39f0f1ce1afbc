use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MedusaError {
    #[error("can't parse date \"{value}\", expected YYYY-MM-DD")]
    Parse { value: String },

    #[error("entry \"{name}\" has no recorded updates")]
    EmptyHistory { name: String },

    #[error("no entries to show")]
    NoData,

    #[error("no entry name given")]
    NoEntryName,

    #[error("no entry matching \"{query}\"")]
    NotFound { query: String },

    #[error("\"{query}\" matches several entries: {}", candidates.join(", "))]
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },
}

impl MedusaError {
    /// Errors that are reported to the user without failing the process.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NoEntryName | Self::NotFound { .. } | Self::Ambiguous { .. }
        )
    }
}
