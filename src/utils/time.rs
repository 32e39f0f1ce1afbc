use chrono::NaiveDate;

use crate::error::MedusaError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// This is the standard way of converting a date to a string in medusa.
pub fn date_to_record(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a date stored in an entry history.
pub fn record_to_date(value: &str) -> Result<NaiveDate, MedusaError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| MedusaError::Parse {
        value: value.to_string(),
    })
}
