use chrono::{Local, NaiveDate};

/// Represents an entity responsible for providing the current date across the application.
/// Everything that depends on "today" takes a [Clock] so it can be fixed during testing.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
