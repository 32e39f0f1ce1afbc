//! Small cli for keeping track of serialized works. It remembers when every entry got updated,
//! shows statistics of the gaps between updates and which entries are the most overdue.
//!

pub mod cli;
pub mod error;
pub mod storage;
pub mod utils;
