//! Turns the stored dataset into reports. [analysis] derives numbers from update histories,
//! [table] renders them as text.

pub mod analysis;
pub mod intervals;
pub mod table;
