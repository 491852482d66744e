//! Whole-snapshot algorithms
//!
//! Statistics computed over a complete hospital snapshot, and a generator
//! for synthetic snapshots.

pub mod statistics;
pub mod synthetic;

pub use statistics::{HospitalStatistics, HospitalStats};
pub use synthetic::{SyntheticConfig, generate};
