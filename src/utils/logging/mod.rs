//! Log lines for load steps, indicatif progress, and console printing of
//! query results.

pub mod console;
pub mod log;
pub mod progress;

pub use self::log::{LoadStep, log_skipped_input};
pub use self::progress::{create_progress_bar, create_spinner, finish_progress_bar};
