//! Utility functions shared by the loaders and the command line tool.

pub mod logging;
