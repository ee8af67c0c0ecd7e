//! Command-line interface for docsense.

mod commands;

pub use commands::{is_verbose, run};
