//! Count TypeScript/JavaScript source files under a directory, grouped by
//! the top-level folder that contains them, and report the counts as JSON.

pub mod args;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod filesystem;
pub mod grouping;
pub mod logging;
pub mod presentation;
pub mod stats;

pub use config::Config;
pub use engine::run;
pub use error::{InventoryError, Result};
pub use stats::CountTable;
