// src/args.rs
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "inventory_ts",
    version,
    about = "Count TypeScript/JavaScript files under a directory, grouped by top-level folder"
)]
pub struct Args {
    /// Directory to scan
    #[arg(value_name = "path-to-src", value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Disable logging entirely
    #[arg(short, long)]
    pub quiet: bool,
}
