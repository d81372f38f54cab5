// src/config.rs
use crate::args::Args;
use std::path::PathBuf;

/// Filename suffixes counted by default.
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".ts", ".tsx", ".js", ".jsx"];

/// Settings for a single scan.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    /// Case-sensitive filename suffixes, leading dot included.
    pub extensions: Vec<String>,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl TryFrom<Args> for Config {
    type Error = MissingRoot;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        args.root.map(Self::new).ok_or(MissingRoot)
    }
}

/// Returned when no root directory was given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingRoot;
