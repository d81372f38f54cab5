// src/classify.rs
use std::ffi::OsStr;

/// Decides whether a filename belongs to the counted set.
///
/// Matching is a case-sensitive suffix test on the whole filename, so
/// `App.TS` is rejected while a bare `.ts` dotfile is accepted.
#[derive(Debug, Clone)]
pub struct Classifier {
    suffixes: Vec<String>,
}

impl Classifier {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, file_name: &OsStr) -> bool {
        let name = file_name.as_encoded_bytes();
        self.suffixes.iter().any(|s| name.ends_with(s.as_bytes()))
    }
}
