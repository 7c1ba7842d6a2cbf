use derive_getters::{Dissolve, Getters};

use super::anchors::Anchor;
use super::error::{Error, Result};

/// Tunables of the global aligner
#[derive(Clone, PartialEq, Eq, Debug, Dissolve, Getters)]
pub struct Config {
    /// Number of cut rows per divide-and-conquer section. One cut bisects every section.
    cuts_per_section: usize,
    /// Forced query/target pairs, see [`Anchor`]
    anchors: Vec<Anchor>,
    /// Worker threads: 0 runs in the caller's rayon context, negative values count back from all
    /// available cores
    threads: isize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cuts_per_section: 1,
            anchors: Vec::new(),
            threads: 0,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_cuts_per_section(&mut self, cuts_per_section: usize) -> Result<&mut Self> {
        if cuts_per_section == 0 {
            return Err(Error::configuration(
                "cuts_per_section",
                "must be at least 1, got 0",
            ));
        }
        self.cuts_per_section = cuts_per_section;
        Ok(self)
    }

    /// Anchors are checked against the sequences when the aligner is built.
    pub fn set_anchors(&mut self, anchors: Vec<Anchor>) -> &mut Self {
        self.anchors = anchors;
        self
    }

    pub fn set_threads(&mut self, threads: isize) -> &mut Self {
        self.threads = threads;
        self
    }
}
