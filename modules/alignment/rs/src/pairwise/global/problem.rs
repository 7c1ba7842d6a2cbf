use std::ops::Range;

use derive_getters::{Dissolve, Getters};

use super::error::{Error, Result};
use super::state::State;

/// Required state of the path at the bottom-right corner of a sub-problem
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Exit {
    Any,
    Exactly(State),
}

/// A rectangle of the DP matrix together with the path states at its corners
#[derive(Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct SubProblem {
    query: Range<usize>,
    target: Range<usize>,
    entry: State,
    exit: Exit,
}

impl SubProblem {
    /// `bounds` are the lengths of the query and the target.
    pub fn new(
        query: Range<usize>,
        target: Range<usize>,
        entry: State,
        exit: Exit,
        bounds: (usize, usize),
    ) -> Result<Self> {
        for (name, range, len) in [("query", &query, bounds.0), ("target", &target, bounds.1)] {
            if range.start > range.end || range.end > len {
                return Err(Error::invariant(format!(
                    "{name} range {range:?} is malformed for a sequence of length {len}"
                )));
            }
        }
        Ok(Self {
            query,
            target,
            entry,
            exit,
        })
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.query.len()
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.target.len()
    }
}
