use derive_getters::Dissolve;
use derive_more::{Constructor, From, Into};
use itertools::Itertools;

use super::error::{Error, Result};
use super::problem::{Exit, SubProblem};
use super::state::State;

/// Forced column pairing `query[query]` with `target[target]` (0-based)
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Constructor, Dissolve, From, Into,
)]
pub struct Anchor {
    pub query: usize,
    pub target: usize,
}

impl Anchor {
    /// Anchors from a per-query map where `map[i]` is the 1-based target position of `query[i]`
    /// and `-1` marks unanchored positions.
    pub fn from_query_map(map: &[isize]) -> Result<Vec<Anchor>> {
        map.iter()
            .enumerate()
            .filter(|(_, target)| **target != -1)
            .map(|(query, target)| match usize::try_from(*target) {
                Ok(target) if target >= 1 => Ok(Anchor {
                    query,
                    target: target - 1,
                }),
                _ => Err(Error::configuration(
                    "anchors",
                    format!(
                        "query position {query} maps to {target}, expected -1 or a 1-based target position"
                    ),
                )),
            })
            .collect()
    }
}

/// Validated anchors of a particular query/target pair
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Anchors {
    anchors: Vec<Anchor>,
    query: usize,
    target: usize,
}

impl Anchors {
    /// Anchors must lie inside both sequences and increase strictly in both coordinates.
    pub fn new(anchors: Vec<Anchor>, query: usize, target: usize) -> Result<Self> {
        for anchor in &anchors {
            if anchor.query >= query || anchor.target >= target {
                return Err(Error::configuration(
                    "anchors",
                    format!(
                        "{anchor:?} is outside of the query ({query}) or target ({target}) sequence"
                    ),
                ));
            }
        }
        for (prev, next) in anchors.iter().tuple_windows() {
            if prev.query >= next.query || prev.target >= next.target {
                return Err(Error::configuration(
                    "anchors",
                    format!("{prev:?} and {next:?} are not strictly increasing"),
                ));
            }
        }
        Ok(Self {
            anchors,
            query,
            target,
        })
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Sub-problems between consecutive anchors, from the start of both sequences to their ends.
    /// There is always one more segment than anchors. Segments around an anchor meet it without a
    /// pending gap since the anchor column is a diagonal move.
    pub fn segments(&self) -> Result<Vec<SubProblem>> {
        let bounds = (self.query, self.target);
        let mut segments = Vec::with_capacity(self.anchors.len() + 1);

        let (mut qstart, mut tstart) = (0, 0);
        for anchor in &self.anchors {
            segments.push(SubProblem::new(
                qstart..anchor.query,
                tstart..anchor.target,
                State::Diagonal,
                Exit::Any,
                bounds,
            )?);
            (qstart, tstart) = (anchor.query + 1, anchor.target + 1);
        }
        segments.push(SubProblem::new(
            qstart..self.query,
            tstart..self.target,
            State::Diagonal,
            Exit::Any,
            bounds,
        )?);
        Ok(segments)
    }
}
