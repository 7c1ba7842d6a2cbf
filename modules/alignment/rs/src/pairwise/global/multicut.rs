use std::mem;

use crate::pairwise::scoring::Scheme;
use crate::{Alignable, Score};

use super::error::{Error, Result};
use super::problem::{Exit, SubProblem};
use super::state::{PerState, State};
use super::vectors::{self, Moves, Tracer};

/// Node and state where an optimal path leaves a cut row
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Crossing {
    /// Row offset inside the sub-problem
    pub row: usize,
    /// Column offset inside the sub-problem
    pub column: usize,
    pub state: State,
}

type Links = Vec<PerState<Option<Crossing>>>;

/// Tracks, for every node of the current row, the latest cut row crossing of the best path to it.
/// Each cut row keeps a snapshot that links its nodes to the crossing of the previous cut row.
pub struct CutTracker {
    rows: Vec<usize>,
    next: usize,
    previous: Links,
    current: Links,
    snapshots: Vec<Links>,
}

impl CutTracker {
    /// `rows` must be sorted and lie strictly inside the sub-problem.
    pub fn new(rows: Vec<usize>, width: usize) -> Self {
        let snapshots = Vec::with_capacity(rows.len());
        Self {
            rows,
            next: 0,
            previous: vec![PerState::default(); width + 1],
            current: vec![PerState::default(); width + 1],
            snapshots,
        }
    }

    /// Crossings of the best path ending at the `column` node of the last row in `state`,
    /// one per cut row, top to bottom.
    pub fn crossings(&self, column: usize, state: State) -> Result<Vec<Crossing>> {
        if self.snapshots.len() != self.rows.len() {
            return Err(Error::invariant(format!(
                "{} of {} cut rows were recorded",
                self.snapshots.len(),
                self.rows.len()
            )));
        }

        let mut result = Vec::with_capacity(self.rows.len());
        let mut link = *self.current[column].get(state);
        for (row, snapshot) in self.rows.iter().zip(&self.snapshots).rev() {
            let crossing = match link {
                Some(crossing) if crossing.row == *row => crossing,
                _ => {
                    return Err(Error::invariant(format!(
                        "optimal path has no crossing of the cut row {row}"
                    )));
                }
            };
            result.push(crossing);
            link = *snapshot[crossing.column].get(crossing.state);
        }
        if link.is_some() {
            return Err(Error::invariant("dangling link above the first cut row"));
        }

        result.reverse();
        Ok(result)
    }
}

impl Tracer for CutTracker {
    fn row_start(&mut self, row: usize) {
        if row > 0 {
            mem::swap(&mut self.previous, &mut self.current);
        }
    }

    #[inline(always)]
    fn cell(&mut self, row: usize, col: usize, moves: Moves) {
        let diagonal = moves
            .diagonal
            .and_then(|source| *self.previous[col - 1].get(source));
        let target_gap = moves
            .target_gap
            .and_then(|source| *self.previous[col].get(source));
        let query_gap = moves
            .query_gap
            .and_then(|source| *self.current[col - 1].get(source));
        debug_assert!(row > 0 || (diagonal.is_none() && target_gap.is_none()));

        self.current[col] = PerState::new(diagonal, target_gap, query_gap);
    }

    fn row_end(&mut self, row: usize) {
        if self.rows.get(self.next) != Some(&row) {
            return;
        }
        self.snapshots.push(self.current.clone());
        for (column, links) in self.current.iter_mut().enumerate() {
            *links = PerState::default().map(|state, _: Option<Crossing>| {
                Some(Crossing { row, column, state })
            });
        }
        self.next += 1;
    }
}

/// Upper bound on the cut rows of a single sweep. The tracker keeps one row of links per cut, so
/// larger requests are served by deeper recursion instead.
pub const MAX_CUTS: usize = 32;

/// `count` evenly spaced rows strictly inside `1..rows`, clamped to [`MAX_CUTS`] and to what the
/// rows can hold.
pub fn rows(rows: usize, count: usize) -> Vec<usize> {
    let count = count.min(MAX_CUTS).min(rows.saturating_sub(1));
    (1..=count).map(|ind| ind * rows / (count + 1)).collect()
}

/// Split the sub-problem along one optimal path into pieces separated by `count` cut rows.
pub fn split<S, Sym, Q, T, Sch>(
    query: &Q,
    target: &T,
    problem: &SubProblem,
    scheme: &Sch,
    count: usize,
) -> Result<(S, Vec<SubProblem>)>
where
    S: Score,
    Q: Alignable<Symbol = Sym>,
    T: Alignable<Symbol = Sym>,
    Sch: Scheme<Score = S, Symbol = Sym>,
{
    let (qstart, tstart) = (problem.query().start, problem.target().start);
    let cuts = rows(problem.rows(), count);
    if cuts.is_empty() {
        return Err(Error::invariant(format!("{problem:?} can't be cut")));
    }

    let mut tracker = CutTracker::new(cuts, problem.cols());
    let last = vectors::sweep(
        query,
        target,
        problem.query().clone(),
        problem.target().clone(),
        PerState::origin(*problem.entry(), S::zero()),
        scheme,
        &mut tracker,
    );

    let (state, score) = match problem.exit() {
        Exit::Any => last[problem.cols()].best(),
        Exit::Exactly(state) => (*state, *last[problem.cols()].get(*state)),
    };
    if !score.is_reachable() {
        return Err(Error::invariant(format!(
            "no admissible path through {problem:?}"
        )));
    }
    let crossings = tracker.crossings(problem.cols(), state)?;

    let bounds = (query.len(), target.len());
    let mut pieces = Vec::with_capacity(crossings.len() + 1);
    let (mut row, mut column, mut entry) = (0, 0, *problem.entry());
    for crossing in crossings {
        pieces.push(SubProblem::new(
            qstart + row..qstart + crossing.row,
            tstart + column..tstart + crossing.column,
            entry,
            Exit::Exactly(crossing.state),
            bounds,
        )?);
        (row, column, entry) = (crossing.row, crossing.column, crossing.state);
    }
    pieces.push(SubProblem::new(
        qstart + row..problem.query().end,
        tstart + column..problem.target().end,
        entry,
        *problem.exit(),
        bounds,
    )?);

    Ok((score, pieces))
}
