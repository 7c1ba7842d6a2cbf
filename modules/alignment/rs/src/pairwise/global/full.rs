use crate::pairwise::scoring::Scheme;
use crate::{Alignable, Score};

use super::error::{Error, Result};
use super::problem::{Exit, SubProblem};
use super::solution::{Column, Solution};
use super::state::{PerState, State};
use super::vectors::{self, Moves, Tracer};

/// Complete traceback of a sweep
pub struct TraceMatrix {
    moves: Vec<Moves>,
    width: usize,
}

impl TraceMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            moves: vec![Moves::default(); (rows + 1) * (cols + 1)],
            width: cols + 1,
        }
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> &Moves {
        &self.moves[row * self.width + col]
    }
}

impl Tracer for TraceMatrix {
    #[inline(always)]
    fn cell(&mut self, row: usize, col: usize, moves: Moves) {
        self.moves[row * self.width + col] = moves;
    }
}

/// Quadratic-memory DP over the whole sub-problem followed by a traceback.
pub fn align<S, Sym, Q, T, Sch>(
    query: &Q,
    target: &T,
    problem: &SubProblem,
    scheme: &Sch,
) -> Result<Solution<S>>
where
    S: Score,
    Q: Alignable<Symbol = Sym>,
    T: Alignable<Symbol = Sym>,
    Sch: Scheme<Score = S, Symbol = Sym>,
{
    let (rows, cols) = (problem.rows(), problem.cols());
    let (qstart, tstart) = (problem.query().start, problem.target().start);

    let mut trace = TraceMatrix::new(rows, cols);
    let last = vectors::sweep(
        query,
        target,
        problem.query().clone(),
        problem.target().clone(),
        PerState::origin(*problem.entry(), S::zero()),
        scheme,
        &mut trace,
    );

    let (mut state, score) = match problem.exit() {
        Exit::Any => last[cols].best(),
        Exit::Exactly(state) => (*state, *last[cols].get(*state)),
    };
    if !score.is_reachable() {
        return Err(Error::invariant(format!(
            "no admissible path through {problem:?}"
        )));
    }

    let (mut row, mut col) = (rows, cols);
    let mut columns = Vec::with_capacity(rows + cols);
    while row > 0 || col > 0 {
        let source = trace.at(row, col).get(state).ok_or_else(|| {
            Error::invariant(format!(
                "broken traceback at ({row}, {col}) in {state:?} for {problem:?}"
            ))
        })?;
        match state {
            State::Diagonal => {
                columns.push(Column::Pair {
                    query: qstart + row - 1,
                    target: tstart + col - 1,
                });
                row -= 1;
                col -= 1;
            }
            State::TargetGap => {
                columns.push(Column::TargetGap {
                    query: qstart + row - 1,
                });
                row -= 1;
            }
            State::QueryGap => {
                columns.push(Column::QueryGap {
                    target: tstart + col - 1,
                });
                col -= 1;
            }
        }
        state = source;
    }
    if state != *problem.entry() {
        return Err(Error::invariant(format!(
            "traceback reached the origin in {state:?} instead of {:?}",
            problem.entry()
        )));
    }

    columns.reverse();
    Ok(Solution::new(score, columns))
}
