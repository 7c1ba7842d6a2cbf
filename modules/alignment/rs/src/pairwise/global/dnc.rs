use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::pairwise::scoring::gaps::Costs;
use crate::pairwise::scoring::Scheme;
use crate::{Alignable, Score};

use super::cut;
use super::error::{Error, Result};
use super::full;
use super::multicut;
use super::problem::{Exit, SubProblem};
use super::solution::Solution;
use super::vectors;

/// Sub-problems with at most this many rows are solved with the full-table DP.
pub const BASE_ROWS: usize = 2;

/// Linear-memory exact global alignment of sub-problems.
///
/// With one cut per section every level bisects the rows and finds the crossing of the middle
/// row from forward and reverse score vectors. With more cuts, a single forward sweep locates the
/// crossings of several evenly spaced rows and the pieces are solved in parallel.
pub struct DivideAndConquer<'a, Q, T, Sch> {
    query: &'a Q,
    target: &'a T,
    scheme: &'a Sch,
    cuts: usize,
    cancel: Option<&'a AtomicBool>,
}

impl<'a, S, Sym, Q, T, Sch> DivideAndConquer<'a, Q, T, Sch>
where
    S: Score,
    Q: Alignable<Symbol = Sym> + Sync,
    T: Alignable<Symbol = Sym> + Sync,
    Sch: Scheme<Score = S, Symbol = Sym> + Sync,
{
    pub fn new(query: &'a Q, target: &'a T, scheme: &'a Sch, cuts: usize) -> Result<Self> {
        if cuts == 0 {
            return Err(Error::configuration(
                "cuts_per_section",
                "must be at least 1, got 0",
            ));
        }
        Ok(Self {
            query,
            target,
            scheme,
            cuts,
            cancel: None,
        })
    }

    /// Abort with [`Error::Cancelled`] once the flag is raised. The flag is checked before each
    /// sub-problem, never inside a DP pass.
    pub fn with_cancellation(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn ensure_running(&self) -> Result<()> {
        match self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }

    pub fn solve(&self, problem: &SubProblem) -> Result<Solution<S>> {
        self.ensure_running()?;
        log::trace!(
            "Solving {:?}x{:?} ({:?} -> {:?})",
            problem.query(),
            problem.target(),
            problem.entry(),
            problem.exit()
        );

        if problem.rows() <= BASE_ROWS || problem.cols() == 0 {
            return full::align(self.query, self.target, problem, self.scheme);
        }
        match self.cuts {
            1 => self.bisect(problem),
            cuts => self.partition(problem, cuts),
        }
    }

    fn bisect(&self, problem: &SubProblem) -> Result<Solution<S>> {
        let (query, target) = (problem.query(), problem.target());
        let middle = query.start + problem.rows() / 2;

        let forward = vectors::forward(
            self.query,
            self.target,
            query.start..middle,
            target.clone(),
            *problem.entry(),
            self.scheme,
        );
        let reverse = vectors::reverse(
            self.query,
            self.target,
            middle..query.end,
            target.clone(),
            *problem.exit(),
            self.scheme,
        );
        let cut = cut::find(&forward, &reverse, &Costs::of(self.scheme))?;
        let column = target.start + cut.column;
        log::debug!(
            "Row {middle} of {query:?}x{target:?} is crossed at column {column} in {:?}",
            cut.state
        );

        let bounds = (self.query.len(), self.target.len());
        let upper = SubProblem::new(
            query.start..middle,
            target.start..column,
            *problem.entry(),
            Exit::Exactly(cut.state),
            bounds,
        )?;
        let lower = SubProblem::new(
            middle..query.end,
            column..target.end,
            cut.state,
            *problem.exit(),
            bounds,
        )?;

        let solution = Solution::concat([self.solve(&upper)?, self.solve(&lower)?]);
        Self::verify(problem, &solution, cut.score)?;
        Ok(solution)
    }

    fn partition(&self, problem: &SubProblem, cuts: usize) -> Result<Solution<S>> {
        let (score, pieces) = multicut::split(self.query, self.target, problem, self.scheme, cuts)?;
        log::debug!(
            "Split {:?}x{:?} into {} pieces",
            problem.query(),
            problem.target(),
            pieces.len()
        );

        let solutions = pieces
            .into_par_iter()
            .map(|piece| self.solve(&piece))
            .collect::<Result<Vec<_>>>()?;

        let solution = Solution::concat(solutions);
        Self::verify(problem, &solution, score)?;
        Ok(solution)
    }

    fn verify(problem: &SubProblem, solution: &Solution<S>, expected: S) -> Result<()> {
        if *solution.score() != expected {
            return Err(Error::invariant(format!(
                "pieces of {problem:?} score {:?} instead of {expected:?}",
                solution.score()
            )));
        }
        Ok(())
    }
}
