use std::sync::atomic::AtomicBool;
use std::time::Instant;

use rayon::prelude::*;
use rayon::ThreadPool;

use linalign_core_rs::parallelism;

use crate::pairwise::scoring::Scheme;
use crate::{Alignable, Score};

use super::anchors::Anchors;
use super::config::Config;
use super::dnc::DivideAndConquer;
use super::error::{Error, Result};
use super::multicut;
use super::result::GlobalAlignment;
use super::solution::{Column, Solution};

fn symbols<A: Alignable<Symbol: Copy>>(seq: &A) -> Vec<A::Symbol> {
    (0..seq.len()).map(|pos| *seq.at(pos)).collect()
}

/// Exact global alignment of a query and a target in linear memory.
pub struct GlobalAligner<'a, Q, T, Sch> {
    query: &'a Q,
    target: &'a T,
    scheme: &'a Sch,
    anchors: Anchors,
    cuts_per_section: usize,
    pool: Option<ThreadPool>,
    cancel: Option<&'a AtomicBool>,
}

/// Collects the inputs of a [`GlobalAligner`] and validates them together.
pub struct Builder<'a, Q, T, Sch> {
    query: Option<&'a Q>,
    target: Option<&'a T>,
    scheme: Option<&'a Sch>,
    config: Config,
    cancel: Option<&'a AtomicBool>,
}

impl<Q, T, Sch> Default for Builder<'_, Q, T, Sch> {
    fn default() -> Self {
        Self {
            query: None,
            target: None,
            scheme: None,
            config: Config::default(),
            cancel: None,
        }
    }
}

impl<'a, S, Sym, Q, T, Sch> Builder<'a, Q, T, Sch>
where
    S: Score,
    Sym: Copy,
    Q: Alignable<Symbol = Sym> + Sync,
    T: Alignable<Symbol = Sym> + Sync,
    Sch: Scheme<Score = S, Symbol = Sym> + Sync,
{
    pub fn query(mut self, query: &'a Q) -> Self {
        self.query = Some(query);
        self
    }

    pub fn target(mut self, target: &'a T) -> Self {
        self.target = Some(target);
        self
    }

    pub fn scheme(mut self, scheme: &'a Sch) -> Self {
        self.scheme = Some(scheme);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Stop the alignment with [`Error::Cancelled`] once the flag is raised.
    pub fn cancellation(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn build(self) -> Result<GlobalAligner<'a, Q, T, Sch>> {
        let query = self
            .query
            .ok_or_else(|| Error::configuration("query", "query sequence is not set"))?;
        let target = self
            .target
            .ok_or_else(|| Error::configuration("target", "target sequence is not set"))?;
        let scheme = self
            .scheme
            .ok_or_else(|| Error::configuration("scheme", "scoring scheme is not set"))?;

        let (cuts_per_section, anchors, threads) = self.config.dissolve();
        if cuts_per_section == 0 {
            return Err(Error::configuration(
                "cuts_per_section",
                "must be at least 1, got 0",
            ));
        }
        let anchors = Anchors::new(anchors, query.len(), target.len())?;
        let pool = parallelism::pool(threads)
            .map_err(|err| Error::configuration("threads", err.to_string()))?;

        Ok(GlobalAligner {
            query,
            target,
            scheme,
            anchors,
            cuts_per_section,
            pool,
            cancel: self.cancel,
        })
    }
}

impl<'a, S, Sym, Q, T, Sch> GlobalAligner<'a, Q, T, Sch>
where
    S: Score,
    Sym: Copy,
    Q: Alignable<Symbol = Sym> + Sync,
    T: Alignable<Symbol = Sym> + Sync,
    Sch: Scheme<Score = S, Symbol = Sym> + Sync,
{
    pub fn builder() -> Builder<'a, Q, T, Sch> {
        Builder::default()
    }

    /// Aligner with the default [`Config`]
    pub fn new(query: &'a Q, target: &'a T, scheme: &'a Sch) -> Result<Self> {
        Self::builder()
            .query(query)
            .target(target)
            .scheme(scheme)
            .build()
    }

    pub fn align(&self) -> Result<GlobalAlignment<S, Sym>> {
        let started = Instant::now();
        log::debug!(
            "Aligning query (len={}) to target (len={}): {} anchors, {} cuts per section",
            self.query.len(),
            self.target.len(),
            self.anchors.anchors().len(),
            self.cuts_per_section
        );
        if self.cuts_per_section > multicut::MAX_CUTS {
            log::warn!(
                "cuts_per_section={} is clamped to {} cuts per sweep",
                self.cuts_per_section,
                multicut::MAX_CUTS
            );
        } else if self.cuts_per_section > 1 && self.cuts_per_section >= self.query.len() {
            log::warn!(
                "cuts_per_section={} is clamped to the query length ({})",
                self.cuts_per_section,
                self.query.len()
            );
        }

        let solution = match &self.pool {
            Some(pool) => pool.install(|| self.solve()),
            None => self.solve(),
        }?;
        let elapsed = started.elapsed();

        let alignment = GlobalAlignment::new(
            symbols(self.query),
            symbols(self.target),
            solution,
            self.scheme,
            elapsed,
        );

        let realized = alignment.realized_score(self.scheme);
        if realized != alignment.score() {
            return Err(Error::invariant(format!(
                "reported score {:?} differs from the score of the path {realized:?}",
                alignment.score()
            )));
        }
        log::debug!(
            "Aligned with score {:?} (max={:?}, min={:?}) in {:?}",
            alignment.score(),
            alignment.max_score(),
            alignment.min_score(),
            elapsed
        );
        Ok(alignment)
    }

    fn solve(&self) -> Result<Solution<S>> {
        let mut dnc = DivideAndConquer::new(
            self.query,
            self.target,
            self.scheme,
            self.cuts_per_section,
        )?;
        if let Some(flag) = self.cancel {
            dnc = dnc.with_cancellation(flag);
        }

        let segments = self
            .anchors
            .segments()?
            .par_iter()
            .map(|segment| dnc.solve(segment))
            .collect::<Result<Vec<_>>>()?;

        let mut result = Solution::empty();
        for (ind, segment) in segments.into_iter().enumerate() {
            result.extend(segment);
            if let Some(anchor) = self.anchors.anchors().get(ind) {
                let score = self
                    .scheme
                    .score(self.query.at(anchor.query), self.target.at(anchor.target));
                result.push(
                    Column::Pair {
                        query: anchor.query,
                        target: anchor.target,
                    },
                    score,
                );
            }
        }
        Ok(result)
    }
}
