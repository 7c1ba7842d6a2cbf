use std::fmt::{Display, Formatter};
use std::ops::{Range, RangeInclusive};
use std::time::Duration;

use derive_getters::Getters;

use crate::pairwise::scoring::gaps::Costs;
use crate::pairwise::scoring::Scheme;
use crate::pairwise::{Alignment, Op, Step};
use crate::Score;

use super::solution::{Column, Solution};

/// Symbol rendered in place of gaps
pub const GAP: char = '-';

/// Two gapped rows of the same length
#[derive(Clone, Eq, PartialEq, Debug, Hash, Getters)]
pub struct Pair {
    query: String,
    target: String,
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.query)?;
        writeln!(f, "{}", self.target)
    }
}

/// Optimal global alignment of a query and a target
#[derive(Clone, PartialEq, Eq, Debug, Getters)]
pub struct GlobalAlignment<S: Score, Sym> {
    query: Vec<Sym>,
    target: Vec<Sym>,
    columns: Vec<Column>,
    ops: Vec<Op>,
    #[getter(skip)]
    score: S,
    #[getter(skip)]
    max_score: S,
    #[getter(skip)]
    min_score: S,
    #[getter(skip)]
    elapsed: Duration,
}

impl<S: Score, Sym: Copy> GlobalAlignment<S, Sym> {
    pub fn new<Sch: Scheme<Score = S, Symbol = Sym>>(
        query: Vec<Sym>,
        target: Vec<Sym>,
        solution: Solution<S>,
        scheme: &Sch,
        elapsed: Duration,
    ) -> Self {
        let (score, columns) = solution.dissolve();
        let ops = columns
            .iter()
            .map(|column| column.op(&query, &target, scheme))
            .collect();

        let perfect = |seq: &[Sym]| {
            seq.iter()
                .fold(S::zero(), |total, x| total + scheme.score(x, x))
        };
        let max_score = perfect(&query).max(perfect(&target));

        let costs = Costs::of(scheme);
        let min_score = costs.target.run(query.len()) + costs.query.run(target.len());

        Self {
            query,
            target,
            columns,
            ops,
            score,
            max_score,
            min_score,
            elapsed,
        }
    }

    pub fn score(&self) -> S {
        self.score
    }

    /// Score of aligning the longer-scoring sequence with itself
    pub fn max_score(&self) -> S {
        self.max_score
    }

    /// Score of aligning every symbol against a gap
    pub fn min_score(&self) -> S {
        self.min_score
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Wall time of the computation, never zero
    pub fn computation_time_nanos(&self) -> u128 {
        self.elapsed.as_nanos().max(1)
    }

    /// Score of the reported path recomputed from scratch
    pub fn realized_score<Sch: Scheme<Score = S, Symbol = Sym>>(&self, scheme: &Sch) -> S {
        let costs = Costs::of(scheme);
        let mut total = S::zero();
        let mut previous: Option<&Column> = None;
        for column in &self.columns {
            total = total
                + match (previous, column) {
                    (_, Column::Pair { query, target }) => {
                        scheme.score(&self.query[*query], &self.target[*target])
                    }
                    (Some(Column::TargetGap { .. }), Column::TargetGap { .. }) => costs.target.extend,
                    (_, Column::TargetGap { .. }) => costs.target.open,
                    (Some(Column::QueryGap { .. }), Column::QueryGap { .. }) => costs.query.extend,
                    (_, Column::QueryGap { .. }) => costs.query.open,
                };
            previous = Some(column);
        }
        total
    }

    /// Run-length encoded view of the alignment. Seq1 is the query, seq2 is the target.
    pub fn alignment(&self) -> Alignment<S, u8, usize, usize> {
        let steps = Step::encode(self.ops.iter().copied());
        Alignment::new(self.score, steps, 0..self.query.len(), 0..self.target.len())
    }

    pub fn num_identical(&self) -> usize {
        self.ops.iter().filter(|op| **op == Op::Match).count()
    }

    /// Identical columns plus non-identical pairs classified as equivalent
    pub fn num_similar(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Match | Op::Equivalent))
            .count()
    }

    /// Identical columns per 100 alignment columns
    pub fn percent_identity(&self) -> f64 {
        match self.columns.len() {
            0 => 0.0,
            len => 100.0 * self.num_identical() as f64 / len as f64,
        }
    }

    /// Score normalised to `[0, 1]` between the minimum and the maximum scores
    pub fn similarity(&self) -> f64 {
        match self.score_range() {
            Some(range) => (self.as_f64(self.score) - self.as_f64(self.min_score)) / range,
            None => 1.0,
        }
    }

    /// `1 - similarity()`
    pub fn distance(&self) -> f64 {
        match self.score_range() {
            Some(range) => (self.as_f64(self.max_score) - self.as_f64(self.score)) / range,
            None => 0.0,
        }
    }

    fn as_f64(&self, value: S) -> f64 {
        value.to_f64().unwrap_or(f64::NAN)
    }

    fn score_range(&self) -> Option<f64> {
        let range = self.as_f64(self.max_score) - self.as_f64(self.min_score);
        (range > 0.0).then_some(range)
    }

    /// 1-based columns of the first and the last query symbol
    pub fn query_span(&self) -> Option<RangeInclusive<usize>> {
        self.span(|column| column.query().is_some())
    }

    /// 1-based columns of the first and the last target symbol
    pub fn target_span(&self) -> Option<RangeInclusive<usize>> {
        self.span(|column| column.target().is_some())
    }

    fn span(&self, present: impl Fn(&Column) -> bool) -> Option<RangeInclusive<usize>> {
        let first = self.columns.iter().position(&present)?;
        let last = self.columns.iter().rposition(&present)?;
        Some(first + 1..=last + 1)
    }

    /// 0-based target positions covered by the query's columns
    pub fn query_in_target(&self) -> Option<Range<usize>> {
        let span = self.query_span()?;
        let mut targets = self.columns[span.start() - 1..*span.end()]
            .iter()
            .filter_map(Column::target);
        let first = targets.next()?;
        let last = targets.last().unwrap_or(first);
        Some(first..last + 1)
    }

    /// Gapped rows with [`GAP`] in place of missing symbols
    pub fn pair(&self) -> Pair
    where
        Sym: Into<char>,
    {
        let render = |symbol: Option<usize>, seq: &[Sym]| match symbol {
            Some(pos) => seq[pos].into(),
            None => GAP,
        };
        Pair {
            query: self
                .columns
                .iter()
                .map(|x| render(x.query(), &self.query))
                .collect(),
            target: self
                .columns
                .iter()
                .map(|x| render(x.target(), &self.target))
                .collect(),
        }
    }

    /// Same as [`GlobalAlignment::pair`]
    pub fn profile(&self) -> Pair
    where
        Sym: Into<char>,
    {
        self.pair()
    }
}
