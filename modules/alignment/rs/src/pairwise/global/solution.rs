use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use crate::pairwise::Op;
use crate::pairwise::scoring::equiv::Classifier;
use crate::Score;

/// A single alignment column. Positions are 0-based sequence indices.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Column {
    Pair { query: usize, target: usize },
    /// Target symbol against a gap in the query
    QueryGap { target: usize },
    /// Query symbol against a gap in the target
    TargetGap { query: usize },
}

impl Column {
    pub fn query(&self) -> Option<usize> {
        match self {
            Column::Pair { query, .. } | Column::TargetGap { query } => Some(*query),
            Column::QueryGap { .. } => None,
        }
    }

    pub fn target(&self) -> Option<usize> {
        match self {
            Column::Pair { target, .. } | Column::QueryGap { target } => Some(*target),
            Column::TargetGap { .. } => None,
        }
    }

    pub fn op<Sym, E: Classifier<Symbol = Sym>>(
        &self,
        query: &[Sym],
        target: &[Sym],
        classifier: &E,
    ) -> Op {
        match self {
            Column::Pair { query: q, target: t } => classifier.classify(&query[*q], &target[*t]).into(),
            Column::QueryGap { .. } => Op::GapFirst,
            Column::TargetGap { .. } => Op::GapSecond,
        }
    }
}

/// Optimal path through a sub-problem
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve, Constructor)]
pub struct Solution<S: Score> {
    score: S,
    columns: Vec<Column>,
}

impl<S: Score> Solution<S> {
    pub fn empty() -> Self {
        Self::new(S::zero(), Vec::new())
    }

    /// Append `other` to the end of this path.
    pub fn extend(&mut self, other: Solution<S>) {
        self.score = self.score + other.score;
        self.columns.extend(other.columns);
    }

    pub fn push(&mut self, column: Column, score: S) {
        self.score = self.score + score;
        self.columns.push(column);
    }

    /// Concatenate partial solutions in path order.
    pub fn concat(parts: impl IntoIterator<Item = Solution<S>>) -> Self {
        let mut result = Self::empty();
        for part in parts {
            result.extend(part);
        }
        result
    }
}
