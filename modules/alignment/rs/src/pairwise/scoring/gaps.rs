use derive_getters::Dissolve;
use derive_more::Constructor;

use crate::pairwise::scoring::Score;

/// Affine gap scores for both sequences. Seq1 is the query, seq2 is the target.
///
/// `*_gap_open` is the score of the first column of a gap run and `*_gap_extend` is the score of
/// every following column, i.e. a run of `L` columns scores `open + (L - 1) * extend`.
/// A "seq1 gap" is a gap placed in the query (the target symbol is aligned against nothing).
pub trait Scorer {
    type Score: Score;

    fn seq1_gap_open(&self) -> Self::Score;
    fn seq1_gap_extend(&self) -> Self::Score;

    fn seq2_gap_open(&self) -> Self::Score;
    fn seq2_gap_extend(&self) -> Self::Score;
}

/// Gap scores that are identical for both sequences.
pub trait Symmetric {
    type Score: Score;

    fn gap_open(&self) -> Self::Score;
    fn gap_extend(&self) -> Self::Score;
}

impl<T: Symmetric> Scorer for T {
    type Score = <Self as Symmetric>::Score;

    #[inline(always)]
    fn seq1_gap_open(&self) -> Self::Score {
        self.gap_open()
    }

    #[inline(always)]
    fn seq1_gap_extend(&self) -> Self::Score {
        self.gap_extend()
    }

    #[inline(always)]
    fn seq2_gap_open(&self) -> Self::Score {
        self.gap_open()
    }

    #[inline(always)]
    fn seq2_gap_extend(&self) -> Self::Score {
        self.gap_extend()
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, Constructor, Dissolve)]
pub struct Affine<S: Score> {
    pub open: S,
    pub extend: S,
}

impl<S: Score> Affine<S> {
    /// Build gap scores from classic positive penalties where a gap of `L` columns costs
    /// `open + L * extend`. For example, penalties 10/1 charge 11 for a single gap column.
    pub fn penalties(open: S, extend: S) -> Self {
        Self {
            open: -(open + extend),
            extend: -extend,
        }
    }

    /// Total score of a gap run with the given length. Empty runs are free.
    pub fn run(&self, len: usize) -> S {
        match len {
            0 => S::zero(),
            _ => {
                let tail = S::from(len - 1).unwrap_or_else(S::max_value);
                self.open + tail * self.extend
            }
        }
    }
}

impl<S: Score> Symmetric for Affine<S> {
    type Score = S;

    #[inline(always)]
    fn gap_open(&self) -> Self::Score {
        self.open
    }

    #[inline(always)]
    fn gap_extend(&self) -> Self::Score {
        self.extend
    }
}

/// Gap scores of both sequences resolved once per DP pass.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, Dissolve)]
pub struct Costs<S: Score> {
    /// Gaps placed in the query (horizontal moves)
    pub query: Affine<S>,
    /// Gaps placed in the target (vertical moves)
    pub target: Affine<S>,
}

impl<S: Score> Costs<S> {
    pub fn of<G: Scorer<Score = S>>(gaps: &G) -> Self {
        Self {
            query: Affine::new(gaps.seq1_gap_open(), gaps.seq1_gap_extend()),
            target: Affine::new(gaps.seq2_gap_open(), gaps.seq2_gap_extend()),
        }
    }
}
