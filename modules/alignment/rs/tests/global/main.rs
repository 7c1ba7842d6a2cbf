mod cases;
mod configuration;
mod equivalence;
mod reference;

use linalign_alignment_rs::pairwise::scoring::{self, equiv, gaps, matrices, symbols};

pub type Score = i32;
pub type Symbol = u8;

pub type Simple = scoring::Delegate<
    Score,
    Symbol,
    symbols::Equality<Score, Symbol>,
    gaps::Affine<Score>,
    equiv::Equality<Symbol>,
>;

pub type Matrix = scoring::Delegate<
    Score,
    Symbol,
    matrices::SubstitutionMatrix<Score>,
    gaps::Affine<Score>,
    matrices::SubstitutionMatrix<Score>,
>;

pub fn simple(equal: Score, different: Score, open: Score, extend: Score) -> Simple {
    scoring::compose(
        symbols::Equality::new(equal, different),
        gaps::Affine::new(open, extend),
        equiv::Equality::new(),
    )
}

/// BLOSUM62 with classic open/extend penalties
pub fn blosum62(open: Score, extend: Score) -> Matrix {
    matrices::blosum62().with_gaps(gaps::Affine::penalties(open, extend))
}

/// NUC.4.4 with classic open/extend penalties
pub fn nuc44(open: Score, extend: Score) -> Matrix {
    matrices::nuc44().with_gaps(gaps::Affine::penalties(open, extend))
}
