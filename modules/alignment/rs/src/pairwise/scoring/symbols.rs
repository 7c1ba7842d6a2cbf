use std::marker::PhantomData;

use crate::pairwise::scoring::Score;

/// Substitution score of two aligned symbols.
pub trait Scorer {
    type Score: Score;
    type Symbol;

    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::Score;
}

#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub struct Equality<S: Score, Symbol> {
    pub equal: S,
    pub different: S,
    _phantom: PhantomData<fn() -> Symbol>,
}

impl<S: Score, Symbol: PartialEq> Scorer for Equality<S, Symbol> {
    type Score = S;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(&self, a: &Self::Symbol, b: &Self::Symbol) -> Self::Score {
        if a == b { self.equal } else { self.different }
    }
}

impl<S: Score, Symbol: PartialEq> Equality<S, Symbol> {
    pub fn new(equal: S, different: S) -> Self {
        Self {
            equal,
            different,
            _phantom: Default::default(),
        }
    }
}
