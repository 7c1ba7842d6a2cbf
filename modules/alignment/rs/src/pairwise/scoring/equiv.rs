use std::marker::PhantomData;

use crate::pairwise;

#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Match,
    Mismatch,
    Equivalent,
}

/// Classifies an aligned pair of symbols, e.g. to report identical and similar columns.
pub trait Classifier {
    type Symbol;

    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Type;
}

/// Identical symbols match, everything else is a mismatch.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub struct Equality<Symbol> {
    _phantom: PhantomData<fn() -> Symbol>,
}

impl<Symbol> Equality<Symbol> {
    pub fn new() -> Self {
        Self {
            _phantom: Default::default(),
        }
    }
}

impl<Symbol> Default for Equality<Symbol> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Symbol: PartialEq> Classifier for Equality<Symbol> {
    type Symbol = Symbol;

    #[inline(always)]
    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Type {
        if *s1 == *s2 {
            Type::Match
        } else {
            Type::Mismatch
        }
    }
}

impl From<Type> for pairwise::Op {
    fn from(value: Type) -> Self {
        match value {
            Type::Match => pairwise::Op::Match,
            Type::Mismatch => pairwise::Op::Mismatch,
            Type::Equivalent => pairwise::Op::Equivalent,
        }
    }
}
