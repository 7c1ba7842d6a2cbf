use std::fmt::Display;
use std::ops::Range;

use derive_getters::{Dissolve, Getters};
use derive_more::{Constructor, From, Into};

use linalign_core_rs::num::PrimUInt;

use super::step::Step;
use crate::Score;

/// Run-length encoded alignment between two sequences.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Constructor, Dissolve, From, Into)]
pub struct Alignment<S, StepLen, Seq1Idx, Seq2Idx>
where
    S: Score,
    StepLen: PrimUInt + Into<Seq1Idx> + Into<Seq2Idx>,
    Seq1Idx: PrimUInt,
    Seq2Idx: PrimUInt,
{
    score: S,
    steps: Vec<Step<StepLen>>,
    seq1: Range<Seq1Idx>,
    seq2: Range<Seq2Idx>,
}

impl<S, StepLen, Seq1Idx, Seq2Idx> Alignment<S, StepLen, Seq1Idx, Seq2Idx>
where
    S: Score,
    StepLen: PrimUInt + Into<Seq1Idx> + Into<Seq2Idx>,
    Seq1Idx: PrimUInt,
    Seq2Idx: PrimUInt,
{
    pub fn is_empty(&self) -> bool {
        // Steps always have a non-zero length
        self.steps.is_empty()
    }

    /// Total number of alignment columns
    pub fn len<Acc: PrimUInt + From<StepLen>>(&self) -> Acc {
        self.steps
            .iter()
            .fold(Acc::zero(), |total, step| {
                total + <Acc as From<StepLen>>::from(*step.len())
            })
    }

    pub fn rle(&self) -> String
    where
        StepLen: Display,
    {
        Step::rle_string(self.steps.iter())
    }
}
