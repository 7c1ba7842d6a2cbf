use std::borrow::Borrow;
use std::fmt::Display;

use derive_getters::{Dissolve, Getters};
use eyre::Result;

use linalign_core_rs::num::PrimUInt;

use super::op::Op;

/// A run of identical alignment columns
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step<Len: PrimUInt> {
    /// Number of consecutive columns. Guaranteed to be greater than zero.
    len: Len,
    op: Op,
}

impl<Len: PrimUInt> Step<Len> {
    pub fn new(op: Op, len: Len) -> Result<Self> {
        if len.is_zero() {
            return Err(eyre::eyre!("Step length must be greater than zero"));
        }
        Ok(Self { len, op })
    }

    /// Run-length encode alignment columns. Runs longer than `Len::max_value()` are split into
    /// several steps.
    pub fn encode(ops: impl IntoIterator<Item = Op>) -> Vec<Step<Len>> {
        let mut steps: Vec<Step<Len>> = Vec::new();
        for op in ops {
            match steps.last_mut() {
                Some(last) if last.op == op && last.len < Len::max_value() => {
                    last.len = last.len + Len::one();
                }
                _ => steps.push(Step {
                    len: Len::one(),
                    op,
                }),
            }
        }
        steps
    }

    /// Encode steps as `<len><symbol>` pairs, e.g. `1v3=`.
    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step<Len>>>) -> String
    where
        Len: Display,
    {
        steps
            .map(|step| {
                let step = step.borrow();
                format!("{}{}", step.len(), step.op().symbol())
            })
            .collect()
    }
}
