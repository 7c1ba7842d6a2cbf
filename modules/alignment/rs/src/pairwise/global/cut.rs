use crate::pairwise::scoring::gaps::Costs;
use crate::Score;

use super::error::{Error, Result};
use super::state::{PerState, State};
use super::vectors::Vectors;

/// Node and state where an optimal path crosses the middle row of a sub-problem
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Cut<S: Score> {
    /// Offset from the first column of the sub-problem
    pub column: usize,
    /// State of the last move of the upper half
    pub state: State,
    /// Score of the whole path
    pub score: S,
}

#[inline(always)]
fn join<S: Score>(head: S, tail: S) -> S {
    if head.is_reachable() && tail.is_reachable() {
        head + tail
    } else {
        S::unreachable()
    }
}

/// Best score of a path that reaches the node in `state` and continues with the `tail` scores.
/// A gap run spanning the node must not pay its opening twice.
#[inline(always)]
fn crossing<S: Score>(head: &PerState<S>, tail: &PerState<S>, state: State, costs: &Costs<S>) -> S {
    let tail = match state {
        State::Diagonal => tail.max(),
        State::TargetGap => tail
            .diagonal
            .max(tail.target_gap.plus(costs.target.extend - costs.target.open)),
        State::QueryGap => tail
            .diagonal
            .max(tail.query_gap.plus(costs.query.extend - costs.query.open)),
    };
    join(*head.get(state), tail)
}

/// Combine forward scores of the upper half with reverse scores of the lower half.
///
/// The highest score wins. Equal scores prefer diagonal crossings, then the leftmost column, then
/// the state order of [`State::ALL`].
pub fn find<S: Score>(forward: &Vectors<S>, reverse: &Vectors<S>, costs: &Costs<S>) -> Result<Cut<S>> {
    if forward.len() != reverse.len() {
        return Err(Error::invariant(format!(
            "forward ({}) and reverse ({}) vectors have different widths",
            forward.len(),
            reverse.len()
        )));
    }

    let mut best: Option<Cut<S>> = None;
    for (column, (head, tail)) in forward.iter().zip(reverse.iter()).enumerate() {
        for state in State::ALL {
            let score = crossing(head, tail, state, costs);
            if !score.is_reachable() {
                continue;
            }

            let replace = match &best {
                None => true,
                Some(cut) => {
                    score > cut.score
                        || (score == cut.score
                            && state == State::Diagonal
                            && cut.state != State::Diagonal)
                }
            };
            if replace {
                best = Some(Cut {
                    column,
                    state,
                    score,
                });
            }
        }
    }
    best.ok_or_else(|| Error::invariant("no admissible crossing of the middle row"))
}
