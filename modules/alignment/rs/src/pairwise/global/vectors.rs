use std::mem;
use std::ops::Range;

use derive_more::{Deref, From, Into};

use crate::pairwise::scoring::gaps::{Affine, Costs};
use crate::pairwise::scoring::Scheme;
use crate::{Alignable, Score};

use super::problem::Exit;
use super::state::{PerState, State};

/// Source state of every state of a cell, `None` for unreachable states and the origin.
pub type Moves = PerState<Option<State>>;

/// Observes the decisions of a [`sweep`] cell by cell, row by row.
#[allow(unused_variables)]
pub trait Tracer {
    fn row_start(&mut self, row: usize) {}
    fn cell(&mut self, row: usize, col: usize, moves: Moves) {}
    fn row_end(&mut self, row: usize) {}
}

impl Tracer for () {}

/// Scores of the three states for every column of the last row of a sweep
#[derive(Clone, Eq, PartialEq, Debug, Deref, From, Into)]
pub struct Vectors<S: Score>(Vec<PerState<S>>);

impl<S: Score> Vectors<S> {
    pub fn unreachable(width: usize) -> Self {
        Self(vec![PerState::unreachable(); width + 1])
    }
}

#[inline(always)]
fn open_or_extend<S: Score>(source: &PerState<S>, gap: &Affine<S>, kind: State) -> (S, Option<State>) {
    let open = source.diagonal.plus(gap.open);
    let extend = source.get(kind).plus(gap.extend);
    if open.is_reachable() && open >= extend {
        (open, Some(State::Diagonal))
    } else if extend.is_reachable() {
        (extend, Some(kind))
    } else {
        (S::unreachable(), None)
    }
}

/// Linear-memory pass over `rows x cols` of the DP matrix starting at the top-left node with the
/// `origin` scores. Gaps open only from the diagonal state, there are no direct transitions
/// between the two gap states.
pub fn sweep<S, Sym, Q, T, Sch, Tr>(
    query: &Q,
    target: &T,
    rows: Range<usize>,
    cols: Range<usize>,
    origin: PerState<S>,
    scheme: &Sch,
    tracer: &mut Tr,
) -> Vectors<S>
where
    S: Score,
    Q: Alignable<Symbol = Sym>,
    T: Alignable<Symbol = Sym>,
    Sch: Scheme<Score = S, Symbol = Sym>,
    Tr: Tracer,
{
    let costs = Costs::of(scheme);
    let width = cols.len();

    let mut previous = vec![PerState::unreachable(); width + 1];
    let mut current = vec![PerState::unreachable(); width + 1];

    // First row: query gaps only
    tracer.row_start(0);
    previous[0] = origin;
    tracer.cell(0, 0, Moves::default());
    for col in 1..=width {
        let (score, from) = open_or_extend(&previous[col - 1], &costs.query, State::QueryGap);
        previous[col] = PerState::origin(State::QueryGap, score);
        tracer.cell(0, col, Moves::new(None, None, from));
    }
    tracer.row_end(0);

    for (row, qpos) in rows.enumerate().map(|(ind, pos)| (ind + 1, pos)) {
        tracer.row_start(row);
        let qsymbol = query.at(qpos);

        let (score, from) = open_or_extend(&previous[0], &costs.target, State::TargetGap);
        current[0] = PerState::origin(State::TargetGap, score);
        tracer.cell(row, 0, Moves::new(None, from, None));

        for col in 1..=width {
            let (source, best) = previous[col - 1].best();
            let (diagonal, dfrom) = match best.is_reachable() {
                true => (
                    best + scheme.score(qsymbol, target.at(cols.start + col - 1)),
                    Some(source),
                ),
                false => (S::unreachable(), None),
            };
            let (target_gap, tfrom) =
                open_or_extend(&previous[col], &costs.target, State::TargetGap);
            let (query_gap, qfrom) = open_or_extend(&current[col - 1], &costs.query, State::QueryGap);

            current[col] = PerState::new(diagonal, target_gap, query_gap);
            tracer.cell(row, col, Moves::new(dfrom, tfrom, qfrom));
        }
        tracer.row_end(row);
        mem::swap(&mut previous, &mut current);
    }
    Vectors(previous)
}

/// Forward scores of all paths from the top-left corner in the `entry` state to every node of
/// the last row.
pub fn forward<S, Sym, Q, T, Sch>(
    query: &Q,
    target: &T,
    rows: Range<usize>,
    cols: Range<usize>,
    entry: State,
    scheme: &Sch,
) -> Vectors<S>
where
    S: Score,
    Q: Alignable<Symbol = Sym>,
    T: Alignable<Symbol = Sym>,
    Sch: Scheme<Score = S, Symbol = Sym>,
{
    let origin = PerState::origin(entry, S::zero());
    sweep(query, target, rows, cols, origin, scheme, &mut ())
}

/// Backward scores of all paths from every node of the first row to the bottom-right corner,
/// honouring the `exit` constraint. Column `j` of the result is the node `cols.start + j` and its
/// state is the kind of the first move leaving that node.
pub fn reverse<S, Sym, Q, T, Sch>(
    query: &Q,
    target: &T,
    rows: Range<usize>,
    cols: Range<usize>,
    exit: Exit,
    scheme: &Sch,
) -> Vectors<S>
where
    S: Score,
    Q: Alignable<Symbol = Sym>,
    T: Alignable<Symbol = Sym>,
    Sch: Scheme<Score = S, Symbol = Sym>,
{
    let width = cols.len();
    let costs = Costs::of(scheme);

    // The last move is forced by the exit: consume it upfront and seed the origin with its score
    let (drop_rows, drop_cols) = match exit {
        Exit::Any => (0, 0),
        Exit::Exactly(State::TargetGap) => (1, 0),
        Exit::Exactly(State::QueryGap) => (0, 1),
        Exit::Exactly(State::Diagonal) => (1, 1),
    };
    if drop_rows > rows.len() || drop_cols > width {
        return Vectors::unreachable(width);
    }
    let (qend, tend) = (rows.end - drop_rows, cols.end - drop_cols);

    let origin = match exit {
        Exit::Any => PerState::origin(State::Diagonal, S::zero()),
        Exit::Exactly(State::TargetGap) => PerState::origin(State::TargetGap, costs.target.open),
        Exit::Exactly(State::QueryGap) => PerState::origin(State::QueryGap, costs.query.open),
        Exit::Exactly(State::Diagonal) => PerState::origin(
            State::Diagonal,
            scheme.score(query.at(qend), target.at(tend)),
        ),
    };

    let (query, target) = (query.reversed(), target.reversed());
    let swept = sweep(
        &query,
        &target,
        query.mirror(rows.start..qend),
        target.mirror(cols.start..tend),
        origin,
        scheme,
        &mut (),
    );

    let mut result = vec![PerState::unreachable(); width + 1];
    let last = width - drop_cols;
    for (col, scores) in swept.iter().enumerate() {
        result[last - col] = *scores;
    }
    Vectors(result)
}
