use crate::Score;

/// DP state of an alignment path at a matrix node, i.e. the kind of the last move into it.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum State {
    /// No gap is pending: the last column paired a query symbol with a target symbol
    Diagonal,
    /// The last column holds a gap in the target (vertical move, consumes a query symbol)
    TargetGap,
    /// The last column holds a gap in the query (horizontal move, consumes a target symbol)
    QueryGap,
}

impl State {
    /// All states in the order used to break ties between equal cut crossings
    pub const ALL: [State; 3] = [State::Diagonal, State::TargetGap, State::QueryGap];
}

/// One value per DP state
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Default)]
pub struct PerState<T> {
    pub diagonal: T,
    pub target_gap: T,
    pub query_gap: T,
}

impl<T> PerState<T> {
    pub fn new(diagonal: T, target_gap: T, query_gap: T) -> Self {
        Self {
            diagonal,
            target_gap,
            query_gap,
        }
    }

    #[inline(always)]
    pub fn get(&self, state: State) -> &T {
        match state {
            State::Diagonal => &self.diagonal,
            State::TargetGap => &self.target_gap,
            State::QueryGap => &self.query_gap,
        }
    }

    #[inline(always)]
    pub fn get_mut(&mut self, state: State) -> &mut T {
        match state {
            State::Diagonal => &mut self.diagonal,
            State::TargetGap => &mut self.target_gap,
            State::QueryGap => &mut self.query_gap,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(State, T) -> U) -> PerState<U> {
        PerState {
            diagonal: f(State::Diagonal, self.diagonal),
            target_gap: f(State::TargetGap, self.target_gap),
            query_gap: f(State::QueryGap, self.query_gap),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (State, &T)> {
        State::ALL.into_iter().map(move |state| (state, self.get(state)))
    }
}

impl<S: Score> PerState<S> {
    #[inline(always)]
    pub fn unreachable() -> Self {
        Self::new(S::unreachable(), S::unreachable(), S::unreachable())
    }

    /// Only `state` is reachable and it holds `score`.
    pub fn origin(state: State, score: S) -> Self {
        let mut result = Self::unreachable();
        *result.get_mut(state) = score;
        result
    }

    /// The best state and its score. Ties prefer target gaps, then query gaps, then the diagonal,
    /// so that among equal paths the traceback keeps gap runs as close to the end as possible.
    #[inline(always)]
    pub fn best(&self) -> (State, S) {
        let mut best = (State::TargetGap, self.target_gap);
        if self.query_gap > best.1 {
            best = (State::QueryGap, self.query_gap);
        }
        if self.diagonal > best.1 {
            best = (State::Diagonal, self.diagonal);
        }
        best
    }

    #[inline(always)]
    pub fn max(&self) -> S {
        self.best().1
    }
}
