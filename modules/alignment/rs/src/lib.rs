pub use linalign_core_rs::alignment::{Alignable, Reversed};
use linalign_core_rs::num::PrimSInt;

pub mod pairwise;

/// Alignment score. Scores are maximised; penalties are negative scores.
pub trait Score: PrimSInt + Send + Sync + 'static {
    /// Sentinel for DP cells that no admissible path reaches. It absorbs any finite increment
    /// applied with [`Score::plus`], so unreachable cells never become reachable by accident.
    #[inline(always)]
    fn unreachable() -> Self {
        let four = Self::one() + Self::one() + Self::one() + Self::one();
        Self::min_value() / four
    }

    #[inline(always)]
    fn is_reachable(&self) -> bool {
        *self > Self::unreachable()
    }

    /// `self + delta`, keeping unreachable values unreachable.
    #[inline(always)]
    fn plus(self, delta: Self) -> Self {
        if self.is_reachable() {
            self + delta
        } else {
            Self::unreachable()
        }
    }
}

impl<T: PrimSInt + Send + Sync + 'static> Score for T {}
