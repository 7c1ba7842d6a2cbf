pub use aligner::{Builder, GlobalAligner};
pub use anchors::{Anchor, Anchors};
pub use config::Config;
pub use error::{Error, Result};
pub use problem::{Exit, SubProblem};
pub use result::{GlobalAlignment, Pair, GAP};
pub use solution::{Column, Solution};
pub use state::{PerState, State};

mod aligner;
mod anchors;
mod config;
pub mod cut;
pub mod dnc;
mod error;
pub mod full;
pub mod multicut;
mod problem;
mod result;
mod solution;
mod state;
pub mod vectors;
