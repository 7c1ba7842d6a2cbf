pub use alignment::{Alignment, Op, Step};

pub mod alignment;
pub mod global;
pub mod scoring;
