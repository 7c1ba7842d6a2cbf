use derive_more::{Display, Error};

/// Failures of the global aligner
#[derive(Clone, PartialEq, Eq, Debug, Display, Error)]
pub enum Error {
    /// Malformed or missing input, reported before any DP work starts
    #[display("invalid {field}: {reason}")]
    Configuration { field: &'static str, reason: String },
    /// A logic defect, e.g. a cut search without an admissible crossing
    #[display("internal invariant violated: {reason}")]
    InternalInvariantViolation { reason: String },
    #[display("alignment was cancelled")]
    Cancelled,
}

impl Error {
    pub fn configuration(field: &'static str, reason: impl Into<String>) -> Self {
        Error::Configuration {
            field,
            reason: reason.into(),
        }
    }

    pub fn invariant(reason: impl Into<String>) -> Self {
        Error::InternalInvariantViolation {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
