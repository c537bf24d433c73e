use thiserror::Error;

/// Failure modes of a simulation run.
///
/// Configuration problems are caught before any lattice mutation; a
/// [`Error::RandomSource`] aborts mid-run and leaves the lattice in its
/// partially mutated state (callers needing atomicity should run on a copy).
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("random source failure: {0}")]
    RandomSource(#[from] rand::Error),

    #[error("interrupted")]
    Interrupted,
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
