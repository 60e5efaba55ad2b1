use std::time;
use thiserror::Error;

/// Error produced when a search stops without a solution.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The frontier emptied before any goal state was popped.
    #[error("No path to a goal state exists")]
    NoResultFound,

    /// More states would have been expanded than the configured step limit.
    #[error("Step limit exhausted after {0} expansions")]
    StepLimitExhausted(usize),

    #[error("Time limit exhausted after {0:?}")]
    TimeLimitExhausted(time::Duration),
}

impl SearchError {
    /// Did the search give up because of a configured limit, rather
    /// than by proving that no goal is reachable?
    pub fn is_limit(&self) -> bool {
        !matches!(self, SearchError::NoResultFound)
    }
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
