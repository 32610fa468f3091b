use crate::{ErrorKind, Result};

/// Shown for every failed fetch, whatever the cause.
pub const FETCH_FAILED_MESSAGE: &str = "Unable to fetch employee data.";

/// The three mutually exclusive states a data-backed page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    Failed(ErrorKind),
    Ready(T),
}

impl<T> ViewState<T> {
    /// `None` means the fetch has not completed yet.
    pub fn resolve(outcome: Option<Result<T>>) -> Self {
        match outcome {
            None => ViewState::Loading,
            Some(Ok(value)) => ViewState::Ready(value),
            Some(Err(error)) => ViewState::Failed(error.kind),
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            ViewState::Failed(_) => Some(FETCH_FAILED_MESSAGE),
            _ => None,
        }
    }
}
