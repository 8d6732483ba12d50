use dioxus::prelude::*;

/// The one failure case a fetch can surface to the user.
///
/// Transport failures, non-2xx statuses and undecodable payloads all collapse
/// into the same message; the only recovery offered is a retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Fetch,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::Fetch => "Error fetching data",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Fetch),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

/// Lifecycle of a one-shot form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    Saving,
    Error(String),
}

/// Lifecycle of the delete confirmation's destructive action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteState {
    Idle,
    Deleting,
    Error(String),
}
