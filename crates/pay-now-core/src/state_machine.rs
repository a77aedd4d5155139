use thiserror::Error;

/// Display mode of the widget. Exactly one dialog is visible at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Closed,
    Open,
    Success,
    Failed(String),
}

impl UiState {
    pub fn name(&self) -> &'static str {
        match self {
            UiState::Closed => "Closed",
            UiState::Open => "Open",
            UiState::Success => "Success",
            UiState::Failed(_) => "Failed",
        }
    }

    pub fn is_dialog(&self) -> bool {
        matches!(self, UiState::Success | UiState::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Open,
    Close,
    Succeed,
    Fail(String),
    Dismiss,
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::Open => "open",
            UiAction::Close => "close",
            UiAction::Succeed => "succeed",
            UiAction::Fail(_) => "fail",
            UiAction::Dismiss => "dismiss",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTransition {
    pub from: UiState,
    pub to: UiState,
    pub reason: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("illegal ui transition: {from} --{action}-->")]
    Illegal {
        from: &'static str,
        action: &'static str,
    },
}

pub fn transition(
    state: &UiState,
    action: UiAction,
) -> Result<(UiState, StateTransition), TransitionError> {
    let (next, reason) = match (state, &action) {
        (UiState::Closed, UiAction::Open) => (UiState::Open, "form opened"),
        (UiState::Open, UiAction::Open) => (UiState::Open, "form already open"),
        (_, UiAction::Close) => (UiState::Closed, "closed"),
        (UiState::Open, UiAction::Succeed) => (UiState::Success, "payment accepted"),
        (UiState::Open, UiAction::Fail(message)) => {
            (UiState::Failed(message.clone()), "payment rejected")
        }
        (UiState::Success, UiAction::Dismiss) => (UiState::Closed, "success dismissed"),
        (UiState::Failed(_), UiAction::Dismiss) => (UiState::Closed, "error dismissed"),
        _ => {
            return Err(TransitionError::Illegal {
                from: state.name(),
                action: action.name(),
            })
        }
    };

    Ok((
        next.clone(),
        StateTransition {
            from: state.clone(),
            to: next,
            reason,
        },
    ))
}
