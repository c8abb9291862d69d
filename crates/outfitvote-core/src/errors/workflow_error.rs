/// Workflow and state-machine errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    /// A delayed action of this kind is already pending.
    #[error("{action} is already in progress")]
    ActionInFlight { action: String },

    /// The completion channel closed before the action finished.
    #[error("{action} was aborted before completing")]
    ActionAborted { action: String },

    #[error("the vote session is already complete")]
    SessionComplete,

    #[error("no active vote session")]
    NoActiveSession,

    #[error("no outfit draft is open")]
    NoOpenDraft,

    /// The operation belongs to a different wizard step.
    #[error("{operation} is only available on {expected}, current step is {actual}")]
    NotOnStep {
        operation: String,
        expected: String,
        actual: String,
    },

    #[error("cannot move from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("unknown route: {0}")]
    UnknownRoute(String),
}
