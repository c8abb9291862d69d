//! Error types. One enum per concern, wrapped by [`OutfitError`].

mod config_error;
mod validation_error;
mod workflow_error;

pub use config_error::ConfigError;
pub use validation_error::ValidationError;
pub use workflow_error::WorkflowError;

/// Top-level error for every fallible OutfitVote operation.
#[derive(Debug, thiserror::Error)]
pub enum OutfitError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("clipboard unavailable: {reason}")]
    Clipboard { reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl OutfitError {
    /// Whether the error stems from user input (as opposed to the environment).
    ///
    /// User-input failures are reported as transient notifications and never
    /// abort the workflow.
    pub fn is_user_input(&self) -> bool {
        matches!(self, OutfitError::Validation(_) | OutfitError::Workflow(_))
    }
}

pub type OutfitResult<T> = Result<T, OutfitError>;
