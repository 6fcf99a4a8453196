//! Error value handed to exception-capture callbacks

use std::sync::Arc;

/// Callback invoked on `error` and `fatal` before anything is written
pub type CaptureCallback = Arc<dyn Fn(ContextualError) + Send + Sync>;

/// An error message tagged with the logger's context name.
///
/// Both parts stay separately inspectable; they are joined only when the
/// value is displayed, as `{context} => message`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{{{context}}} => {message}")]
pub struct ContextualError {
    context: String,
    message: String,
}

impl ContextualError {
    pub fn new(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Context name of the logger that raised the error
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Formatted log message
    pub fn message(&self) -> &str {
        &self.message
    }
}
