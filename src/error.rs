//! Error types for the draft CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for draft operations.
///
/// Each variant maps to a specific exit code. Transient input-validation
/// failures (for example a non-positive exercise count) never become a
/// `DraftError`; they are re-prompted inside the prompt loop.
#[derive(Error, Debug)]
pub enum DraftError {
    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// No header template is configured. This is always fatal at pipeline
    /// construction: nothing has been compiled or written when it is raised.
    #[error("no header template is configured; set `header` in your draftrc")]
    MissingHeader,

    /// A template could not be loaded or has invalid placeholder syntax.
    #[error("template error: {0}")]
    TemplateError(String),

    /// Interactive prompting failed (for example stdin was closed).
    #[error("prompt failed: {0}")]
    PromptError(String),

    /// A resolved supplement could not be written.
    #[error("failed to write output: {0}")]
    OutputError(String),
}

impl DraftError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DraftError::UserError(_) => exit_codes::USER_ERROR,
            DraftError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            DraftError::MissingHeader => exit_codes::CONFIG_FAILURE,
            DraftError::TemplateError(_) => exit_codes::TEMPLATE_FAILURE,
            DraftError::PromptError(_) => exit_codes::USER_ERROR,
            DraftError::OutputError(_) => exit_codes::OUTPUT_FAILURE,
        }
    }
}

/// Result type alias for draft operations.
pub type Result<T> = std::result::Result<T, DraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = DraftError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = DraftError::ConfigError("unparseable draftrc".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
    }

    #[test]
    fn missing_header_is_a_config_failure() {
        let err = DraftError::MissingHeader;
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
    }

    #[test]
    fn template_error_has_correct_exit_code() {
        let err = DraftError::TemplateError("unknown template 'exam'".to_string());
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);
    }

    #[test]
    fn output_error_has_correct_exit_code() {
        let err = DraftError::OutputError("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::OUTPUT_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = DraftError::MissingHeader;
        assert!(err.to_string().contains("header"));

        let err = DraftError::TemplateError("unknown template 'exam'".to_string());
        assert_eq!(err.to_string(), "template error: unknown template 'exam'");
    }
}
