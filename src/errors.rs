//! Error types for tagging and rewriting.
//!
//! Most failures belong to one sentence: a batch reports them in place and
//! moves on. [`InversionError::GenderPromptClosed`] and
//! [`InversionError::Config`] stop the caller.

use thiserror::Error;

/// Fixed apology shown to the user in place of a question when a sentence
/// cannot be inverted.
pub const APOLOGY_MESSAGE: &str =
    "Désolé, je n'ai pas compris cette phrase. Veuillez réessayer avec une autre formulation.";

/// Errors that can occur while tagging or rewriting a sentence.
#[derive(Debug, Error)]
pub enum InversionError {
    /// The external tagging call failed.
    #[error("tagging service unavailable: {message}")]
    TaggingUnavailable { message: String },

    /// No verb/subject pair could be located, or rendering ran past the tokens.
    #[error("unrecognizable sentence: {reason}")]
    UnrecognizableSentence { reason: String },

    /// The gender prompt answered something other than "masc" or "fem".
    #[error("invalid gender answer {answer:?}, expected \"masc\" or \"fem\"")]
    InvalidGenderInput { answer: String },

    /// The gender prompt stopped answering (closed input).
    #[error("gender prompt closed before a valid answer was given")]
    GenderPromptClosed,

    /// The tagger reported a part-of-speech tag outside the known set.
    #[error("unknown part-of-speech tag {tag:?}")]
    UnknownTag { tag: String },

    /// Vocabulary or rewriter configuration could not be used.
    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl InversionError {
    pub fn unrecognizable(reason: impl Into<String>) -> Self {
        InversionError::UnrecognizableSentence {
            reason: reason.into(),
        }
    }

    pub fn tagging_unavailable(message: impl ToString) -> Self {
        InversionError::TaggingUnavailable {
            message: message.to_string(),
        }
    }

    /// Whether a batch may report the failing sentence and carry on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            InversionError::GenderPromptClosed | InversionError::Config { .. }
        )
    }

    /// The message shown to the person at the console.
    pub fn user_message(&self) -> String {
        match self {
            InversionError::UnrecognizableSentence { .. } => APOLOGY_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type for tagging and rewriting operations.
pub type InversionResult<T> = Result<T, InversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognizable_shows_apology() {
        let err = InversionError::unrecognizable("no verb");
        assert_eq!(err.user_message(), APOLOGY_MESSAGE);
        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), "unrecognizable sentence: no verb");
    }

    #[test]
    fn tagging_failure_is_reported_per_sentence() {
        let err = InversionError::tagging_unavailable("connection refused");
        assert!(err.is_recoverable());
        assert_eq!(
            err.user_message(),
            "tagging service unavailable: connection refused"
        );
    }

    #[test]
    fn closed_prompt_and_config_stop_the_run() {
        assert!(!InversionError::GenderPromptClosed.is_recoverable());
        assert!(!InversionError::Config {
            message: "bad rule".to_string()
        }
        .is_recoverable());
        assert!(InversionError::UnknownTag {
            tag: "XYZ".to_string()
        }
        .is_recoverable());
    }
}
