use std::fmt;

use thiserror::Error;

use crate::form::field::FieldName;

/// A client-side check that blocked submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldName,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FieldName, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Why a submission attempt ended without navigating. Every variant is
/// terminal for the attempt and recoverable by resubmitting.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Client-detected, field-scoped; no request was sent.
    #[error("{} field(s) failed validation: {}", .0.len(), join_errors(.0))]
    Validation(Vec<FieldError>),

    /// The server answered but did not report success.
    #[error("server rejected the submission (HTTP {status}): {message}")]
    ServerRejection { status: u16, message: String },

    /// The request never produced a usable answer.
    #[error("submission failed: {message}")]
    Transport { message: String },

    /// The form was not in a state that accepts a submit.
    #[error("form is busy")]
    Busy,
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
