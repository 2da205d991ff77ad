use std::collections::BTreeMap;

use serde::Serialize;

use crate::form::{
    error::SubmissionError,
    field::FieldName,
    messages,
};

pub const DEFAULT_HOME_PATH: &str = "/home";
pub const DEFAULT_CONFIRMATION_PENDING_PATH: &str = "/register/success";

/// Server and network errors are shown on this field for both forms.
pub const DESIGNATED_ERROR_FIELD: FieldName = FieldName::Email;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormKind {
    Login,
    Register,
}

impl FormKind {
    pub fn fields(self) -> &'static [FieldName] {
        match self {
            FormKind::Login => &[FieldName::Email, FieldName::Password],
            FormKind::Register => &[
                FieldName::Name,
                FieldName::Phone,
                FieldName::Handle,
                FieldName::Email,
                FieldName::Password,
                FieldName::ConfirmPassword,
            ],
        }
    }

    pub fn default_endpoint(self) -> &'static str {
        match self {
            FormKind::Login => "/login",
            FormKind::Register => "/register",
        }
    }

    /// Fields that make it into the request body, in payload order.
    pub fn payload_fields(self) -> &'static [FieldName] {
        match self {
            FormKind::Login => &[FieldName::Email, FieldName::Password],
            FormKind::Register => &[
                FieldName::Name,
                FieldName::Phone,
                FieldName::Handle,
                FieldName::Email,
                FieldName::Password,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormPhase {
    Idle,
    Validating,
    Submitting,
    Navigating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Submitting,
}

/// The form's submit control. Disabled with a busy caption while a request
/// is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitButton {
    pub state: ButtonState,
    pub label: String,
    idle_caption: String,
    busy_caption: String,
}

impl SubmitButton {
    pub fn new(idle_caption: &str, busy_caption: &str) -> Self {
        Self {
            state: ButtonState::Idle,
            label: idle_caption.to_string(),
            idle_caption: idle_caption.to_string(),
            busy_caption: busy_caption.to_string(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.state == ButtonState::Idle
    }

    pub fn set_busy(&mut self) {
        self.state = ButtonState::Submitting;
        self.label = self.busy_caption.clone();
    }

    pub fn restore(&mut self) {
        self.state = ButtonState::Idle;
        self.label = self.idle_caption.clone();
    }
}

/// Everything about a form that differs between deployments.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSettings {
    pub endpoint: String,
    pub idle_caption: String,
    pub busy_caption: String,
    pub rejected_message: String,
    pub transport_failed_message: String,
    pub home_path: String,
    pub confirmation_pending_path: String,
}

impl FormSettings {
    pub fn for_kind(kind: FormKind) -> Self {
        let (idle_caption, rejected, transport_failed) = match kind {
            FormKind::Login => (
                messages::LOGIN_CAPTION,
                messages::LOGIN_REJECTED,
                messages::LOGIN_TRANSPORT_FAILED,
            ),
            FormKind::Register => (
                messages::REGISTER_CAPTION,
                messages::REGISTER_REJECTED,
                messages::REGISTER_TRANSPORT_FAILED,
            ),
        };

        Self {
            endpoint: kind.default_endpoint().to_string(),
            idle_caption: idle_caption.to_string(),
            busy_caption: messages::BUSY_CAPTION.to_string(),
            rejected_message: rejected.to_string(),
            transport_failed_message: transport_failed.to_string(),
            home_path: DEFAULT_HOME_PATH.to_string(),
            confirmation_pending_path: DEFAULT_CONFIRMATION_PENDING_PATH.to_string(),
        }
    }
}

/// A validated request, ready to send. Built only from values that passed
/// every check.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRequest {
    endpoint: String,
    payload: BTreeMap<String, String>,
}

impl SubmissionRequest {
    pub fn new(endpoint: &str, payload: BTreeMap<String, String>) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            payload,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn payload(&self) -> &BTreeMap<String, String> {
        &self.payload
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.payload
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Success {
        redirect_url: String,
        requires_confirmation: bool,
    },
    Failure {
        status: u16,
        message: String,
    },
    NetworkError {
        message: String,
    },
}

impl SubmissionOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            SubmissionOutcome::Success { .. } => OutcomeKind::Success,
            SubmissionOutcome::Failure { .. } => OutcomeKind::Failure,
            SubmissionOutcome::NetworkError { .. } => OutcomeKind::NetworkError,
        }
    }

    /// The redirect target on success, the terminal error otherwise.
    pub fn into_result(self) -> Result<String, SubmissionError> {
        match self {
            SubmissionOutcome::Success { redirect_url, .. } => Ok(redirect_url),
            SubmissionOutcome::Failure { status, message } => {
                Err(SubmissionError::ServerRejection { status, message })
            }
            SubmissionOutcome::NetworkError { message } => {
                Err(SubmissionError::Transport { message })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutcomeKind {
    Success,
    Failure,
    NetworkError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormEvent {
    Submit,
    Input(FieldName),
    ValidationFailed,
    ValidationPassed,
    Responded(OutcomeKind),
}
