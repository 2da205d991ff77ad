use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::form::{
    form_model::{FormEvent, FormKind, FormPhase, SubmissionOutcome, SubmissionRequest},
    transition::Transition,
};

/// One line of the submission trace: a single transition of one form.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub step: u64,

    pub form: FormKind,
    pub from: FormPhase,
    pub to: FormPhase,

    pub event: String,
    pub effect: String,

    pub payload_fingerprint: Option<String>,
    pub outcome: Option<String>,
}

impl TraceEvent {
    pub fn now(step: u64, form: FormKind, from: FormPhase, event: FormEvent, t: &Transition) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            step,
            form,
            from,
            to: t.next,
            event: format!("{:?}", event),
            effect: format!("{:?}", t.effect),
            payload_fingerprint: None,
            outcome: None,
        }
    }

    pub fn with_request(mut self, request: &SubmissionRequest) -> Self {
        self.payload_fingerprint = Some(payload_fingerprint(request));
        self
    }

    /// Records the outcome kind and, for success, the redirect target.
    /// Server messages are left out: they can echo user input.
    pub fn with_outcome(mut self, outcome: &SubmissionOutcome) -> Self {
        self.outcome = Some(match outcome {
            SubmissionOutcome::Success { redirect_url, .. } => format!("Success -> {}", redirect_url),
            SubmissionOutcome::Failure { status, .. } => format!("Failure (HTTP {})", status),
            SubmissionOutcome::NetworkError { .. } => "NetworkError".to_string(),
        });
        self
    }
}

/// SHA-1 over the request's canonical JSON. Lets two traces be compared
/// without ever writing a password to disk.
pub fn payload_fingerprint(request: &SubmissionRequest) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(request.endpoint().as_bytes());
    hasher.update(request.to_json().to_string().as_bytes());
    format!("{:x}", hasher.finalize())
}
