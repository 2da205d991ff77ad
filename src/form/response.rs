use serde::{Deserialize, de};
use serde_json::Value;
use tracing::error;

use crate::{
    browser::transport::{HttpReply, TransportError},
    form::form_model::{FormKind, FormSettings, SubmissionOutcome},
};

/// Body returned by `/login` and `/register`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub require_email_confirmation: bool,
}

/// Turn whatever the transport produced into the outcome that drives the
/// next UI transition.
pub fn interpret(
    kind: FormKind,
    settings: &FormSettings,
    reply: Result<HttpReply, TransportError>,
) -> SubmissionOutcome {
    let reply = match reply {
        Ok(reply) => reply,
        Err(e) => return network_error(kind, settings, &e),
    };

    let body = match parse_body(&reply.body) {
        Ok(body) => body,
        Err(source) => {
            let e = TransportError::MalformedBody {
                status: reply.status,
                source,
            };
            return network_error(kind, settings, &e);
        }
    };

    if !(reply.is_success() && body.success) {
        return SubmissionOutcome::Failure {
            status: reply.status,
            message: non_empty(body.message).unwrap_or_else(|| settings.rejected_message.clone()),
        };
    }

    let requires_confirmation = kind == FormKind::Register && body.require_email_confirmation;
    let redirect_url = non_empty(body.redirect).unwrap_or_else(|| {
        if requires_confirmation {
            settings.confirmation_pending_path.clone()
        } else {
            settings.home_path.clone()
        }
    });

    SubmissionOutcome::Success {
        redirect_url,
        requires_confirmation,
    }
}

/// Only a JSON object is a body. Arrays would otherwise fill the struct
/// positionally.
fn parse_body(raw: &str) -> Result<AuthResponse, serde_json::Error> {
    match serde_json::from_str::<Value>(raw)? {
        value @ Value::Object(_) => serde_json::from_value(value),
        _ => Err(de::Error::custom("expected a JSON object")),
    }
}

fn network_error(kind: FormKind, settings: &FormSettings, e: &TransportError) -> SubmissionOutcome {
    error!(form = ?kind, endpoint = %settings.endpoint, "submission failed: {}", e);
    SubmissionOutcome::NetworkError {
        message: settings.transport_failed_message.clone(),
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}
