use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::{
    browser::{navigator::Navigator, transport::Transport},
    form::{
        error::SubmissionError,
        field::{ErrorPresenter, FieldName, FieldSet},
        form_model::{
            DESIGNATED_ERROR_FIELD, FormEvent, FormKind, FormPhase, FormSettings, SubmissionOutcome,
            SubmissionRequest, SubmitButton,
        },
        response::interpret,
        rules::{failures, run_checks},
        transition::{Effect, Transition, transition},
    },
    trace::{logger::TraceLogger, trace::TraceEvent},
};

/// Drives one form from submit intent to a terminal UI state.
///
/// The controller owns its fields and submit button; the network and the
/// browser location are injected so the whole lifecycle runs without a DOM.
pub struct FormController {
    kind: FormKind,
    phase: FormPhase,
    fields: FieldSet,
    button: SubmitButton,
    settings: FormSettings,
    transport: Box<dyn Transport>,
    navigator: Box<dyn Navigator>,
    tracer: TraceLogger,
    step: u64,
}

impl FormController {
    pub fn new(
        kind: FormKind,
        settings: FormSettings,
        transport: Box<dyn Transport>,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        let button = SubmitButton::new(&settings.idle_caption, &settings.busy_caption);
        Self {
            kind,
            phase: FormPhase::Idle,
            fields: FieldSet::new(kind.fields()),
            button,
            settings,
            transport,
            navigator,
            tracer: TraceLogger::disabled(),
            step: 0,
        }
    }

    /// Login form with default captions, messages and paths.
    pub fn login(transport: Box<dyn Transport>, navigator: Box<dyn Navigator>) -> Self {
        Self::new(FormKind::Login, FormSettings::for_kind(FormKind::Login), transport, navigator)
    }

    /// Registration form with default captions, messages and paths.
    pub fn register(transport: Box<dyn Transport>, navigator: Box<dyn Navigator>) -> Self {
        Self::new(
            FormKind::Register,
            FormSettings::for_kind(FormKind::Register),
            transport,
            navigator,
        )
    }

    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = tracer;
        self
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    /// The user edited a field: store the value and drop that field's
    /// message. Other fields are not re-validated.
    ///
    /// Returns false when this form has no such field.
    pub fn input(&mut self, field: FieldName, value: &str) -> bool {
        if !self.fields.set_value(field, value) {
            warn!(form = ?self.kind, %field, "input for a field this form does not have");
            return false;
        }

        let t = self.fire(FormEvent::Input(field));
        if let Effect::ClearFieldError(f) = t.effect {
            self.fields.clear_field_error(f);
        }
        true
    }

    /// Submit click up to the point where a request would be sent: run the
    /// checks, and on success disable the button and hand back the request.
    pub fn begin_submission(&mut self) -> Result<SubmissionRequest, SubmissionError> {
        let t = self.fire(FormEvent::Submit);
        if t.effect != Effect::RunValidation {
            return Err(SubmissionError::Busy);
        }

        let checks = run_checks(self.kind, &self.fields);
        for check in &checks {
            match check.result {
                Ok(()) => self.fields.clear_field_error(check.field),
                Err(message) => self.fields.show_field_error(check.field, message),
            }
        }

        let errors = failures(&checks);
        if !errors.is_empty() {
            self.fire(FormEvent::ValidationFailed);
            return Err(SubmissionError::Validation(errors));
        }

        let request = self.build_request();
        let t = transition(self.phase, FormEvent::ValidationPassed);
        self.record(FormEvent::ValidationPassed, t, |e| e.with_request(&request));
        self.button.set_busy();

        Ok(request)
    }

    /// Apply the answer to an in-flight request.
    pub fn complete_submission(&mut self, outcome: &SubmissionOutcome) -> Transition {
        let event = FormEvent::Responded(outcome.kind());
        let t = transition(self.phase, event);
        self.record(event, t, |e| e.with_outcome(outcome));

        match (t.effect, outcome) {
            (Effect::Navigate, SubmissionOutcome::Success { redirect_url, .. }) => {
                self.navigator.assign(redirect_url);
            }
            (
                Effect::ShowDesignatedError,
                SubmissionOutcome::Failure { message, .. } | SubmissionOutcome::NetworkError { message },
            ) => {
                self.fields.show_field_error(DESIGNATED_ERROR_FIELD, message);
                self.button.restore();
            }
            _ => {}
        }

        t
    }

    /// One full attempt: validate, send once, apply the answer.
    ///
    /// Validation failures and submits while busy come back as `Err`; every
    /// outcome of an actual request comes back as `Ok`.
    pub fn submit(&mut self) -> Result<SubmissionOutcome, SubmissionError> {
        let request = self.begin_submission()?;

        let reply = self.transport.post_json(request.endpoint(), &request.to_json());
        let outcome = interpret(self.kind, &self.settings, reply);

        self.complete_submission(&outcome);
        Ok(outcome)
    }

    fn build_request(&self) -> SubmissionRequest {
        let payload: BTreeMap<String, String> = self
            .kind
            .payload_fields()
            .iter()
            .map(|&f| (f.id().to_string(), self.fields.value(f).to_string()))
            .collect();

        SubmissionRequest::new(&self.settings.endpoint, payload)
    }

    fn fire(&mut self, event: FormEvent) -> Transition {
        let t = transition(self.phase, event);
        self.record(event, t, |e| e);
        t
    }

    fn record(&mut self, event: FormEvent, t: Transition, decorate: impl FnOnce(TraceEvent) -> TraceEvent) {
        debug!(form = ?self.kind, from = ?self.phase, to = ?t.next, ?event, effect = ?t.effect, "transition");

        if self.tracer.is_enabled() {
            let trace = TraceEvent::now(self.step, self.kind, self.phase, event, &t);
            self.tracer.log(&decorate(trace));
        }

        self.step += 1;
        self.phase = t.next;
    }
}
