use serde::Serialize;

use crate::form::{
    field::FieldName,
    form_model::{FormEvent, FormPhase, OutcomeKind},
};

/// What the controller must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effect {
    RunValidation,
    ShowFieldErrors,
    SendRequest,
    Navigate,
    ShowDesignatedError,
    ClearFieldError(FieldName),
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub next: FormPhase,
    pub effect: Effect,
}

impl Transition {
    fn to(next: FormPhase, effect: Effect) -> Self {
        Self { next, effect }
    }

    fn stay(phase: FormPhase) -> Self {
        Self::to(phase, Effect::Ignore)
    }
}

/// The form state machine as a table. Pure: the controller applies the
/// returned effect.
pub fn transition(phase: FormPhase, event: FormEvent) -> Transition {
    use FormPhase::*;

    match (phase, event) {
        // Page unload supersedes everything.
        (Navigating, _) => Transition::stay(Navigating),

        (_, FormEvent::Input(field)) => Transition::to(phase, Effect::ClearFieldError(field)),

        (Idle, FormEvent::Submit) => Transition::to(Validating, Effect::RunValidation),

        (Validating, FormEvent::ValidationFailed) => Transition::to(Idle, Effect::ShowFieldErrors),
        (Validating, FormEvent::ValidationPassed) => Transition::to(Submitting, Effect::SendRequest),

        (Submitting, FormEvent::Responded(OutcomeKind::Success)) => {
            Transition::to(Navigating, Effect::Navigate)
        }
        (Submitting, FormEvent::Responded(OutcomeKind::Failure | OutcomeKind::NetworkError)) => {
            Transition::to(Idle, Effect::ShowDesignatedError)
        }

        // Disabled button, duplicate submits, stray responses.
        (phase, _) => Transition::stay(phase),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_keeps_the_phase() {
        for phase in [FormPhase::Idle, FormPhase::Validating, FormPhase::Submitting] {
            let t = transition(phase, FormEvent::Input(FieldName::Email));
            assert_eq!(t.next, phase);
            assert_eq!(t.effect, Effect::ClearFieldError(FieldName::Email));
        }
    }

    #[test]
    fn responses_outside_submitting_are_ignored() {
        let t = transition(FormPhase::Idle, FormEvent::Responded(OutcomeKind::Success));
        assert_eq!(t, Transition::stay(FormPhase::Idle));
    }
}
