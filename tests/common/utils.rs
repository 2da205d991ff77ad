use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::Value;

use auth_forms::{
    browser::{
        navigator::RecordingNavigator,
        transport::{HttpReply, Transport, TransportError},
    },
    form::{controller::FormController, field::FieldName},
};

/// Transport that answers from a script and remembers what was sent.
/// Clones share state, so tests keep a handle after boxing one.
#[derive(Clone, Default)]
pub struct StubTransport {
    state: Rc<RefCell<StubState>>,
}

#[derive(Default)]
struct StubState {
    replies: VecDeque<Result<HttpReply, TransportError>>,
    sent: Vec<(String, Value)>,
}

impl StubTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        let stub = Self::default();
        stub.push_reply(status, body);
        stub
    }

    pub fn unreachable() -> Self {
        let stub = Self::default();
        stub.state
            .borrow_mut()
            .replies
            .push_back(Err(TransportError::Unavailable("connection refused".into())));
        stub
    }

    pub fn push_reply(&self, status: u16, body: &str) {
        self.state
            .borrow_mut()
            .replies
            .push_back(Ok(HttpReply::new(status, body)));
    }

    pub fn sent(&self) -> Vec<(String, Value)> {
        self.state.borrow().sent.clone()
    }
}

impl Transport for StubTransport {
    fn post_json(&self, endpoint: &str, payload: &Value) -> Result<HttpReply, TransportError> {
        let mut state = self.state.borrow_mut();
        state.sent.push((endpoint.to_string(), payload.clone()));
        state
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Unavailable("no scripted reply".into())))
    }
}

pub struct Harness {
    pub controller: FormController,
    pub transport: StubTransport,
    pub navigator: RecordingNavigator,
}

pub fn login_form(transport: StubTransport) -> Harness {
    let navigator = RecordingNavigator::new();
    let controller = FormController::login(Box::new(transport.clone()), Box::new(navigator.clone()));
    Harness {
        controller,
        transport,
        navigator,
    }
}

pub fn register_form(transport: StubTransport) -> Harness {
    let navigator = RecordingNavigator::new();
    let controller = FormController::register(Box::new(transport.clone()), Box::new(navigator.clone()));
    Harness {
        controller,
        transport,
        navigator,
    }
}

pub fn fill(controller: &mut FormController, values: &[(FieldName, &str)]) {
    for &(field, value) in values {
        assert!(controller.input(field, value), "form has no field {}", field);
    }
}

pub fn valid_registration() -> Vec<(FieldName, &'static str)> {
    vec![
        (FieldName::Name, "Maria Silva"),
        (FieldName::Phone, "11 99999-0000"),
        (FieldName::Handle, "@maria"),
        (FieldName::Email, "maria@example.com"),
        (FieldName::Password, "segredo123"),
        (FieldName::ConfirmPassword, "segredo123"),
    ]
}
