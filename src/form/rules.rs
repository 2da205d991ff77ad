use crate::form::{
    error::FieldError,
    field::{FieldName, FieldSet},
    form_model::FormKind,
    messages,
    validator::{is_valid_email, is_valid_password},
};

/// Result of checking one field. `Ok` clears any message the field shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    pub field: FieldName,
    pub result: Result<(), &'static str>,
}

impl FieldCheck {
    fn new(field: FieldName, result: Result<(), &'static str>) -> Self {
        Self { field, result }
    }

    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

pub fn run_checks(kind: FormKind, fields: &FieldSet) -> Vec<FieldCheck> {
    match kind {
        FormKind::Login => check_login(fields),
        FormKind::Register => check_register(fields),
    }
}

/// Login stops at the first failing field; later fields are not checked
/// and keep whatever message they already show.
pub fn check_login(fields: &FieldSet) -> Vec<FieldCheck> {
    let mut checks = Vec::new();

    for check in [
        FieldCheck::new(FieldName::Email, check_email(fields)),
        FieldCheck::new(FieldName::Password, required(fields, FieldName::Password, messages::PASSWORD_REQUIRED)),
    ] {
        let failed = !check.passed();
        checks.push(check);
        if failed {
            break;
        }
    }

    checks
}

/// Registration checks every field so all problems show at once.
pub fn check_register(fields: &FieldSet) -> Vec<FieldCheck> {
    vec![
        FieldCheck::new(FieldName::Name, required(fields, FieldName::Name, messages::NAME_REQUIRED)),
        FieldCheck::new(FieldName::Phone, required(fields, FieldName::Phone, messages::PHONE_REQUIRED)),
        FieldCheck::new(FieldName::Handle, required(fields, FieldName::Handle, messages::HANDLE_REQUIRED)),
        FieldCheck::new(FieldName::Email, check_email(fields)),
        FieldCheck::new(FieldName::Password, check_new_password(fields)),
        FieldCheck::new(FieldName::ConfirmPassword, check_confirmation(fields)),
    ]
}

pub fn failures(checks: &[FieldCheck]) -> Vec<FieldError> {
    checks
        .iter()
        .filter_map(|c| c.result.err().map(|msg| FieldError::new(c.field, msg)))
        .collect()
}

fn required(fields: &FieldSet, name: FieldName, message: &'static str) -> Result<(), &'static str> {
    if fields.value(name).is_empty() {
        Err(message)
    } else {
        Ok(())
    }
}

fn check_email(fields: &FieldSet) -> Result<(), &'static str> {
    required(fields, FieldName::Email, messages::EMAIL_REQUIRED)?;
    if is_valid_email(fields.value(FieldName::Email)) {
        Ok(())
    } else {
        Err(messages::EMAIL_INVALID)
    }
}

fn check_new_password(fields: &FieldSet) -> Result<(), &'static str> {
    required(fields, FieldName::Password, messages::PASSWORD_REQUIRED)?;
    if is_valid_password(fields.value(FieldName::Password)) {
        Ok(())
    } else {
        Err(messages::PASSWORD_TOO_SHORT)
    }
}

fn check_confirmation(fields: &FieldSet) -> Result<(), &'static str> {
    required(fields, FieldName::ConfirmPassword, messages::CONFIRM_REQUIRED)?;
    if fields.value(FieldName::ConfirmPassword) == fields.value(FieldName::Password) {
        Ok(())
    } else {
        Err(messages::PASSWORDS_DIFFER)
    }
}
