use std::fmt;

use serde::Serialize;

/// The input controls the two auth forms are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldName {
    Name,
    Phone,
    Handle,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// DOM id of the control, also used as the payload key where one exists.
    pub fn id(self) -> &'static str {
        match self {
            FieldName::Name => "nome",
            FieldName::Phone => "telefone",
            FieldName::Handle => "instagram",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirm-password",
        }
    }

    /// Secrets are sent untrimmed and never echoed into traces.
    pub fn is_secret(self) -> bool {
        matches!(self, FieldName::Password | FieldName::ConfirmPassword)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: FieldName,
    pub raw_value: String,
    pub error_message: Option<String>,
}

impl FormField {
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            raw_value: String::new(),
            error_message: None,
        }
    }

    /// Value as the checks see it: secrets raw, everything else trimmed.
    pub fn value(&self) -> &str {
        if self.name.is_secret() {
            &self.raw_value
        } else {
            self.raw_value.trim()
        }
    }
}

/// Where field-scoped messages go. At most one message per field is active;
/// showing a new one replaces the old.
pub trait ErrorPresenter {
    fn show_field_error(&mut self, field: FieldName, message: &str);
    fn clear_field_error(&mut self, field: FieldName);
}

/// The controls of one form, in display order.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    fields: Vec<FormField>,
}

impl FieldSet {
    pub fn new(names: &[FieldName]) -> Self {
        Self {
            fields: names.iter().copied().map(FormField::new).collect(),
        }
    }

    pub fn get(&self, name: FieldName) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn get_mut(&mut self, name: FieldName) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Checked value of a field, empty when the form has no such field.
    pub fn value(&self, name: FieldName) -> &str {
        self.get(name).map(FormField::value).unwrap_or("")
    }

    /// Returns false when the form has no such field.
    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) -> bool {
        match self.get_mut(name) {
            Some(field) => {
                field.raw_value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn error(&self, name: FieldName) -> Option<&str> {
        self.get(name).and_then(|f| f.error_message.as_deref())
    }

    /// Fields currently showing a message, in display order.
    pub fn errors(&self) -> Vec<(FieldName, &str)> {
        self.fields
            .iter()
            .filter_map(|f| f.error_message.as_deref().map(|m| (f.name, m)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter()
    }
}

impl ErrorPresenter for FieldSet {
    fn show_field_error(&mut self, field: FieldName, message: &str) {
        if let Some(f) = self.get_mut(field) {
            f.error_message = Some(message.to_string());
        }
    }

    fn clear_field_error(&mut self, field: FieldName) {
        if let Some(f) = self.get_mut(field) {
            f.error_message = None;
        }
    }
}
