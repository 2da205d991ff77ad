pub mod controller;
pub mod error;
pub mod field;
pub mod form_model;
pub mod messages;
pub mod response;
pub mod rules;
pub mod transition;
pub mod validator;
