//! Login and registration form logic, without a DOM.
//!
//! A [`form::controller::FormController`] owns one form's fields and submit
//! button, validates on submit, sends a single JSON request through an
//! injected [`browser::transport::Transport`], and either navigates through
//! a [`browser::navigator::Navigator`] or shows the error on the form.

pub mod browser;
pub mod cli;
pub mod form;
pub mod trace;
pub mod ui;
