//! # tablebook-forms
//!
//! Declarative form fields, validation and Bootstrap 5 rendering.
//!
//! This crate provides:
//! - Form field definitions carrying ordered validator chains
//! - A validation pass that reports the first failure per field
//! - Per-session form state with submit gating
//! - Bootstrap 5 form widgets and rendering helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use tablebook_forms::{
//!     render_bootstrap_form, validate_fields, FormBuilder, FormFieldDef, FormOptions,
//! };
//! use tablebook_forms::validation::{EmailValidator, RequiredValidator};
//! use tablebook_forms::widgets::BootstrapTextInput;
//!
//! let fields = FormBuilder::new()
//!     .field(
//!         FormFieldDef::new("email", "Email", BootstrapTextInput::email())
//!             .required()
//!             .validator(RequiredValidator::with_message("Email is required"))
//!             .validator(EmailValidator::with_message("Invalid email")),
//!     )
//!     .build();
//!
//! let mut values = HashMap::new();
//! values.insert("email".to_string(), "invalid".to_string());
//!
//! let errors = validate_fields(&fields, &values);
//! assert_eq!(errors.get("email"), Some("Invalid email"));
//!
//! let html = render_bootstrap_form(&fields, &values, &errors, &FormOptions::new());
//! assert!(html.contains("disabled"));
//! ```
//!
//! ## Form State
//!
//! ```rust
//! use tablebook_forms::{FormBuilder, FormFieldDef, FormState};
//! use tablebook_forms::validation::RequiredValidator;
//! use tablebook_forms::widgets::BootstrapTextInput;
//!
//! let fields = FormBuilder::new()
//!     .field(
//!         FormFieldDef::new("name", "Name", BootstrapTextInput::new())
//!             .required()
//!             .validator(RequiredValidator::with_message("Name is required")),
//!     )
//!     .build();
//!
//! let mut state = FormState::new();
//! assert!(!state.submit(&fields).is_empty());
//! assert!(state.is_submit_disabled());
//!
//! state.set_value(&fields, "name", "Ada").unwrap();
//! assert!(!state.is_submit_disabled());
//! ```
//!
//! ## Widgets
//!
//! Available Bootstrap 5 widgets:
//! - `BootstrapTextInput` - Text, email, date, time and number inputs
//! - `BootstrapTextarea` - Multi-line text input

mod error;
mod form;
mod state;
pub mod validation;
pub mod widgets;

pub use error::{FormError, Result, ValidationErrors};
pub use form::{
    find_field, render_bootstrap_field, render_bootstrap_form, validate_fields, FormBuilder,
    FormFieldDef, FormOptions,
};
pub use state::{FormState, RevalidateMode};
