//! # tablebook
//!
//! A table booking form: name, email, date, time, number of guests and an
//! optional special request.
//!
//! The form validates on submit. While any field shows an error the submit
//! button stays disabled; once every field passes, the booking is handed to
//! a [`Notifier`] (the user-facing confirmation) and a [`BookingSink`]
//! (whatever consumes bookings).
//!
//! ## Quick Start
//!
//! ```rust
//! use tablebook::{BookingField, BookingForm, RecordingNotifier, RecordingSink};
//!
//! let mut form = BookingForm::new();
//! let mut notifier = RecordingNotifier::default();
//! let mut sink = RecordingSink::default();
//!
//! // An empty click shows every required-field error.
//! let outcome = form.submit(&mut notifier, &mut sink).unwrap();
//! assert_eq!(outcome.errors().unwrap().len(), 5);
//! assert!(form.is_submit_disabled());
//!
//! form.set_value(BookingField::Name, "Jane").unwrap();
//! form.set_value(BookingField::Email, "jane@example.com").unwrap();
//! form.set_value(BookingField::Date, "2024-11-11").unwrap();
//! form.set_value(BookingField::Time, "19:30").unwrap();
//! form.set_value(BookingField::Guests, "2").unwrap();
//! assert!(!form.is_submit_disabled());
//!
//! let outcome = form.submit(&mut notifier, &mut sink).unwrap();
//! assert_eq!(outcome.booking().unwrap().guests, 2);
//! assert_eq!(notifier.messages, vec!["Reservation submitted!"]);
//! ```
//!
//! ## Validating Without State
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use tablebook::SubmitController;
//!
//! let mut values = HashMap::new();
//! values.insert("guests".to_string(), "21".to_string());
//!
//! let errors = SubmitController::new().attempt_submit(&values).unwrap_err();
//! assert_eq!(errors.get("guests"), Some("Maximum 20 guests"));
//! ```

pub mod booking;
mod component;
mod error;
mod notify;
mod page;
pub mod session;
mod submit;
mod values;

pub use booking::{fields, validate, BookingData, BookingField, MAX_GUESTS, MIN_GUESTS};
pub use component::{BookingForm, SubmitOutcome, SUBMIT_LABEL, TITLE};
pub use error::{BookingError, Result};
pub use notify::{
    BookingSink, JsonLinesSink, Notifier, RecordingNotifier, RecordingSink, TracingNotifier,
    TracingSink, WriterNotifier, CONFIRMATION,
};
pub use page::render_page;
pub use session::{run_session, SessionReport};
pub use submit::{SubmitController, SubmitPhase};
pub use tablebook_forms::ValidationErrors;
pub use values::{load_values, values_from_json};
