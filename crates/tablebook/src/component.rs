//! The booking form component: state, submit gate and rendering.

use ironhtml::html;
use ironhtml_elements::Div;
use tablebook_forms::{render_bootstrap_form, FormOptions, FormState, ValidationErrors};
use tracing::debug;

use crate::booking::{fields, BookingData, BookingField};
use crate::error::Result;
use crate::notify::{BookingSink, Notifier, CONFIRMATION};
use crate::submit::{SubmitController, SubmitPhase};

/// Text of the submit button.
pub const SUBMIT_LABEL: &str = "Submit Reservation";

/// Heading above the form.
pub const TITLE: &str = "Book a Table";

/// What a submit click led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the booking was handed to the collaborators.
    Submitted(BookingData),
    /// At least one field failed, or the button was disabled.
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    /// Returns the booking if the submission went through.
    pub fn booking(&self) -> Option<&BookingData> {
        match self {
            Self::Submitted(booking) => Some(booking),
            Self::Rejected(_) => None,
        }
    }

    /// Returns the errors if the submission was rejected.
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Submitted(_) => None,
            Self::Rejected(errors) => Some(errors),
        }
    }
}

/// A table booking form for one session.
///
/// Validation runs when the form is submitted. After the first attempt,
/// editing a field revalidates just that field, so its error disappears as
/// soon as the input is fixed. The submit button is disabled while any
/// error is shown.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    state: FormState,
    controller: SubmitController,
}

impl BookingForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw input of `field`.
    pub fn value(&self, field: BookingField) -> &str {
        self.state.value(field.name())
    }

    /// Records new input for `field`.
    pub fn set_value(&mut self, field: BookingField, value: impl Into<String>) -> Result<()> {
        self.state.set_value(fields(), field.name(), value)?;
        self.controller.reset();
        Ok(())
    }

    /// Records new input for the field called `name`.
    pub fn set_value_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = name.parse::<BookingField>()?;
        self.set_value(field, value)
    }

    /// Returns the errors currently shown.
    pub fn errors(&self) -> &ValidationErrors {
        self.state.errors()
    }

    /// Returns the error currently shown next to `field`.
    pub fn error(&self, field: BookingField) -> Option<&str> {
        self.state.errors().get(field.name())
    }

    /// The submit button is disabled exactly when errors are shown.
    pub fn is_submit_disabled(&self) -> bool {
        self.state.is_submit_disabled()
    }

    /// Returns the submit phase.
    pub fn phase(&self) -> SubmitPhase {
        self.controller.phase()
    }

    /// Returns whether the last submit attempt went through.
    pub fn is_submitted(&self) -> bool {
        self.controller.phase() == SubmitPhase::Submitted
    }

    /// Handles a click on the submit button.
    ///
    /// A click on a disabled button changes nothing and returns the errors
    /// being shown. On success the notifier gets [`CONFIRMATION`] and the
    /// sink gets the booking. Errors are only returned when a collaborator
    /// fails, in which case the form is left unsubmitted.
    pub fn submit(
        &mut self,
        notifier: &mut dyn Notifier,
        sink: &mut dyn BookingSink,
    ) -> Result<SubmitOutcome> {
        if self.is_submit_disabled() {
            debug!(failing = self.errors().len(), "submit ignored while disabled");
            return Ok(SubmitOutcome::Rejected(self.errors().clone()));
        }

        match self.controller.attempt_submit(self.state.values()) {
            Ok(booking) => {
                let delivered = notifier
                    .notify(CONFIRMATION)
                    .and_then(|()| sink.forward(&booking));
                if let Err(err) = delivered {
                    self.controller.reset();
                    return Err(err);
                }

                self.state.record_submit(ValidationErrors::new());
                Ok(SubmitOutcome::Submitted(booking))
            }
            Err(errors) => {
                self.state.record_submit(errors.clone());
                Ok(SubmitOutcome::Rejected(errors))
            }
        }
    }

    /// Throws away all input, errors and submit status.
    pub fn reset(&mut self) {
        self.state.reset();
        self.controller.reset();
    }

    /// Renders the component as a Bootstrap 5 HTML fragment.
    pub fn render(&self) -> String {
        let options = FormOptions::new()
            .submit_label(SUBMIT_LABEL)
            .submit_class("btn btn-warning w-100 fw-semibold");
        let form_html =
            render_bootstrap_form(fields(), self.state.values(), self.state.errors(), &options);

        let title = TITLE;
        let heading = html! {
            h2.class("h4 mb-4 text-center") { #title }
        };

        let submitted = self.is_submitted();

        html! { div.class("booking-form mx-auto p-4 bg-white rounded shadow-sm") }
            .raw(heading.render())
            .when(submitted, |d| {
                d.child::<Div, _>(|alert| {
                    alert
                        .class("alert alert-success")
                        .attr("role", "status")
                        .text(CONFIRMATION)
                })
            })
            .raw(&form_html)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use crate::error::BookingError;
    use crate::notify::{BookingSink, RecordingNotifier, RecordingSink, WriterNotifier};

    struct BrokenPipe;

    impl io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingSink;

    impl BookingSink for FailingSink {
        fn forward(&mut self, _booking: &BookingData) -> Result<()> {
            Err(io::Error::other("sink down").into())
        }
    }

    fn fill_valid(form: &mut BookingForm) {
        form.set_value(BookingField::Name, "Jane").unwrap();
        form.set_value(BookingField::Email, "jane@example.com").unwrap();
        form.set_value(BookingField::Date, "2024-11-11").unwrap();
        form.set_value(BookingField::Time, "19:30").unwrap();
        form.set_value(BookingField::Guests, "2").unwrap();
    }

    #[test]
    fn test_new_form_is_enabled_and_idle() {
        let form = BookingForm::new();
        assert!(!form.is_submit_disabled());
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_disabled_click_is_ignored() {
        let mut form = BookingForm::new();
        let mut notifier = RecordingNotifier::default();
        let mut sink = RecordingSink::default();

        let first = form.submit(&mut notifier, &mut sink).unwrap();
        assert_eq!(first.errors().map(ValidationErrors::len), Some(5));
        assert!(form.is_submit_disabled());

        fill_valid(&mut form);
        form.set_value(BookingField::Email, "bademail").unwrap();
        assert!(form.is_submit_disabled());

        let second = form.submit(&mut notifier, &mut sink).unwrap();
        assert_eq!(
            second.errors().and_then(|e| e.get("email")),
            Some("Invalid email")
        );
        assert!(notifier.messages.is_empty());
        assert!(sink.bookings.is_empty());
    }

    #[test]
    fn test_edit_after_success_returns_to_idle() {
        let mut form = BookingForm::new();
        fill_valid(&mut form);
        let mut notifier = RecordingNotifier::default();
        let mut sink = RecordingSink::default();

        form.submit(&mut notifier, &mut sink).unwrap();
        assert!(form.is_submitted());

        form.set_value(BookingField::Guests, "3").unwrap();
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_set_value_by_name_rejects_unknown() {
        let mut form = BookingForm::new();
        assert!(form.set_value_by_name("phone", "555").is_err());
        form.set_value_by_name("specialRequest", "Cake").unwrap();
        assert_eq!(form.value(BookingField::SpecialRequest), "Cake");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = BookingForm::new();
        form.set_value(BookingField::Name, "Jane").unwrap();
        form.submit(&mut RecordingNotifier::default(), &mut RecordingSink::default())
            .unwrap();
        form.reset();
        assert_eq!(form.value(BookingField::Name), "");
        assert!(form.errors().is_empty());
        assert!(!form.is_submit_disabled());
    }

    #[test]
    fn test_render_shows_confirmation_after_success() {
        let mut form = BookingForm::new();
        fill_valid(&mut form);
        assert!(!form.render().contains("alert-success"));

        form.submit(&mut RecordingNotifier::default(), &mut RecordingSink::default())
            .unwrap();
        let html = form.render();
        assert!(html.contains("alert-success"));
        assert!(html.contains(CONFIRMATION));
    }

    #[test]
    fn test_failed_notifier_leaves_form_unsubmitted() {
        let mut form = BookingForm::new();
        fill_valid(&mut form);
        let mut notifier = WriterNotifier::new(BrokenPipe);
        let mut sink = RecordingSink::default();

        let err = form.submit(&mut notifier, &mut sink).unwrap_err();
        assert!(matches!(err, BookingError::Io(_)));
        assert!(!form.is_submitted());
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert!(sink.bookings.is_empty());
        assert!(!form.render().contains("alert-success"));

        let outcome = form
            .submit(&mut RecordingNotifier::default(), &mut sink)
            .unwrap();
        assert!(outcome.booking().is_some());
        assert!(form.is_submitted());
    }

    #[test]
    fn test_failed_sink_leaves_form_unsubmitted() {
        let mut form = BookingForm::new();
        fill_valid(&mut form);

        let result = form.submit(&mut RecordingNotifier::default(), &mut FailingSink);
        assert!(result.is_err());
        assert!(!form.is_submitted());
        assert!(!form.render().contains(CONFIRMATION));
    }
}
