//! Submit gating: validate, then either report errors or build the record.

use std::collections::HashMap;

use tablebook_forms::ValidationErrors;

use crate::booking::{validate, BookingData};

/// Where the form stands between submit clicks.
///
/// A click moves `Idle` through validation and either back to `Idle` (with
/// errors to show) or on to `Submitted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitted,
}

/// Runs submit attempts and tracks the resulting phase.
#[derive(Debug, Clone, Default)]
pub struct SubmitController {
    phase: SubmitPhase,
}

impl SubmitController {
    /// Creates a controller in the `Idle` phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Validates `values` and, if nothing fails, returns the booking.
    pub fn attempt_submit(
        &mut self,
        values: &HashMap<String, String>,
    ) -> Result<BookingData, ValidationErrors> {
        let errors = validate(values);

        let result = if errors.is_empty() {
            BookingData::from_values(values)
        } else {
            Err(errors)
        };

        match &result {
            Ok(booking) => {
                self.phase = SubmitPhase::Submitted;
                tracing::info!(guests = booking.guests, date = %booking.date, "booking accepted");
            }
            Err(errors) => {
                self.phase = SubmitPhase::Idle;
                tracing::debug!(failing = ?errors.fields(), "booking rejected");
            }
        }

        result
    }

    /// Returns to `Idle`, e.g. after the values were edited.
    pub fn reset(&mut self) {
        self.phase = SubmitPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_invalid_values_stay_idle() {
        let mut controller = SubmitController::new();
        let errors = controller
            .attempt_submit(&values(&[("email", "bademail")]))
            .unwrap_err();
        assert_eq!(errors.get("email"), Some("Invalid email"));
        assert_eq!(controller.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_valid_values_submit() {
        let mut controller = SubmitController::new();
        let booking = controller
            .attempt_submit(&values(&[
                ("name", "Jane"),
                ("email", "jane@example.com"),
                ("date", "2024-11-11"),
                ("time", "19:30"),
                ("guests", "2"),
            ]))
            .unwrap();
        assert_eq!(booking.guests, 2);
        assert_eq!(booking.special_request, "");
        assert_eq!(controller.phase(), SubmitPhase::Submitted);

        controller.reset();
        assert_eq!(controller.phase(), SubmitPhase::Idle);
    }
}
