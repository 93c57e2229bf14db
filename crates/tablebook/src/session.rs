//! Line-driven event loop over a [`BookingForm`].
//!
//! Each input line is one user interaction:
//!
//! ```text
//! set <field> <value...>   type into a field
//! clear <field>            empty a field
//! submit                   click "Submit Reservation"
//! errors                   print the errors and the button state
//! show                     print the rendered form
//! reset                    start over with an empty form
//! quit                     stop reading
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::component::{BookingForm, SubmitOutcome};
use crate::error::{BookingError, Result};
use crate::notify::{BookingSink, Notifier};

/// Counts of what happened during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Submit clicks that produced a booking.
    pub submitted: usize,
    /// Submit clicks that were rejected.
    pub rejected: usize,
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], s[idx..].trim_start()),
        None => (s, ""),
    }
}

/// Feeds every line of `input` to `form`, writing feedback to `out`.
pub fn run_session<R: BufRead, W: Write>(
    form: &mut BookingForm,
    input: R,
    out: &mut W,
    notifier: &mut dyn Notifier,
    sink: &mut dyn BookingSink,
) -> Result<SessionReport> {
    let mut report = SessionReport::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let line = line.trim_end();
        let (command, rest) = split_word(line);

        if command.is_empty() || command.starts_with('#') {
            continue;
        }

        debug!(line = line_no, command, "session event");

        let script_err = |err: BookingError| BookingError::Script {
            line: line_no,
            message: err.to_string(),
        };

        match command {
            "set" | "clear" => {
                let (field, value) = split_word(rest);
                if field.is_empty() {
                    return Err(BookingError::Script {
                        line: line_no,
                        message: format!("`{command}` needs a field name"),
                    });
                }
                let value = if command == "clear" { "" } else { value };
                form.set_value_by_name(field, value).map_err(script_err)?;
            }
            "submit" => match form.submit(notifier, sink)? {
                SubmitOutcome::Submitted(_) => report.submitted += 1,
                SubmitOutcome::Rejected(errors) => {
                    report.rejected += 1;
                    writeln!(out, "Submission rejected:")?;
                    for (field, message) in errors.iter() {
                        writeln!(out, "  {field}: {message}")?;
                    }
                }
            },
            "errors" => {
                if form.errors().is_empty() {
                    writeln!(out, "No errors.")?;
                } else {
                    write!(out, "{}", form.errors())?;
                }
                let state = if form.is_submit_disabled() {
                    "disabled"
                } else {
                    "enabled"
                };
                writeln!(out, "Submit is {state}.")?;
            }
            "show" => writeln!(out, "{}", form.render())?,
            "reset" => form.reset(),
            "quit" => break,
            other => {
                return Err(BookingError::Script {
                    line: line_no,
                    message: format!("unknown command `{other}`"),
                })
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{RecordingNotifier, RecordingSink};

    fn run(script: &str) -> (Result<SessionReport>, String, RecordingSink) {
        let mut form = BookingForm::new();
        let mut out = Vec::new();
        let mut notifier = RecordingNotifier::default();
        let mut sink = RecordingSink::default();
        let report = run_session(
            &mut form,
            script.as_bytes(),
            &mut out,
            &mut notifier,
            &mut sink,
        );
        (report, String::from_utf8(out).unwrap(), sink)
    }

    #[test]
    fn test_split_word() {
        assert_eq!(split_word("  set name  John Doe"), ("set", "name  John Doe"));
        assert_eq!(split_word("submit"), ("submit", ""));
        assert_eq!(split_word(""), ("", ""));
    }

    #[test]
    fn test_full_booking_session() {
        let script = "\
# an empty click first
submit
set name John Doe
set email john@example.com
set date 2024-12-31
set time 18:00
set guests 4
set specialRequest Window seat
errors
submit
";
        let (report, out, sink) = run(script);
        assert_eq!(
            report.unwrap(),
            SessionReport {
                submitted: 1,
                rejected: 1
            }
        );
        assert!(out.contains("  name: Name is required"));
        assert!(out.contains("No errors.\nSubmit is enabled."));
        assert_eq!(sink.bookings.len(), 1);
        assert_eq!(sink.bookings[0].name, "John Doe");
        assert_eq!(sink.bookings[0].special_request, "Window seat");
    }

    #[test]
    fn test_clear_reports_error_after_attempt() {
        let script = "submit\nset name Ada\nclear name\nerrors\nquit\nset bogus 1\n";
        let (report, out, _) = run(script);
        assert!(report.is_ok());
        assert!(out.contains("name: Name is required"));
        assert!(out.contains("Submit is disabled."));
    }

    #[test]
    fn test_unknown_command_reports_line() {
        let (report, _, _) = run("set name Ada\n\ndance\n");
        let err = report.unwrap_err();
        assert_eq!(err.to_string(), "line 3: unknown command `dance`");
    }

    #[test]
    fn test_unknown_field_reports_line() {
        let (report, _, _) = run("set phone 555\n");
        assert_eq!(
            report.unwrap_err().to_string(),
            "line 1: unknown field: phone"
        );
    }
}
