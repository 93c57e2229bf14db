//! The booking fields, their validation rules and the validated record.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tablebook_forms::validation::{
    parse_integer, EmailValidator, IntegerValidator, MaxValueValidator, MinValueValidator,
    NumberValidator, RequiredValidator,
};
use tablebook_forms::widgets::{BootstrapTextInput, BootstrapTextarea};
use tablebook_forms::{validate_fields, FormBuilder, FormFieldDef, ValidationErrors};

use crate::error::BookingError;

/// Smallest party that can be booked.
pub const MIN_GUESTS: i64 = 1;

/// Largest party that can be booked.
pub const MAX_GUESTS: i64 = 20;

/// Name left blank.
pub const NAME_REQUIRED: &str = "Name is required";
/// Email left blank.
pub const EMAIL_REQUIRED: &str = "Email is required";
/// Email without the `local@domain` shape.
pub const EMAIL_INVALID: &str = "Invalid email";
/// Date left blank.
pub const DATE_REQUIRED: &str = "Date is required";
/// Time left blank.
pub const TIME_REQUIRED: &str = "Time is required";
/// Guest count left blank or not a number.
pub const GUESTS_REQUIRED: &str = "Number of guests is required";
/// Guest count below [`MIN_GUESTS`].
pub const GUESTS_TOO_FEW: &str = "At least 1 guest required";
/// Guest count above [`MAX_GUESTS`].
pub const GUESTS_TOO_MANY: &str = "Maximum 20 guests";
/// Guest count in range but with a fractional part, e.g. `2.5`.
pub const GUESTS_FRACTIONAL: &str = "Number of guests must be a whole number";

/// One input slot of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    Name,
    Email,
    Date,
    Time,
    Guests,
    SpecialRequest,
}

impl BookingField {
    /// All fields in display order.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Email,
        Self::Date,
        Self::Time,
        Self::Guests,
        Self::SpecialRequest,
    ];

    /// Field name used for input ids, value keys and error keys.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Date => "date",
            Self::Time => "time",
            Self::Guests => "guests",
            Self::SpecialRequest => "specialRequest",
        }
    }

    /// Visible label of the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Guests => "Number of Guests",
            Self::SpecialRequest => "Special Requests",
        }
    }

    /// Whether the field must be filled in.
    pub fn is_required(self) -> bool {
        self != Self::SpecialRequest
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BookingField {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| BookingError::UnknownField(s.to_string()))
    }
}

static FIELDS: LazyLock<Vec<FormFieldDef>> = LazyLock::new(build_fields);

fn build_fields() -> Vec<FormFieldDef> {
    use BookingField as F;

    FormBuilder::new()
        .field(
            FormFieldDef::new(F::Name.name(), F::Name.label(), BootstrapTextInput::new())
                .required()
                .validator(RequiredValidator::with_message(NAME_REQUIRED)),
        )
        .field(
            FormFieldDef::new(F::Email.name(), F::Email.label(), BootstrapTextInput::email())
                .required()
                .validator(RequiredValidator::with_message(EMAIL_REQUIRED))
                .validator(EmailValidator::with_message(EMAIL_INVALID)),
        )
        .field(
            FormFieldDef::new(F::Date.name(), F::Date.label(), BootstrapTextInput::date())
                .required()
                .validator(RequiredValidator::with_message(DATE_REQUIRED)),
        )
        .field(
            FormFieldDef::new(F::Time.name(), F::Time.label(), BootstrapTextInput::time())
                .required()
                .validator(RequiredValidator::with_message(TIME_REQUIRED)),
        )
        .field(
            FormFieldDef::new(
                F::Guests.name(),
                F::Guests.label(),
                BootstrapTextInput::number(),
            )
            .required()
            .attr("min", MIN_GUESTS.to_string())
            .attr("max", MAX_GUESTS.to_string())
            .validator(RequiredValidator::with_message(GUESTS_REQUIRED))
            .validator(NumberValidator::with_message(GUESTS_REQUIRED))
            .validator(MinValueValidator::with_message(MIN_GUESTS, GUESTS_TOO_FEW))
            .validator(MaxValueValidator::with_message(MAX_GUESTS, GUESTS_TOO_MANY))
            .validator(IntegerValidator::with_message(GUESTS_FRACTIONAL)),
        )
        .field(FormFieldDef::new(
            F::SpecialRequest.name(),
            F::SpecialRequest.label(),
            BootstrapTextarea::new(3).placeholder("Optional"),
        ))
        .build()
}

/// The booking form's field definitions, in display order.
pub fn fields() -> &'static [FormFieldDef] {
    &FIELDS
}

/// Computes the error map for `values`.
///
/// Pure: the same values always produce the same map.
pub fn validate(values: &HashMap<String, String>) -> ValidationErrors {
    validate_fields(fields(), values)
}

/// A reservation that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingData {
    pub name: String,
    pub email: String,
    /// ISO calendar date as entered, e.g. `2024-12-31`.
    pub date: String,
    /// Time of day as entered, e.g. `18:00`.
    pub time: String,
    pub guests: i64,
    /// Empty when the guest left no note.
    #[serde(default)]
    pub special_request: String,
}

impl BookingData {
    /// Builds the record from raw values that have already passed
    /// [`validate`]. Guests is coerced to an integer (`4.0` becomes 4) and
    /// the special request defaults to `""`.
    pub fn from_values(values: &HashMap<String, String>) -> Result<Self, ValidationErrors> {
        let get = |field: BookingField| values.get(field.name()).cloned().unwrap_or_default();

        let guests = parse_integer(BookingField::Guests.name(), &get(BookingField::Guests))
            .map_err(|_| {
                let mut errors = ValidationErrors::new();
                errors.add(BookingField::Guests.name(), GUESTS_REQUIRED);
                errors
            })?;

        Ok(Self {
            name: get(BookingField::Name),
            email: get(BookingField::Email),
            date: get(BookingField::Date),
            time: get(BookingField::Time),
            guests,
            special_request: get(BookingField::SpecialRequest),
        })
    }
}
