//! Form field validators.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::error::{FormError, Result};

/// `something@something`, no whitespace anywhere.
pub const EMAIL_PATTERN: &str = r"^\S+@\S+$";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(EMAIL_PATTERN)
        .case_insensitive(true)
        .build()
        .expect("EMAIL_PATTERN is a valid regex")
});

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> std::result::Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

/// Parses a number the way numeric inputs submit it.
///
/// Surrounding whitespace is ignored. Decimals and exponents such as `4.0`
/// or `1e1` are accepted; text, `NaN` and infinities are not.
pub fn parse_number(field: &str, value: &str) -> Result<f64> {
    let invalid = |message: &str| FormError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    };

    let num = value
        .trim()
        .parse::<f64>()
        .map_err(|err| invalid(&err.to_string()))?;

    if num.is_finite() {
        Ok(num)
    } else {
        Err(invalid("not a finite number"))
    }
}

/// Parses a whole number the way numeric inputs submit it.
///
/// Anything [`parse_number`] accepts works as long as it has no fractional
/// part and fits an `i64`, so `4.0` and `1e1` give 4 and 10.
pub fn parse_integer(field: &str, value: &str) -> Result<i64> {
    if let Ok(num) = value.trim().parse::<i64>() {
        return Ok(num);
    }

    let num = parse_number(field, value)?;
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if num.fract() != 0.0 || num < i64::MIN as f64 || num >= i64::MAX as f64 {
        return Err(FormError::InvalidValue {
            field: field.to_string(),
            message: format!("{num} is not a whole number in range"),
        });
    }

    Ok(num as i64)
}

/// Validator that requires a non-empty value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    /// Creates a new RequiredValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "This field is required.".to_string(),
        }
    }

    /// Creates a new RequiredValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if value.trim().is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for email addresses.
///
/// Deliberately loose: anything of the form `local@domain` without
/// whitespace is accepted, matching what browsers submit for email inputs.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    message: String,
}

impl EmailValidator {
    /// Creates a new EmailValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Enter a valid email address.".to_string(),
        }
    }

    /// Creates a new EmailValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if EMAIL_REGEX.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator using a custom regex pattern.
#[derive(Debug, Clone)]
pub struct PatternValidator {
    pattern: Regex,
    message: String,
}

impl PatternValidator {
    /// Creates a new PatternValidator.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }

    /// Creates a PatternValidator that ignores letter case.
    pub fn case_insensitive(pattern: &str, message: impl Into<String>) -> Result<Self> {
        Ok(Self {
            pattern: RegexBuilder::new(pattern).case_insensitive(true).build()?,
            message: message.into(),
        })
    }
}

impl Validator for PatternValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that requires a finite number.
#[derive(Debug, Clone)]
pub struct NumberValidator {
    message: String,
}

impl NumberValidator {
    /// Creates a new NumberValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Enter a number.".to_string(),
        }
    }

    /// Creates a new NumberValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for NumberValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for NumberValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        parse_number("", value)
            .map(|_| ())
            .map_err(|_| self.message.clone())
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that requires a whole number.
#[derive(Debug, Clone)]
pub struct IntegerValidator {
    message: String,
}

impl IntegerValidator {
    /// Creates a new IntegerValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Enter a whole number.".to_string(),
        }
    }

    /// Creates a new IntegerValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for IntegerValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for IntegerValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        parse_integer("", value)
            .map(|_| ())
            .map_err(|_| self.message.clone())
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for a lower numeric bound (inclusive).
#[derive(Debug, Clone)]
pub struct MinValueValidator {
    min: i64,
    message: String,
}

impl MinValueValidator {
    /// Creates a new MinValueValidator.
    pub fn new(min: i64) -> Self {
        Self {
            min,
            message: format!("Ensure this value is greater than or equal to {min}."),
        }
    }

    /// Creates a new MinValueValidator with custom message.
    pub fn with_message(min: i64, message: impl Into<String>) -> Self {
        Self {
            min,
            message: message.into(),
        }
    }
}

impl Validator for MinValueValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        let num = parse_number("", value).map_err(|_| "Enter a number.".to_string())?;

        if num < self.min as f64 {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for an upper numeric bound (inclusive).
#[derive(Debug, Clone)]
pub struct MaxValueValidator {
    max: i64,
    message: String,
}

impl MaxValueValidator {
    /// Creates a new MaxValueValidator.
    pub fn new(max: i64) -> Self {
        Self {
            max,
            message: format!("Ensure this value is less than or equal to {max}."),
        }
    }

    /// Creates a new MaxValueValidator with custom message.
    pub fn with_message(max: i64, message: impl Into<String>) -> Self {
        Self {
            max,
            message: message.into(),
        }
    }
}

impl Validator for MaxValueValidator {
    fn validate(&self, value: &str) -> std::result::Result<(), String> {
        let num = parse_number("", value).map_err(|_| "Enter a number.".to_string())?;

        if num > self.max as f64 {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}
