//! Serde and validator helpers shared by the record schemas.

use std::borrow::Cow;

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer};
use validator::ValidationError;

use crate::types::Email;

/// Deserialize an integer, accepting floats with no fractional part.
///
/// Strings are not coerced. A whole number that does not fit `T` is an
/// invalid value, so it reports as out of range.
pub(crate) fn whole_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let number = serde_json::Number::deserialize(deserializer)?;

    let whole = if let Some(n) = number.as_i64() {
        n
    } else if let Some(n) = number.as_u64() {
        return Err(D::Error::invalid_value(
            Unexpected::Unsigned(n),
            &"an integer in range",
        ));
    } else {
        let n = number.as_f64().unwrap_or(f64::NAN);
        if n.fract() != 0.0 || n.abs() > 9.0e15 {
            return Err(D::Error::invalid_type(Unexpected::Float(n), &"an integer"));
        }
        #[allow(clippy::cast_possible_truncation)] // whole and within i64 range
        let whole = n as i64;
        whole
    };

    T::try_from(whole)
        .map_err(|_| D::Error::invalid_value(Unexpected::Signed(whole), &"an integer in range"))
}

/// Reject strings that are empty or only whitespace.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("empty").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// Reject strings that do not parse as an [`Email`].
pub(crate) fn valid_email(value: &str) -> Result<(), ValidationError> {
    Email::parse(value).map(drop).map_err(|e| {
        ValidationError::new("invalid_email")
            .with_message(Cow::Owned(format!("value is not a valid email address: {e}")))
    })
}
