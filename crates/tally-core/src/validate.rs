//! Field validators shared by create and update requests.
//!
//! Each validator takes the field name (used in the error) and the raw value
//! decoded from the request, returning the checked value.

use serde_json::{Number, Value};
use url::Url;

use crate::ValidationError;

/// Requires a present, non-empty text value.
pub fn required_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing(field))?;
    text(field, value)
}

/// Rejects empty (or whitespace-only) text.
pub fn text(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(value)
}

/// Requires a present JSON number.
pub fn required_number(field: &'static str, value: Option<Value>) -> Result<Number, ValidationError> {
    let value = value.ok_or(ValidationError::Missing(field))?;
    number(field, value)
}

/// Accepts only JSON numbers; numeric strings are rejected.
pub fn number(field: &'static str, value: Value) -> Result<Number, ValidationError> {
    match value {
        Value::Number(n) => Ok(n),
        _ => Err(ValidationError::NotNumeric(field)),
    }
}

/// Requires a present absolute URL.
pub fn required_url(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing(field))?;
    url(field, value)
}

/// Accepts text that parses as an absolute URL; the original text is kept.
pub fn url(field: &'static str, value: String) -> Result<String, ValidationError> {
    Url::parse(&value).map_err(|e| ValidationError::InvalidUrl {
        field,
        reason: e.to_string(),
    })?;
    Ok(value)
}

/// Applies `check` to a value only when it was supplied.
pub fn optional<T, U>(
    value: Option<T>,
    check: impl FnOnce(T) -> Result<U, ValidationError>,
) -> Result<Option<U>, ValidationError> {
    value.map(check).transpose()
}
