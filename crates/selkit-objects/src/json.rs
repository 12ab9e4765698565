//! JSON representation of arbitrary values.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ObjectError;

/// Compact JSON text for `value`, e.g. `[1,2,3]` or `{"width":10,"height":20}`.
///
/// # Errors
///
/// Returns [`ObjectError::Encode`] if `value` cannot be represented as JSON
/// (for example a map with non-string keys).
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ObjectError> {
    serde_json::to_string(value).map_err(ObjectError::Encode)
}

/// Rebuild a value of type `T` from its JSON text.
///
/// The target type plays the role of a prototype: the decoded fields are
/// attached to `T`, so its methods are available on the result.
///
/// ```ignore
/// let r: Rectangle = from_json(r#"{"width":10,"height":20}"#)?;
/// assert_eq!(r.area(), 200.0);
/// ```
///
/// # Errors
///
/// Returns [`ObjectError::Decode`] if `json` is malformed or does not match `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ObjectError> {
    serde_json::from_str(json).map_err(ObjectError::Decode)
}
