//! Field rules for the notes resource.
//!
//! Request payloads are loosely typed: a field may be absent, `null`, or
//! present with an empty value. Only truthy values (non-empty text, non-zero
//! ids) count as supplied, for creates and partial updates alike.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity label used in not-found errors.
pub const NOTE_ENTITY: &str = "Note";

pub const FIELD_NOTE_NAME: &str = "note_name";
pub const FIELD_CONTENT: &str = "content";
pub const FIELD_FOLDER_ID: &str = "folder_id";

// ---------------------------------------------------------------------------
// Truthiness
// ---------------------------------------------------------------------------

/// A value that can be present and still count as not supplied.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for DbId {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

/// Drop a falsy value so it is treated exactly like an omitted one.
pub fn keep_truthy<T: Truthy>(value: Option<T>) -> Option<T> {
    value.filter(Truthy::is_truthy)
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Check `(field, value)` pairs in order, failing on the first falsy value.
///
/// Only the first missing field is reported.
pub fn validate_required(checks: &[(&'static str, &dyn Truthy)]) -> Result<(), CoreError> {
    for &(field, value) in checks {
        if !value.is_truthy() {
            return Err(CoreError::MissingField(field));
        }
    }
    Ok(())
}

/// Number of truthy values in a partial update.
pub fn count_supplied(values: &[&dyn Truthy]) -> usize {
    values.iter().filter(|value| value.is_truthy()).count()
}

/// A partial update must carry at least one truthy field.
pub fn validate_update(values: &[&dyn Truthy]) -> Result<(), CoreError> {
    if count_supplied(values) == 0 {
        return Err(CoreError::EmptyUpdate);
    }
    Ok(())
}
