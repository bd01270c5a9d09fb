//! Scalar values: the serialization-facing part of every member.

use serde::{Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// The bare value of an enumeration member.
///
/// Values of different kinds never compare equal: `Text("1")` is not
/// `Integer(1)`, and a UUID is not equal to its own string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarValue {
    Text(String),
    Integer(i64),
    Uuid(Uuid),
}

impl ScalarValue {
    /// Short name of the scalar kind, used in error messages
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ScalarValue::Text(_) => "text",
            ScalarValue::Integer(_) => "integer",
            ScalarValue::Uuid(_) => "uuid",
        }
    }

    /// Printed form used when reporting a failed lookup.
    ///
    /// Text is single-quoted so that `'1'` and `1` stay distinguishable,
    /// and UUID values are tagged so they cannot be mistaken for text.
    #[must_use]
    pub fn repr(&self) -> String {
        match self {
            ScalarValue::Text(text) => format!("'{text}'"),
            ScalarValue::Integer(number) => number.to_string(),
            ScalarValue::Uuid(uuid) => format!("UUID('{uuid}')"),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::Text(text) => Some(text),
            ScalarValue::Integer(_) | ScalarValue::Uuid(_) => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ScalarValue::Integer(number) => Some(*number),
            ScalarValue::Text(_) | ScalarValue::Uuid(_) => None,
        }
    }

    #[must_use]
    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            ScalarValue::Uuid(uuid) => Some(uuid),
            ScalarValue::Text(_) | ScalarValue::Integer(_) => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Text(text) => write!(f, "{text}"),
            ScalarValue::Integer(number) => write!(f, "{number}"),
            ScalarValue::Uuid(uuid) => write!(f, "{uuid}"),
        }
    }
}

/// Serializes exactly as the bare scalar would.
impl Serialize for ScalarValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ScalarValue::Text(text) => serializer.serialize_str(text),
            ScalarValue::Integer(number) => serializer.serialize_i64(*number),
            ScalarValue::Uuid(uuid) => uuid.serialize(serializer),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(text: &str) -> Self {
        ScalarValue::Text(text.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(text: String) -> Self {
        ScalarValue::Text(text)
    }
}

impl From<i64> for ScalarValue {
    fn from(number: i64) -> Self {
        ScalarValue::Integer(number)
    }
}

impl From<i32> for ScalarValue {
    fn from(number: i32) -> Self {
        ScalarValue::Integer(i64::from(number))
    }
}

impl From<u32> for ScalarValue {
    fn from(number: u32) -> Self {
        ScalarValue::Integer(i64::from(number))
    }
}

impl From<Uuid> for ScalarValue {
    fn from(uuid: Uuid) -> Self {
        ScalarValue::Uuid(uuid)
    }
}

#[cfg(test)]
#[path = "scalar_tests.rs"]
mod tests;
