//! Candidates offered for lookup or boxing, before their type is checked.

use serde_json::Value;
use uuid::Uuid;

use crate::error::EnumError;
use crate::value::{BaseExtendedValue, MemberValue, ScalarValue, ValueWithDescription};

/// A value offered to an enumeration type.
///
/// Scalars match through the scalar index, extended values match by
/// comparing scalars in declaration order. `Absent` and `Unsupported`
/// never match and are reported as type mismatches.
#[derive(Debug, Clone)]
pub enum Candidate {
    /// No value at all (`None`, JSON `null`)
    Absent,
    Scalar(ScalarValue),
    Extended(MemberValue),
    /// A value of a kind that can never be a member value
    Unsupported {
        repr: String,
        type_name: &'static str,
    },
}

impl Candidate {
    /// Classify a JSON value.
    ///
    /// Strings and integers become scalars; an object with a scalar `value`
    /// and an optional string `description` becomes an extended value.
    /// Everything else is unsupported.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Candidate::Absent,
            Value::String(text) => Candidate::Scalar(ScalarValue::from(text.as_str())),
            Value::Number(number) => match number.as_i64() {
                Some(integer) => Candidate::Scalar(ScalarValue::Integer(integer)),
                None => Candidate::Unsupported {
                    repr: number.to_string(),
                    type_name: "number",
                },
            },
            Value::Bool(flag) => Candidate::Unsupported {
                repr: flag.to_string(),
                type_name: "bool",
            },
            Value::Array(_) => Candidate::Unsupported {
                repr: value.to_string(),
                type_name: "array",
            },
            Value::Object(fields) => {
                let scalar = fields.get("value").map(Candidate::from_json);
                let description = match fields.get("description") {
                    None | Some(Value::Null) => Ok(None),
                    Some(Value::String(text)) => Ok(Some(text.clone())),
                    Some(_) => Err(()),
                };
                match (scalar, description) {
                    (Some(Candidate::Scalar(scalar)), Ok(description)) => {
                        let mut extended = ValueWithDescription::new(scalar);
                        if let Some(description) = description {
                            extended = extended.with_description(description);
                        }
                        Candidate::Extended(extended.into())
                    }
                    _ => Candidate::Unsupported {
                        repr: value.to_string(),
                        type_name: "object",
                    },
                }
            }
        }
    }

    /// Printed form used in error messages
    #[must_use]
    pub fn repr(&self) -> String {
        match self {
            Candidate::Absent => "None".to_string(),
            Candidate::Scalar(scalar) => scalar.repr(),
            Candidate::Extended(value) => value.scalar().repr(),
            Candidate::Unsupported { repr, .. } => repr.clone(),
        }
    }

    /// Name of the candidate's kind
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Candidate::Absent => "none",
            Candidate::Scalar(scalar) => scalar.kind(),
            Candidate::Extended(_) => "extended value",
            Candidate::Unsupported { type_name, .. } => *type_name,
        }
    }

    /// Box the candidate as a member value of `enum_name`.
    ///
    /// Scalars are wrapped in a [`BaseExtendedValue`], extended values are
    /// kept as they are, anything else is a type mismatch.
    pub fn into_member_value(self, enum_name: &str) -> Result<MemberValue, EnumError> {
        match self {
            Candidate::Scalar(scalar) => Ok(MemberValue::new(BaseExtendedValue::new(scalar))),
            Candidate::Extended(value) => Ok(value),
            other => Err(EnumError::type_mismatch(
                other.repr(),
                other.type_name(),
                enum_name,
            )),
        }
    }
}

impl From<ScalarValue> for Candidate {
    fn from(value: ScalarValue) -> Self {
        Candidate::Scalar(value)
    }
}

impl From<&ScalarValue> for Candidate {
    fn from(value: &ScalarValue) -> Self {
        Candidate::Scalar(value.clone())
    }
}

impl From<&str> for Candidate {
    fn from(value: &str) -> Self {
        Candidate::Scalar(value.into())
    }
}

impl From<String> for Candidate {
    fn from(value: String) -> Self {
        Candidate::Scalar(value.into())
    }
}

impl From<i64> for Candidate {
    fn from(value: i64) -> Self {
        Candidate::Scalar(value.into())
    }
}

impl From<i32> for Candidate {
    fn from(value: i32) -> Self {
        Candidate::Scalar(value.into())
    }
}

impl From<u32> for Candidate {
    fn from(value: u32) -> Self {
        Candidate::Scalar(value.into())
    }
}

impl From<u64> for Candidate {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(integer) => Candidate::Scalar(integer.into()),
            Err(_) => Candidate::Unsupported {
                repr: value.to_string(),
                type_name: "integer out of range",
            },
        }
    }
}

impl From<Uuid> for Candidate {
    fn from(value: Uuid) -> Self {
        Candidate::Scalar(value.into())
    }
}

impl From<bool> for Candidate {
    fn from(value: bool) -> Self {
        Candidate::Unsupported {
            repr: value.to_string(),
            type_name: "bool",
        }
    }
}

impl From<f64> for Candidate {
    fn from(value: f64) -> Self {
        Candidate::Unsupported {
            repr: value.to_string(),
            type_name: "float",
        }
    }
}

impl From<MemberValue> for Candidate {
    fn from(value: MemberValue) -> Self {
        Candidate::Extended(value)
    }
}

impl From<&MemberValue> for Candidate {
    fn from(value: &MemberValue) -> Self {
        Candidate::Extended(value.clone())
    }
}

impl From<BaseExtendedValue> for Candidate {
    fn from(value: BaseExtendedValue) -> Self {
        Candidate::Extended(value.into())
    }
}

impl From<&BaseExtendedValue> for Candidate {
    fn from(value: &BaseExtendedValue) -> Self {
        Candidate::Extended(value.clone().into())
    }
}

impl From<ValueWithDescription> for Candidate {
    fn from(value: ValueWithDescription) -> Self {
        Candidate::Extended(value.into())
    }
}

impl From<&ValueWithDescription> for Candidate {
    fn from(value: &ValueWithDescription) -> Self {
        Candidate::Extended(value.clone().into())
    }
}

impl From<&Value> for Candidate {
    fn from(value: &Value) -> Self {
        Candidate::from_json(value)
    }
}

impl<T: Into<Candidate>> From<Option<T>> for Candidate {
    fn from(value: Option<T>) -> Self {
        value.map_or(Candidate::Absent, Into::into)
    }
}
