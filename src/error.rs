//! Error types for boxing, lookup and uniqueness checks.

use std::fmt;
use thiserror::Error;

/// One `ALIAS -> CANONICAL` pair reported by a uniqueness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    /// Later member repeating an earlier value
    pub alias: String,
    /// First member declared with that value
    pub canonical: String,
}

impl Duplicate {
    #[must_use]
    pub fn new(alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            canonical: canonical.into(),
        }
    }
}

impl fmt::Display for Duplicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.alias, self.canonical)
    }
}

/// Duplicates in alias declaration order, displayed as a `, `-joined list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateList(pub Vec<Duplicate>);

impl fmt::Display for DuplicateList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, duplicate) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{duplicate}")?;
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum EnumError {
    /// A value offered for boxing or lookup is neither a scalar nor an extended value.
    #[error("Not supported type={type_name} ({value}) for {enum_name}")]
    TypeMismatch {
        value: String,
        type_name: String,
        enum_name: String,
    },

    /// No member matches the candidate.
    #[error("{candidate} is not a valid {enum_name}")]
    InvalidValue {
        candidate: String,
        enum_name: String,
        #[source]
        cause: Option<Box<EnumError>>,
    },

    #[error("duplicate values found in {enum_name}: {duplicates}")]
    DuplicateValues {
        enum_name: String,
        duplicates: DuplicateList,
    },

    #[error("Invalid enumeration definition: {0}")]
    InvalidDefinition(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl EnumError {
    #[must_use]
    pub fn type_mismatch(
        value: impl Into<String>,
        type_name: impl Into<String>,
        enum_name: impl Into<String>,
    ) -> Self {
        EnumError::TypeMismatch {
            value: value.into(),
            type_name: type_name.into(),
            enum_name: enum_name.into(),
        }
    }

    #[must_use]
    pub fn invalid_value(candidate: impl Into<String>, enum_name: impl Into<String>) -> Self {
        EnumError::InvalidValue {
            candidate: candidate.into(),
            enum_name: enum_name.into(),
            cause: None,
        }
    }

    /// A failed lookup whose candidate was rejected before any comparison.
    #[must_use]
    pub fn invalid_type(
        candidate: impl Into<String>,
        type_name: impl Into<String>,
        enum_name: impl Into<String>,
    ) -> Self {
        let candidate = candidate.into();
        let enum_name = enum_name.into();
        let cause = EnumError::type_mismatch(candidate.clone(), type_name, enum_name.clone());
        EnumError::InvalidValue {
            candidate,
            enum_name,
            cause: Some(Box::new(cause)),
        }
    }

    #[must_use]
    pub fn invalid_definition(msg: impl Into<String>) -> Self {
        EnumError::InvalidDefinition(msg.into())
    }

    /// Whether the error, or what caused it, is a type mismatch
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            EnumError::TypeMismatch { .. } => true,
            EnumError::InvalidValue {
                cause: Some(cause), ..
            } => cause.is_type_mismatch(),
            _ => false,
        }
    }

    /// Reported pairs, when this is a duplicate-values error
    #[must_use]
    pub fn duplicates(&self) -> Option<&[Duplicate]> {
        match self {
            EnumError::DuplicateValues { duplicates, .. } => Some(&duplicates.0),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
