//! Enumerations defined at runtime from JSON documents.
//!
//! A definition is a JSON object mapping member names to either a bare
//! scalar (string or integer) or an object with a `value` and an optional
//! `description`:
//!
//! ```json
//! {
//!   "Status": {
//!     "OPEN": "open",
//!     "CLOSED": { "value": "closed", "description": "Work is done" }
//!   }
//! }
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::EnumError;
use crate::lookup::Candidate;
use crate::table::EnumTable;
use crate::unique;
use crate::value::{ExtendedValue, MemberValue, ScalarValue};

/// An enumeration type whose members are only known at runtime.
#[derive(Debug)]
pub struct DynamicEnum {
    table: EnumTable,
}

impl DynamicEnum {
    /// Build from already boxed members, in declaration order.
    #[must_use]
    pub fn new<N>(name: impl Into<String>, members: impl IntoIterator<Item = (N, MemberValue)>) -> Self
    where
        N: Into<String>,
    {
        Self {
            table: EnumTable::new(name, members),
        }
    }

    /// Build from a JSON object of `NAME: value` pairs.
    ///
    /// Each value is boxed; anything other than a string, an integer, or a
    /// `{"value": .., "description": ..}` object is a type mismatch.
    pub fn from_json(name: impl Into<String>, definition: &Value) -> Result<Self, EnumError> {
        let name = name.into();
        let Value::Object(fields) = definition else {
            return Err(EnumError::invalid_definition(format!(
                "{name} must be a JSON object of member names to values"
            )));
        };
        if fields.is_empty() {
            return Err(EnumError::invalid_definition(format!("{name} has no members")));
        }
        let members = fields
            .iter()
            .map(|(member, raw)| {
                let value = Candidate::from_json(raw).into_member_value(&name)?;
                Ok((member.clone(), value))
            })
            .collect::<Result<Vec<_>, EnumError>>()?;
        Ok(Self::new(name, members))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.table.name()
    }

    #[must_use]
    pub fn table(&self) -> &EnumTable {
        &self.table
    }

    /// Members in declaration order
    pub fn members(&self) -> impl Iterator<Item = DynamicMember<'_>> {
        (0..self.table.len()).map(move |ordinal| DynamicMember {
            owner: self,
            ordinal,
        })
    }

    /// Member declared under `name`
    #[must_use]
    pub fn member(&self, name: &str) -> Option<DynamicMember<'_>> {
        let ordinal = self.table.position_of_name(name)?;
        Some(DynamicMember {
            owner: self,
            ordinal,
        })
    }

    /// Recover a member from a scalar or an extended value.
    pub fn lookup(&self, candidate: impl Into<Candidate>) -> Result<DynamicMember<'_>, EnumError> {
        let ordinal = self.table.lookup(&candidate.into())?;
        Ok(DynamicMember {
            owner: self,
            ordinal,
        })
    }

    /// Recover a member from a JSON value, as found in a serialized document.
    pub fn lookup_json(&self, value: &Value) -> Result<DynamicMember<'_>, EnumError> {
        self.lookup(Candidate::from_json(value))
    }

    /// Members keyed by declared name, in declaration order
    #[must_use]
    pub fn get_members(&self) -> IndexMap<&str, DynamicMember<'_>> {
        self.members().map(|member| (member.name(), member)).collect()
    }

    /// Scalars in declaration order
    #[must_use]
    pub fn get_values(&self) -> Vec<ScalarValue> {
        self.table.values()
    }

    /// Boxed values in declaration order
    #[must_use]
    pub fn get_extended_values(&self) -> Vec<&dyn ExtendedValue> {
        self.table.extended_values()
    }

    pub fn ensure_unique(&self) -> Result<(), EnumError> {
        unique::check_unique(&self.table)
    }
}

/// A member of a [`DynamicEnum`].
///
/// Equal only to the same member of the same enumeration instance; two
/// enumerations loaded from identical definitions do not share members.
#[derive(Debug, Clone, Copy)]
pub struct DynamicMember<'a> {
    owner: &'a DynamicEnum,
    ordinal: usize,
}

impl<'a> DynamicMember<'a> {
    #[must_use]
    pub fn owner(&self) -> &'a DynamicEnum {
        self.owner
    }

    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    #[must_use]
    pub fn name(&self) -> &'a str {
        self.owner.table.entry_at(self.ordinal).name()
    }

    /// The member's scalar
    #[must_use]
    pub fn value(&self) -> &'a ScalarValue {
        self.owner.table.entry_at(self.ordinal).value().scalar()
    }

    /// The member's full boxed value
    #[must_use]
    pub fn extended_value(&self) -> &'a dyn ExtendedValue {
        self.owner.table.entry_at(self.ordinal).value().get()
    }

    /// The member's boxed value as its declared type, or `None` if it is
    /// not a `T`.
    #[must_use]
    pub fn extended_value_as<T: ExtendedValue + 'static>(&self) -> Option<&'a T> {
        self.owner.table.entry_at(self.ordinal).value().downcast_ref()
    }

    /// First member declared with the same scalar
    #[must_use]
    pub fn canonical(&self) -> DynamicMember<'a> {
        let ordinal = self
            .owner
            .table
            .canonical_position(self.ordinal)
            .unwrap_or(self.ordinal);
        DynamicMember {
            owner: self.owner,
            ordinal,
        }
    }
}

impl PartialEq for DynamicMember<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.owner, other.owner) && self.ordinal == other.ordinal
    }
}

impl Eq for DynamicMember<'_> {}

impl Hash for DynamicMember<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self.owner, state);
        self.ordinal.hash(state);
    }
}

impl fmt::Display for DynamicMember<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner.name(), self.name())
    }
}

impl Serialize for DynamicMember<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

/// Named dynamic enumerations loaded from one JSON document.
#[derive(Debug, Default)]
pub struct DefinitionSet {
    enums: IndexMap<String, DynamicEnum>,
}

impl DefinitionSet {
    /// Load `{ "EnumName": { "MEMBER": value, .. }, .. }`.
    pub fn from_json(document: &Value) -> Result<Self, EnumError> {
        let Value::Object(definitions) = document else {
            return Err(EnumError::invalid_definition(
                "definitions must be a JSON object of enumeration names",
            ));
        };
        let enums = definitions
            .iter()
            .map(|(name, definition)| {
                DynamicEnum::from_json(name.clone(), definition).map(|parsed| (name.clone(), parsed))
            })
            .collect::<Result<IndexMap<_, _>, EnumError>>()?;
        Ok(Self { enums })
    }

    pub fn from_json_str(content: &str) -> Result<Self, EnumError> {
        let document: Value = serde_json::from_str(content)?;
        Self::from_json(&document)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DynamicEnum> {
        self.enums.get(name)
    }

    /// Enumerations in document order
    pub fn enums(&self) -> impl Iterator<Item = &DynamicEnum> {
        self.enums.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.enums.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }

    /// Uniqueness failures across every enumeration, in document order.
    #[must_use]
    pub fn check_unique(&self) -> Vec<EnumError> {
        self.enums()
            .filter_map(|definition| definition.ensure_unique().err())
            .collect()
    }
}

#[cfg(test)]
#[path = "dynamic_tests.rs"]
mod tests;
