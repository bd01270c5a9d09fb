//! Member storage shared by static and dynamic enumeration types.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::EnumError;
use crate::lookup::Candidate;
use crate::value::{ExtendedValue, MemberValue, ScalarValue};

/// A declared member: its name and boxed value.
#[derive(Debug, Clone)]
pub struct Entry {
    name: String,
    value: MemberValue,
}

impl Entry {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &MemberValue {
        &self.value
    }
}

/// Ordered, immutable members of one enumeration type.
///
/// The scalar index is built on the first lookup and maps every scalar to
/// the first member declared with it.
#[derive(Debug)]
pub struct EnumTable {
    name: String,
    entries: Vec<Entry>,
    scalar_index: OnceLock<HashMap<ScalarValue, usize>>,
}

impl EnumTable {
    /// Build a table from members in declaration order.
    ///
    /// Member names must be unique; both the `extended_enum!` macro and JSON
    /// objects guarantee this.
    #[must_use]
    pub fn new<N>(name: impl Into<String>, members: impl IntoIterator<Item = (N, MemberValue)>) -> Self
    where
        N: Into<String>,
    {
        let name = name.into();
        let entries: Vec<Entry> = members
            .into_iter()
            .map(|(member, value)| Entry {
                name: member.into(),
                value,
            })
            .collect();
        debug!(enum_name = %name, members = entries.len(), "Defined enumeration");
        Self {
            name,
            entries,
            scalar_index: OnceLock::new(),
        }
    }

    /// Name of the enumeration type
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Members in declaration order
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, position: usize) -> Option<&Entry> {
        self.entries.get(position)
    }

    /// Entry for a position handed out by this table or by the macro-generated
    /// member list, which always matches the declaration list.
    #[allow(clippy::indexing_slicing)]
    pub(crate) fn entry_at(&self, position: usize) -> &Entry {
        &self.entries[position]
    }

    #[must_use]
    pub fn position_of_name(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    /// Scalar to first-declared position, computed once.
    #[must_use]
    pub fn scalar_index(&self) -> &HashMap<ScalarValue, usize> {
        self.scalar_index.get_or_init(|| {
            let mut index = HashMap::with_capacity(self.entries.len());
            for (position, entry) in self.entries.iter().enumerate() {
                index.entry(entry.value.scalar().clone()).or_insert(position);
            }
            debug!(enum_name = %self.name, scalars = index.len(), "Built scalar index");
            index
        })
    }

    /// Position of the member matching `candidate`.
    pub fn lookup(&self, candidate: &Candidate) -> Result<usize, EnumError> {
        let found = match candidate {
            Candidate::Scalar(scalar) => self.scalar_index().get(scalar).copied(),
            Candidate::Extended(value) => self
                .entries
                .iter()
                .position(|entry| entry.value.scalar() == value.scalar()),
            Candidate::Absent | Candidate::Unsupported { .. } => {
                debug!(
                    enum_name = %self.name,
                    candidate_type = candidate.type_name(),
                    "Rejected lookup candidate"
                );
                return Err(EnumError::invalid_type(
                    candidate.repr(),
                    candidate.type_name(),
                    &self.name,
                ));
            }
        };
        found.ok_or_else(|| {
            let candidate = candidate.repr();
            debug!(enum_name = %self.name, %candidate, "No member matches");
            EnumError::invalid_value(candidate, &self.name)
        })
    }

    /// Position of the first member declared with the same scalar.
    #[must_use]
    pub fn canonical_position(&self, position: usize) -> Option<usize> {
        let entry = self.entries.get(position)?;
        self.scalar_index().get(entry.value.scalar()).copied()
    }

    /// Scalars in declaration order
    #[must_use]
    pub fn values(&self) -> Vec<ScalarValue> {
        self.entries
            .iter()
            .map(|entry| entry.value.scalar().clone())
            .collect()
    }

    /// Boxed values in declaration order, aliases with their own
    #[must_use]
    pub fn extended_values(&self) -> Vec<&dyn ExtendedValue> {
        self.entries.iter().map(|entry| entry.value.get()).collect()
    }
}
