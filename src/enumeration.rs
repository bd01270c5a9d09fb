//! Statically declared extended enumerations.
//!
//! [`extended_enum!`](crate::extended_enum) declares a plain Rust `enum` and
//! implements [`ExtendedEnum`] for it, backed by an [`EnumTable`] that is
//! built on first access.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::EnumError;
use crate::lookup::Candidate;
use crate::table::EnumTable;
use crate::unique;
use crate::value::{ExtendedValue, ScalarValue};

/// An enumeration whose members carry boxed extended values.
///
/// Implemented only by [`extended_enum!`](crate::extended_enum): the trait
/// is sealed, and the provided methods rely on `ordinal()` being a valid
/// position in both `members()` and `table()`. Members compare equal only
/// to themselves: there is no equality with scalars, with extended values,
/// or with members of another enumeration type.
///
/// Aliases keep the value they were declared with, description included.
/// Use [`canonical`](ExtendedEnum::canonical) to reach the first-declared
/// member and its metadata.
///
/// ```compile_fail
/// use extended_enum::{EnumTable, ExtendedEnum};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// struct Manual;
///
/// impl ExtendedEnum for Manual {
///     const NAME: &'static str = "Manual";
///
///     fn members() -> &'static [Self] {
///         &[Manual]
///     }
///
///     fn table() -> &'static EnumTable {
///         unimplemented!()
///     }
///
///     fn ordinal(self) -> usize {
///         7
///     }
/// }
/// ```
pub trait ExtendedEnum:
    crate::__private::Sealed + Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static
{
    /// Declared name of the enumeration type
    const NAME: &'static str;

    /// Every member in declaration order
    fn members() -> &'static [Self];

    /// Table holding names and boxed values
    fn table() -> &'static EnumTable;

    /// Position of this member in declaration order
    fn ordinal(self) -> usize;

    /// Declared name of the member
    #[must_use]
    fn name(self) -> &'static str {
        Self::table().entry_at(self.ordinal()).name()
    }

    /// The member's scalar
    #[must_use]
    fn value(self) -> &'static ScalarValue {
        Self::table().entry_at(self.ordinal()).value().scalar()
    }

    /// The member's full boxed value, metadata included.
    ///
    /// For an alias this is the alias's own declared value, not the
    /// canonical member's.
    #[must_use]
    fn extended_value(self) -> &'static dyn ExtendedValue {
        Self::table().entry_at(self.ordinal()).value().get()
    }

    /// The member's boxed value as its declared type, or `None` if it is
    /// not a `T`.
    #[must_use]
    fn extended_value_as<T: ExtendedValue + 'static>(self) -> Option<&'static T> {
        Self::table().entry_at(self.ordinal()).value().downcast_ref()
    }

    /// First member declared with the same scalar; `self` for unique types.
    #[must_use]
    fn canonical(self) -> Self {
        Self::table()
            .canonical_position(self.ordinal())
            .and_then(|position| Self::members().get(position).copied())
            .unwrap_or(self)
    }

    /// Recover a member from a scalar or an extended value.
    fn from_value(candidate: impl Into<Candidate>) -> Result<Self, EnumError> {
        let candidate = candidate.into();
        let position = Self::table().lookup(&candidate)?;
        Self::members()
            .get(position)
            .copied()
            .ok_or_else(|| EnumError::invalid_value(candidate.repr(), Self::NAME))
    }

    /// Member declared under `name`
    #[must_use]
    fn from_name(name: &str) -> Option<Self> {
        let position = Self::table().position_of_name(name)?;
        Self::members().get(position).copied()
    }

    /// Members keyed by declared name, in declaration order
    #[must_use]
    fn get_members() -> IndexMap<&'static str, Self> {
        Self::members()
            .iter()
            .map(|member| (member.name(), *member))
            .collect()
    }

    /// Scalars in declaration order
    #[must_use]
    fn get_values() -> Vec<ScalarValue> {
        Self::table().values()
    }

    /// Boxed values in declaration order, one per member. Aliases contribute
    /// their own declared value.
    #[must_use]
    fn get_extended_values() -> Vec<&'static dyn ExtendedValue> {
        Self::table().extended_values()
    }

    /// Fail with [`EnumError::DuplicateValues`] if two members share a scalar.
    fn ensure_unique() -> Result<(), EnumError> {
        unique::check_unique(Self::table())
    }
}

/// Serialize a member exactly as its bare scalar.
pub fn serialize_member<E, S>(member: E, serializer: S) -> Result<S::Ok, S::Error>
where
    E: ExtendedEnum,
    S: Serializer,
{
    member.value().serialize(serializer)
}

/// Deserialize a member by looking up the scalar it was serialized as.
///
/// A string that matches no text member is retried as a UUID, since UUID
/// scalars serialize as strings.
pub fn deserialize_member<'de, E, D>(deserializer: D) -> Result<E, D::Error>
where
    E: ExtendedEnum,
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(MemberVisitor(PhantomData))
}

struct MemberVisitor<E>(PhantomData<E>);

impl<E: ExtendedEnum> Visitor<'_> for MemberVisitor<E> {
    type Value = E;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a value of {}", E::NAME)
    }

    fn visit_str<DE>(self, value: &str) -> Result<E, DE>
    where
        DE: de::Error,
    {
        E::from_value(value).or_else(|err| match Uuid::parse_str(value) {
            Ok(uuid) => E::from_value(uuid).map_err(|_| DE::custom(err)),
            Err(_) => Err(DE::custom(err)),
        })
    }

    fn visit_i64<DE>(self, value: i64) -> Result<E, DE>
    where
        DE: de::Error,
    {
        E::from_value(value).map_err(DE::custom)
    }

    fn visit_u64<DE>(self, value: u64) -> Result<E, DE>
    where
        DE: de::Error,
    {
        E::from_value(value).map_err(DE::custom)
    }

    fn visit_f64<DE>(self, value: f64) -> Result<E, DE>
    where
        DE: de::Error,
    {
        E::from_value(value).map_err(DE::custom)
    }

    fn visit_bool<DE>(self, value: bool) -> Result<E, DE>
    where
        DE: de::Error,
    {
        E::from_value(value).map_err(DE::custom)
    }

    fn visit_none<DE>(self) -> Result<E, DE>
    where
        DE: de::Error,
    {
        E::from_value(Candidate::Absent).map_err(DE::custom)
    }

    fn visit_unit<DE>(self) -> Result<E, DE>
    where
        DE: de::Error,
    {
        E::from_value(Candidate::Absent).map_err(DE::custom)
    }
}

/// Declare an extended enumeration.
///
/// Each member is assigned a bare scalar (`&str`, `String`, integer,
/// [`Uuid`](uuid::Uuid)) or an extended value ([`BaseExtendedValue`],
/// [`ValueWithDescription`], or any [`MemberValue`]). Bare scalars are
/// boxed into a [`BaseExtendedValue`] when the type is first used.
///
/// The generated type derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`
/// and `Hash`, and implements `Display` (`Type.MEMBER`), `Serialize` (as the
/// bare scalar) and `Deserialize` (by value lookup).
///
/// ```
/// use extended_enum::{extended_enum, ExtendedEnum, ScalarValue, ValueWithDescription};
///
/// extended_enum! {
///     pub enum Status {
///         OPEN = "open",
///         CLOSED = ValueWithDescription::new("closed").with_description("Work is done"),
///     }
/// }
///
/// assert_eq!(Status::from_value("closed").unwrap(), Status::CLOSED);
/// assert_eq!(Status::OPEN.value(), &ScalarValue::from("open"));
/// assert_eq!(Status::CLOSED.extended_value().description(), Some("Work is done"));
/// assert_eq!(serde_json::to_string(&Status::OPEN).unwrap(), "\"open\"");
/// ```
///
/// [`BaseExtendedValue`]: crate::BaseExtendedValue
/// [`ValueWithDescription`]: crate::ValueWithDescription
/// [`MemberValue`]: crate::MemberValue
#[macro_export]
macro_rules! extended_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$member_meta:meta])*
                $member:ident = $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[allow(non_camel_case_types)]
        $vis enum $name {
            $(
                $(#[$member_meta])*
                $member,
            )+
        }

        impl $crate::__private::Sealed for $name {}

        impl $crate::ExtendedEnum for $name {
            const NAME: &'static str = ::std::stringify!($name);

            fn members() -> &'static [Self] {
                const MEMBERS: &[$name] = &[$($name::$member),+];
                MEMBERS
            }

            fn table() -> &'static $crate::EnumTable {
                static TABLE: ::std::sync::OnceLock<$crate::EnumTable> =
                    ::std::sync::OnceLock::new();
                TABLE.get_or_init(|| {
                    $crate::EnumTable::new(
                        ::std::stringify!($name),
                        ::std::vec![
                            $((::std::stringify!($member), $crate::MemberValue::from($value))),+
                        ],
                    )
                })
            }

            fn ordinal(self) -> usize {
                self as usize
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(
                    f,
                    "{}.{}",
                    <Self as $crate::ExtendedEnum>::NAME,
                    $crate::ExtendedEnum::name(*self)
                )
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::enumeration::serialize_member(*self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::enumeration::deserialize_member(deserializer)
            }
        }
    };
}

#[cfg(test)]
#[path = "enumeration_tests.rs"]
mod tests;
