//! Extended values: a scalar plus metadata that never takes part in comparisons.

mod scalar;

pub use scalar::ScalarValue;

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use uuid::Uuid;

/// Access to the concrete type behind a boxed value.
///
/// Implemented for every `'static` type; it lets a `&dyn ExtendedValue` be
/// downcast to the type it was declared with.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The boxed form of a member value.
///
/// Implementors expose exactly one scalar. Any other fields are metadata:
/// equality and hashing of extended values only ever look at the scalar.
/// Metadata beyond [`description`](ExtendedValue::description) is read back
/// by downcasting to the declared type.
///
/// ```
/// use extended_enum::{extended_enum, ExtendedEnum, ExtendedValue, MemberValue, ScalarValue};
///
/// #[derive(Debug)]
/// struct Labelled {
///     value: ScalarValue,
///     display_name: &'static str,
/// }
///
/// impl ExtendedValue for Labelled {
///     fn value(&self) -> &ScalarValue {
///         &self.value
///     }
/// }
///
/// extended_enum! {
///     enum Kind {
///         FIRST = MemberValue::new(Labelled { value: ScalarValue::from(1), display_name: "First" }),
///     }
/// }
///
/// let labelled = Kind::FIRST.extended_value_as::<Labelled>().unwrap();
/// assert_eq!(labelled.display_name, "First");
/// ```
pub trait ExtendedValue: AsAny + fmt::Debug + Send + Sync {
    /// The scalar this value boxes
    fn value(&self) -> &ScalarValue;

    /// Human-readable description, absent unless the value type carries one
    fn description(&self) -> Option<&str> {
        None
    }
}

impl dyn ExtendedValue + '_ {
    /// The boxed value as its declared type, if it is a `T`
    #[must_use]
    pub fn downcast_ref<T: ExtendedValue + 'static>(&self) -> Option<&T> {
        AsAny::as_any(self).downcast_ref::<T>()
    }
}

impl PartialEq for dyn ExtendedValue + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for dyn ExtendedValue + '_ {}

impl Hash for dyn ExtendedValue + '_ {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

/// Default box for a member declared with a bare scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseExtendedValue {
    value: ScalarValue,
}

impl BaseExtendedValue {
    #[must_use]
    pub fn new(value: impl Into<ScalarValue>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl ExtendedValue for BaseExtendedValue {
    fn value(&self) -> &ScalarValue {
        &self.value
    }
}

/// Extended value carrying an optional description.
///
/// The description is excluded from equality and hashing, so
/// `ValueWithDescription::new(1)` equals
/// `ValueWithDescription::new(1).with_description("one")`.
#[derive(Debug, Clone)]
pub struct ValueWithDescription {
    value: ScalarValue,
    description: Option<String>,
}

impl ValueWithDescription {
    #[must_use]
    pub fn new(value: impl Into<ScalarValue>) -> Self {
        Self {
            value: value.into(),
            description: None,
        }
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl ExtendedValue for ValueWithDescription {
    fn value(&self) -> &ScalarValue {
        &self.value
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for ValueWithDescription {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for ValueWithDescription {}

impl Hash for ValueWithDescription {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// A member value after boxing.
///
/// Bare scalars convert into a [`BaseExtendedValue`]; extended values are
/// stored unchanged. Custom [`ExtendedValue`] types go through
/// [`MemberValue::new`].
#[derive(Debug, Clone)]
pub struct MemberValue(Arc<dyn ExtendedValue>);

impl MemberValue {
    #[must_use]
    pub fn new(value: impl ExtendedValue + 'static) -> Self {
        Self(Arc::new(value))
    }

    /// The boxed scalar
    #[must_use]
    pub fn scalar(&self) -> &ScalarValue {
        self.0.value()
    }

    /// The full boxed value, metadata included
    #[must_use]
    pub fn get(&self) -> &dyn ExtendedValue {
        self.0.as_ref()
    }

    /// The boxed value as its declared type, if it is a `T`
    #[must_use]
    pub fn downcast_ref<T: ExtendedValue + 'static>(&self) -> Option<&T> {
        self.get().downcast_ref()
    }
}

impl PartialEq for MemberValue {
    fn eq(&self, other: &Self) -> bool {
        self.scalar() == other.scalar()
    }
}

impl Eq for MemberValue {}

impl From<ScalarValue> for MemberValue {
    fn from(value: ScalarValue) -> Self {
        Self::new(BaseExtendedValue { value })
    }
}

impl From<&str> for MemberValue {
    fn from(value: &str) -> Self {
        ScalarValue::from(value).into()
    }
}

impl From<String> for MemberValue {
    fn from(value: String) -> Self {
        ScalarValue::from(value).into()
    }
}

impl From<i64> for MemberValue {
    fn from(value: i64) -> Self {
        ScalarValue::from(value).into()
    }
}

impl From<i32> for MemberValue {
    fn from(value: i32) -> Self {
        ScalarValue::from(value).into()
    }
}

impl From<u32> for MemberValue {
    fn from(value: u32) -> Self {
        ScalarValue::from(value).into()
    }
}

impl From<Uuid> for MemberValue {
    fn from(value: Uuid) -> Self {
        ScalarValue::from(value).into()
    }
}

impl From<BaseExtendedValue> for MemberValue {
    fn from(value: BaseExtendedValue) -> Self {
        Self::new(value)
    }
}

impl From<ValueWithDescription> for MemberValue {
    fn from(value: ValueWithDescription) -> Self {
        Self::new(value)
    }
}
