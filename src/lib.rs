//! Enumerations whose members carry boxed extended values.
//!
//! Every member owns an [`ExtendedValue`]: a single scalar (text, integer or
//! UUID) plus optional metadata such as a description. Members are looked up
//! by scalar or by extended value, serialize as their bare scalar, and can be
//! rendered as markdown lists.
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::indexing_slicing
    )
)]

pub mod dynamic;
pub mod enumeration;
pub mod error;
pub mod lookup;
pub mod markdown;
pub mod table;
pub mod unique;
pub mod value;

// Re-export commonly used types
pub use dynamic::{DefinitionSet, DynamicEnum, DynamicMember};
pub use enumeration::ExtendedEnum;
pub use error::{Duplicate, DuplicateList, EnumError};
pub use lookup::Candidate;
pub use markdown::{
    format_dynamic_to_markdown, format_enum_to_markdown, format_members_to_markdown,
    format_to_markdown, format_value_to_markdown, MarkdownOptions,
};
pub use table::{EnumTable, Entry};
pub use value::{AsAny, BaseExtendedValue, ExtendedValue, MemberValue, ScalarValue, ValueWithDescription};

#[doc(hidden)]
pub mod __private {
    pub use serde;

    /// Implemented only by `extended_enum!`.
    pub trait Sealed {}
}
