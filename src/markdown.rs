//! Markdown bullet lists of enumeration values.

use serde::{Deserialize, Serialize};

use crate::dynamic::DynamicEnum;
use crate::enumeration::ExtendedEnum;
use crate::value::ExtendedValue;

/// Placed between a value and its description.
pub const DESCRIPTION_SEPARATOR: &str = " \u{2014} ";

fn default_delimiter() -> String {
    "\n".to_string()
}

fn default_prefix() -> String {
    "*".to_string()
}

fn default_value_wrap() -> String {
    "`".to_string()
}

/// How items are rendered and joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownOptions {
    /// Placed between items
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Placed before each item, followed by a space; empty for none
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Placed on both sides of each value
    #[serde(default = "default_value_wrap")]
    pub value_wrap: String,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            prefix: default_prefix(),
            value_wrap: default_value_wrap(),
        }
    }
}

impl MarkdownOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_value_wrap(mut self, value_wrap: impl Into<String>) -> Self {
        self.value_wrap = value_wrap.into();
        self
    }
}

/// Render one value as `{prefix} {wrap}{scalar}{wrap}`, followed by the
/// description when there is one.
#[must_use]
pub fn format_value_to_markdown(value: &dyn ExtendedValue, prefix: &str, value_wrap: &str) -> String {
    let mut item = String::new();
    if !prefix.is_empty() {
        item.push_str(prefix);
        item.push(' ');
    }
    item.push_str(value_wrap);
    item.push_str(&value.value().to_string());
    item.push_str(value_wrap);
    if let Some(description) = value.description() {
        item.push_str(DESCRIPTION_SEPARATOR);
        item.push_str(description);
    }
    item
}

/// Render each value and join the items with the delimiter.
#[must_use]
pub fn format_to_markdown<'a>(
    values: impl IntoIterator<Item = &'a dyn ExtendedValue>,
    options: &MarkdownOptions,
) -> String {
    values
        .into_iter()
        .map(|value| format_value_to_markdown(value, &options.prefix, &options.value_wrap))
        .collect::<Vec<_>>()
        .join(&options.delimiter)
}

/// Every member of `E`, aliases included, in declaration order.
///
/// Each alias is rendered from its own declared value, so an alias declared
/// with a bare scalar has no description even if its canonical member does.
#[must_use]
pub fn format_enum_to_markdown<E: ExtendedEnum>(options: &MarkdownOptions) -> String {
    format_to_markdown(E::get_extended_values(), options)
}

/// A closed subset of members, in the order given.
#[must_use]
pub fn format_members_to_markdown<E: ExtendedEnum>(members: &[E], options: &MarkdownOptions) -> String {
    format_to_markdown(members.iter().map(|member| member.extended_value()), options)
}

#[must_use]
pub fn format_dynamic_to_markdown(definition: &DynamicEnum, options: &MarkdownOptions) -> String {
    format_to_markdown(definition.get_extended_values(), options)
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
