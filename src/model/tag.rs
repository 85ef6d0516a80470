//! Tag data model.
//!
//! Tags are named, colored label classifications that the host applies to
//! annotated regions. Each tag optionally carries a data type and a display
//! format; the valid formats for a tag depend on its type.

use serde::{Deserialize, Serialize};

/// A named, colored tag with an optional data type and format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Display name of the tag
    pub name: String,
    /// Color assigned to the tag (a palette entry, e.g. "#CC543A")
    pub color: String,
    /// Data type of values labeled with this tag
    #[serde(default)]
    pub tag_type: TagType,
    /// Display format for values of this tag's type
    #[serde(default)]
    pub format: TagFormat,
}

impl Tag {
    /// Create a new tag with the given name and color and no classification.
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            tag_type: TagType::NotSpecified,
            format: TagFormat::NotSpecified,
        }
    }

    /// Whether this tag has the given name under canonical name equality.
    pub fn is_named(&self, name: &str) -> bool {
        names_equal(&self.name, name)
    }
}

/// Data type of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TagType {
    /// No type assigned
    #[default]
    NotSpecified,
    /// Free-form text
    String,
    /// Real number
    Number,
    /// Whole number
    Integer,
    /// Calendar date
    Date,
    /// Time of day
    Time,
}

impl TagType {
    /// Get the display name for this type.
    pub fn name(&self) -> &'static str {
        match self {
            TagType::NotSpecified => "Not specified",
            TagType::String => "String",
            TagType::Number => "Number",
            TagType::Integer => "Integer",
            TagType::Date => "Date",
            TagType::Time => "Time",
        }
    }

    /// Get all tag types in menu order.
    pub fn all() -> &'static [TagType] {
        &[
            TagType::NotSpecified,
            TagType::String,
            TagType::Number,
            TagType::Integer,
            TagType::Date,
            TagType::Time,
        ]
    }

    /// Get the formats valid for this type, in menu order.
    ///
    /// Always non-empty and always starts with [`TagFormat::NotSpecified`].
    pub fn valid_formats(&self) -> &'static [TagFormat] {
        match self {
            TagType::String => &[
                TagFormat::NotSpecified,
                TagFormat::Alphanumeric,
                TagFormat::NoWhitespace,
            ],
            TagType::Number => &[TagFormat::NotSpecified, TagFormat::Currency],
            TagType::Date => &[
                TagFormat::NotSpecified,
                TagFormat::DayMonthYear,
                TagFormat::MonthDayYear,
                TagFormat::YearMonthDay,
            ],
            TagType::NotSpecified | TagType::Integer | TagType::Time => {
                &[TagFormat::NotSpecified]
            }
        }
    }
}

/// Display format for a tag's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TagFormat {
    /// No format assigned
    #[default]
    NotSpecified,
    /// Letters and digits only
    Alphanumeric,
    /// No whitespace characters
    NoWhitespace,
    /// Currency amount
    Currency,
    /// DD/MM/YYYY
    DayMonthYear,
    /// MM/DD/YYYY
    MonthDayYear,
    /// YYYY/MM/DD
    YearMonthDay,
}

impl TagFormat {
    /// Get the display name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            TagFormat::NotSpecified => "Not specified",
            TagFormat::Alphanumeric => "Alphanumeric",
            TagFormat::NoWhitespace => "No whitespace",
            TagFormat::Currency => "Currency",
            TagFormat::DayMonthYear => "DD/MM/YYYY",
            TagFormat::MonthDayYear => "MM/DD/YYYY",
            TagFormat::YearMonthDay => "YYYY/MM/DD",
        }
    }
}

/// Canonical form of a tag name used for equality: trimmed and lowercased.
pub fn canonical_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// The single "same tag" predicate: trimmed, case-insensitive comparison.
///
/// All name lookups in the crate go through this; tags are never compared
/// by identity.
pub fn names_equal(a: &str, b: &str) -> bool {
    canonical_name(a) == canonical_name(b)
}
