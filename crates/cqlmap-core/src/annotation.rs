// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mapping annotations attached to a property.
//!
//! Produced by the derive macros from field attributes, or built by hand.
//!
//! # Attributes
//!
//! | Annotation | Attribute | Effect |
//! |------------|-----------|--------|
//! | [`ExplicitType`] | `#[cql_type(name = "list", type_arguments(text))]` | overrides type resolution |
//! | [`ColumnOverride`] | `#[column(name = "email_address")]` | renames a plain column |
//! | [`PrimaryKeyOverride`] | `#[primary_key(name = "user_id")]` | renames the identifier |
//! | [`PrimaryKeyColumn`] | `#[primary_key_column(role = "partitioned")]` | key role and name |

use crate::data_type::CqlTag;

/// Role of a primary-key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimaryKeyType {
    /// Part of the partition key.
    Partitioned,

    /// Clustering column.
    #[default]
    Clustered
}

impl PrimaryKeyType {
    /// Parse a role name.
    ///
    /// Returns `None` for unrecognized values.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "partitioned" | "partition" => Some(Self::Partitioned),
            "clustered" | "clustering" => Some(Self::Clustered),
            _ => None
        }
    }
}

/// Clustering order of a key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ordering {
    /// `ASC`.
    #[default]
    Ascending,

    /// `DESC`.
    Descending
}

impl Ordering {
    /// Parse an ordering name.
    ///
    /// Returns `None` for unrecognized values.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Some(Self::Ascending),
            "descending" | "desc" => Some(Self::Descending),
            _ => None
        }
    }
}

/// Explicit data type override.
///
/// For `list` and `set` the single element tag is in `type_arguments`; for
/// `map` the key and value tags. `user_type_name` names the user-defined
/// type when the tag, or a collection element tag, is `udt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitType {
    /// Top-level tag.
    pub tag: CqlTag,

    /// Element tags.
    pub type_arguments: Vec<CqlTag>,

    /// User type name, blank when absent.
    pub user_type_name: String
}

impl ExplicitType {
    /// Override with no element tags.
    #[must_use]
    pub const fn new(tag: CqlTag) -> Self {
        Self {
            tag,
            type_arguments: Vec::new(),
            user_type_name: String::new()
        }
    }

    /// Append an element tag.
    #[must_use]
    pub fn argument(mut self, tag: CqlTag) -> Self {
        self.type_arguments.push(tag);
        self
    }

    /// Set the user type name.
    #[must_use]
    pub fn user_type(mut self, name: impl Into<String>) -> Self {
        self.user_type_name = name.into();
        self
    }
}

/// `#[column]` override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOverride {
    /// Column name or expression; `None` or blank keeps the default.
    pub name: Option<String>,

    /// Always quote the identifier.
    pub force_quote: bool
}

impl ColumnOverride {
    /// Override with a column name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name:        Some(name.into()),
            force_quote: false
        }
    }
}

/// `#[primary_key]` override on the identifier property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimaryKeyOverride {
    /// Column name or expression; `None` or blank keeps the default.
    pub name: Option<String>,

    /// Always quote the identifier.
    pub force_quote: bool
}

impl PrimaryKeyOverride {
    /// Override with a column name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name:        Some(name.into()),
            force_quote: false
        }
    }
}

/// `#[primary_key_column]` role and naming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimaryKeyColumn {
    /// Column name or expression; `None` or blank keeps the default.
    pub name: Option<String>,

    /// Always quote the identifier.
    pub force_quote: bool,

    /// Partition or clustering.
    pub role: PrimaryKeyType,

    /// Clustering order.
    pub ordering: Ordering,

    /// Position within the key.
    pub ordinal: u32
}

impl PrimaryKeyColumn {
    /// Key column with the given role and position.
    #[must_use]
    pub fn new(role: PrimaryKeyType, ordinal: u32) -> Self {
        Self {
            role,
            ordinal,
            ..Self::default()
        }
    }

    /// Partition key column.
    #[must_use]
    pub fn partitioned(ordinal: u32) -> Self {
        Self::new(PrimaryKeyType::Partitioned, ordinal)
    }

    /// Clustering column.
    #[must_use]
    pub fn clustered(ordinal: u32, ordering: Ordering) -> Self {
        Self {
            ordering,
            ..Self::new(PrimaryKeyType::Clustered, ordinal)
        }
    }

    /// Set the column name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// All annotations on one property, zero or one of each.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    /// `#[cql_type]`.
    pub explicit_type: Option<ExplicitType>,

    /// `#[column]`.
    pub column: Option<ColumnOverride>,

    /// `#[primary_key]`.
    pub primary_key: Option<PrimaryKeyOverride>,

    /// `#[primary_key_column]`.
    pub primary_key_column: Option<PrimaryKeyColumn>
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names() {
        assert_eq!(
            PrimaryKeyType::from_name("PARTITIONED"),
            Some(PrimaryKeyType::Partitioned)
        );
        assert_eq!(
            PrimaryKeyType::from_name("clustering"),
            Some(PrimaryKeyType::Clustered)
        );
        assert_eq!(PrimaryKeyType::from_name("sorted"), None);
    }

    #[test]
    fn ordering_names() {
        assert_eq!(Ordering::from_name("desc"), Some(Ordering::Descending));
        assert_eq!(Ordering::from_name("Ascending"), Some(Ordering::Ascending));
        assert_eq!(Ordering::default(), Ordering::Ascending);
    }

    #[test]
    fn explicit_type_builder() {
        let ty = ExplicitType::new(CqlTag::List)
            .argument(CqlTag::Udt)
            .user_type("address");
        assert_eq!(ty.type_arguments, [CqlTag::Udt]);
        assert_eq!(ty.user_type_name, "address");
    }

    #[test]
    fn key_column_constructors() {
        let column = PrimaryKeyColumn::clustered(1, Ordering::Descending).named("created_at");
        assert_eq!(column.role, PrimaryKeyType::Clustered);
        assert_eq!(column.ordinal, 1);
        assert_eq!(column.ordering, Ordering::Descending);
        assert_eq!(column.name.as_deref(), Some("created_at"));

        assert_eq!(
            PrimaryKeyColumn::partitioned(0).ordering,
            Ordering::Ascending
        );
    }
}
