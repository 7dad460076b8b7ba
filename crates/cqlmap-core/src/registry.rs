// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Simple-type registry.
//!
//! Closed, bidirectional mapping between Rust value types (identified by the
//! canonical name in their [`TypeInfo`]) and primitive CQL tags.
//!
//! # Standard Mapping
//!
//! | Rust Type | CQL Tag |
//! |-----------|---------|
//! | `String` | `text` |
//! | `i64` | `bigint` |
//! | `bytes::Bytes` | `blob` |
//! | `bool` | `boolean` |
//! | `f64` | `double` |
//! | `f32` | `float` |
//! | `std::net::IpAddr` | `inet` |
//! | `i32` | `int` |
//! | `i16` | `smallint` |
//! | `i8` | `tinyint` |
//! | `chrono::DateTime<chrono::Utc>` | `timestamp` |
//! | `uuid::Uuid` | `uuid` |
//! | `chrono::NaiveDate` | `date` |
//! | `chrono::NaiveTime` | `time` |
//! | `std::time::Duration` | `duration` |
//!
//! Reverse lookups return the primary Rust type of a tag; `ascii` and
//! `varchar` map back to `String`, `counter` to `i64`, `timeuuid` to
//! `uuid::Uuid`. `decimal` and `varint` have no Rust counterpart.
//!
//! Every standard Rust type maps back to itself. Further names for a tag,
//! such as `std::net::Ipv4Addr` or `std::time::SystemTime`, are added
//! through [`SimpleTypeRegistryBuilder::alias`].
//!
//! The registry is immutable once built, so shared references can be read
//! from any number of threads.

use std::{borrow::Cow, collections::HashMap, sync::LazyLock};

use crate::{
    data_type::{CqlTag, DataType},
    type_info::TypeInfo
};

const FORWARD: &[(&str, CqlTag)] = &[
    ("String", CqlTag::Text),
    ("i64", CqlTag::Bigint),
    ("bytes::Bytes", CqlTag::Blob),
    ("bool", CqlTag::Boolean),
    ("f64", CqlTag::Double),
    ("f32", CqlTag::Float),
    ("std::net::IpAddr", CqlTag::Inet),
    ("i32", CqlTag::Int),
    ("i16", CqlTag::Smallint),
    ("i8", CqlTag::Tinyint),
    ("chrono::DateTime<chrono::Utc>", CqlTag::Timestamp),
    ("uuid::Uuid", CqlTag::Uuid),
    ("chrono::NaiveDate", CqlTag::Date),
    ("chrono::NaiveTime", CqlTag::Time),
    ("std::time::Duration", CqlTag::Duration)
];

const REVERSE: &[(CqlTag, &str)] = &[
    (CqlTag::Ascii, "String"),
    (CqlTag::Bigint, "i64"),
    (CqlTag::Blob, "bytes::Bytes"),
    (CqlTag::Boolean, "bool"),
    (CqlTag::Counter, "i64"),
    (CqlTag::Double, "f64"),
    (CqlTag::Float, "f32"),
    (CqlTag::Inet, "std::net::IpAddr"),
    (CqlTag::Int, "i32"),
    (CqlTag::Text, "String"),
    (CqlTag::Timestamp, "chrono::DateTime<chrono::Utc>"),
    (CqlTag::Uuid, "uuid::Uuid"),
    (CqlTag::Varchar, "String"),
    (CqlTag::Timeuuid, "uuid::Uuid"),
    (CqlTag::Smallint, "i16"),
    (CqlTag::Tinyint, "i8"),
    (CqlTag::Date, "chrono::NaiveDate"),
    (CqlTag::Time, "chrono::NaiveTime"),
    (CqlTag::Duration, "std::time::Duration")
];

static STANDARD: LazyLock<SimpleTypeRegistry> = LazyLock::new(|| SimpleTypeRegistry {
    forward: FORWARD
        .iter()
        .map(|(name, tag)| (Cow::Borrowed(*name), *tag))
        .collect(),
    reverse: REVERSE
        .iter()
        .map(|(tag, name)| (*tag, Cow::Borrowed(*name)))
        .collect()
});

/// Bidirectional Rust type / CQL tag table.
///
/// # Example
///
/// ```rust
/// use cqlmap_core::{CqlTag, SimpleTypeRegistry};
///
/// let registry = SimpleTypeRegistry::builder()
///     .alias("Email", CqlTag::Text)
///     .build();
///
/// assert_eq!(registry.tag_for("Email"), Some(CqlTag::Text));
/// assert_eq!(registry.tag_for("i64"), Some(CqlTag::Bigint));
/// assert_eq!(registry.type_for(CqlTag::Varchar), Some("String"));
/// ```
#[derive(Debug, Clone)]
pub struct SimpleTypeRegistry {
    forward: HashMap<Cow<'static, str>, CqlTag>,
    reverse: HashMap<CqlTag, Cow<'static, str>>
}

impl SimpleTypeRegistry {
    /// The shared standard registry.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Builder seeded with the standard mapping.
    #[must_use]
    pub fn builder() -> SimpleTypeRegistryBuilder {
        SimpleTypeRegistryBuilder {
            registry: STANDARD.clone()
        }
    }

    /// CQL tag for a canonical Rust type name.
    #[must_use]
    pub fn tag_for(&self, type_name: &str) -> Option<CqlTag> {
        self.forward.get(type_name).copied()
    }

    /// Resolved data type for a declared type.
    ///
    /// Only the type name is consulted; containers never match.
    #[must_use]
    pub fn data_type_for(&self, ty: &TypeInfo) -> Option<DataType> {
        self.tag_for(ty.name())
            .and_then(|tag| self.data_type_for_tag(tag))
    }

    /// Resolved data type for a CQL tag.
    ///
    /// Every primitive tag resolves; collection, user-defined, tuple and
    /// custom tags do not.
    #[must_use]
    pub fn data_type_for_tag(&self, tag: CqlTag) -> Option<DataType> {
        tag.is_primitive().then_some(DataType::Simple(tag))
    }

    /// Primary Rust type name for a CQL tag.
    #[must_use]
    pub fn type_for(&self, tag: CqlTag) -> Option<&str> {
        self.reverse.get(&tag).map(AsRef::as_ref)
    }

    /// Every Rust type name with its tag, in no particular order.
    pub fn types(&self) -> impl Iterator<Item = (&str, CqlTag)> {
        self.forward
            .iter()
            .map(|(name, tag)| (name.as_ref(), *tag))
    }
}

impl Default for SimpleTypeRegistry {
    fn default() -> Self {
        STANDARD.clone()
    }
}

/// Builder for a [`SimpleTypeRegistry`] with extra aliases.
#[derive(Debug, Clone)]
pub struct SimpleTypeRegistryBuilder {
    registry: SimpleTypeRegistry
}

impl SimpleTypeRegistryBuilder {
    /// Map a Rust type name to a tag, replacing any existing mapping.
    ///
    /// Aliases to non-primitive tags are stored but never resolve to a
    /// data type.
    #[must_use]
    pub fn alias(mut self, type_name: impl Into<Cow<'static, str>>, tag: CqlTag) -> Self {
        self.registry.forward.insert(type_name.into(), tag);
        self
    }

    /// Set the Rust type a tag maps back to.
    #[must_use]
    pub fn reverse(mut self, tag: CqlTag, type_name: impl Into<Cow<'static, str>>) -> Self {
        self.registry.reverse.insert(tag, type_name.into());
        self
    }

    /// Freeze the registry.
    #[must_use]
    pub fn build(self) -> SimpleTypeRegistry {
        self.registry
    }
}
