// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! CQL type tags and resolved data types.
//!
//! # Type Tags
//!
//! | Tag | Kind | Notes |
//! |-----|------|-------|
//! | `ascii`, `text`, `varchar` | primitive | `varchar` aliases `text` |
//! | `tinyint`, `smallint`, `int`, `bigint`, `varint` | primitive | |
//! | `float`, `double`, `decimal` | primitive | |
//! | `boolean`, `blob`, `inet`, `uuid`, `timeuuid` | primitive | |
//! | `timestamp`, `date`, `time`, `duration` | primitive | |
//! | `counter` | primitive | |
//! | `list`, `set`, `map` | collection | need element tags |
//! | `udt` | user-defined | resolved by name |
//! | `tuple`, `custom` | other | never resolvable here |

use std::fmt;

use crate::udt::UserType;

/// CQL data type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CqlTag {
    /// US-ASCII string.
    Ascii,
    /// 64-bit signed integer.
    Bigint,
    /// Arbitrary bytes.
    Blob,
    /// `true` or `false`.
    Boolean,
    /// Distributed counter.
    Counter,
    /// Variable-precision decimal.
    Decimal,
    /// 64-bit IEEE-754 float.
    Double,
    /// 32-bit IEEE-754 float.
    Float,
    /// IPv4 or IPv6 address.
    Inet,
    /// 32-bit signed integer.
    Int,
    /// UTF-8 string.
    Text,
    /// Millisecond-precision instant.
    Timestamp,
    /// Any UUID.
    Uuid,
    /// Alias of `text`.
    Varchar,
    /// Arbitrary-precision integer.
    Varint,
    /// Version 1 UUID.
    Timeuuid,
    /// 16-bit signed integer.
    Smallint,
    /// 8-bit signed integer.
    Tinyint,
    /// Date without time.
    Date,
    /// Time of day.
    Time,
    /// Nanosecond-precision duration.
    Duration,
    /// Ordered collection.
    List,
    /// Unordered unique collection.
    Set,
    /// Key/value collection.
    Map,
    /// User-defined type.
    Udt,
    /// Fixed-length tuple.
    Tuple,
    /// Server-side custom type.
    Custom
}

impl CqlTag {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 27] = [
        Self::Ascii,
        Self::Bigint,
        Self::Blob,
        Self::Boolean,
        Self::Counter,
        Self::Decimal,
        Self::Double,
        Self::Float,
        Self::Inet,
        Self::Int,
        Self::Text,
        Self::Timestamp,
        Self::Uuid,
        Self::Varchar,
        Self::Varint,
        Self::Timeuuid,
        Self::Smallint,
        Self::Tinyint,
        Self::Date,
        Self::Time,
        Self::Duration,
        Self::List,
        Self::Set,
        Self::Map,
        Self::Udt,
        Self::Tuple,
        Self::Custom
    ];

    /// CQL spelling of the tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Bigint => "bigint",
            Self::Blob => "blob",
            Self::Boolean => "boolean",
            Self::Counter => "counter",
            Self::Decimal => "decimal",
            Self::Double => "double",
            Self::Float => "float",
            Self::Inet => "inet",
            Self::Int => "int",
            Self::Text => "text",
            Self::Timestamp => "timestamp",
            Self::Uuid => "uuid",
            Self::Varchar => "varchar",
            Self::Varint => "varint",
            Self::Timeuuid => "timeuuid",
            Self::Smallint => "smallint",
            Self::Tinyint => "tinyint",
            Self::Date => "date",
            Self::Time => "time",
            Self::Duration => "duration",
            Self::List => "list",
            Self::Set => "set",
            Self::Map => "map",
            Self::Udt => "udt",
            Self::Tuple => "tuple",
            Self::Custom => "custom"
        }
    }

    /// Parse a tag from its CQL spelling, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(name))
    }

    /// Whether the tag names a scalar type.
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        !matches!(
            self,
            Self::List | Self::Set | Self::Map | Self::Udt | Self::Tuple | Self::Custom
        )
    }

    /// Whether the tag names a collection type.
    #[must_use]
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::List | Self::Set | Self::Map)
    }
}

impl fmt::Display for CqlTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fully resolved column data type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// A primitive type.
    Simple(CqlTag),

    /// `list<element>`.
    List(Box<DataType>),

    /// `set<element>`.
    Set(Box<DataType>),

    /// `map<key, value>`.
    Map(Box<DataType>, Box<DataType>),

    /// A user-defined type resolved by name.
    UserDefined(UserType)
}

impl DataType {
    /// `list<element>`.
    #[must_use]
    pub fn list(element: Self) -> Self {
        Self::List(Box::new(element))
    }

    /// `set<element>`.
    #[must_use]
    pub fn set(element: Self) -> Self {
        Self::Set(Box::new(element))
    }

    /// `map<key, value>`.
    #[must_use]
    pub fn map(key: Self, value: Self) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    /// Top-level tag of this type.
    #[must_use]
    pub const fn tag(&self) -> CqlTag {
        match self {
            Self::Simple(tag) => *tag,
            Self::List(_) => CqlTag::List,
            Self::Set(_) => CqlTag::Set,
            Self::Map(..) => CqlTag::Map,
            Self::UserDefined(_) => CqlTag::Udt
        }
    }

    /// Whether this is a list, set or map.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        self.tag().is_collection()
    }

    /// Render as CQL type syntax.
    ///
    /// User types and collections nested inside a collection are frozen,
    /// as CQL requires.
    #[must_use]
    pub fn to_cql(&self) -> String {
        match self {
            Self::Simple(tag) => tag.name().to_string(),
            Self::List(element) => format!("list<{}>", element.to_cql_element()),
            Self::Set(element) => format!("set<{}>", element.to_cql_element()),
            Self::Map(key, value) => format!(
                "map<{}, {}>",
                key.to_cql_element(),
                value.to_cql_element()
            ),
            Self::UserDefined(user_type) => user_type.qualified_name()
        }
    }

    fn to_cql_element(&self) -> String {
        match self {
            Self::Simple(tag) => tag.name().to_string(),
            _ => format!("frozen<{}>", self.to_cql())
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_cql())
    }
}
